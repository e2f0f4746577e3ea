use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

lazy_static! {
    /// Seventeen characters from the VIN alphabet, which omits I, O and Q.
    pub static ref REGEX_VIN: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").unwrap();
    pub static ref REGEX_CAR_MODEL: Regex = Regex::new(r"^[a-zA-Z0-9\s-]+$").unwrap();
    /// Letters, whitespace and hyphens. Shared by brand and color.
    pub static ref REGEX_LETTERS_SPACES_HYPHENS: Regex = Regex::new(r"^[a-zA-Z\s-]+$").unwrap();
}

/// A car as returned by the API.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i32,
    #[schema(example = "1HGCM82633A004352")]
    pub vin: String,
    #[schema(example = "Camry")]
    pub model: String,
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = 2020)]
    pub year: i32,
    #[schema(example = 25999.99)]
    pub price: f64,
    #[schema(example = "Silver")]
    pub color: String,
    #[schema(example = 15000.5)]
    pub mileage: f64,
    pub dealer_id: i32,
    /// Ids of the users who marked this car as a favorite.
    pub user_ids_who_favorited: Vec<i32>,
    /// Order currently holding this car, if any.
    pub order_id: Option<i32>,
}

/// Request body for creating a car, also used for each entry of a bulk create.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarDto {
    #[validate(
        length(equal = 17, message = "VIN must be exactly 17 characters"),
        regex(
            path = *REGEX_VIN,
            message = "Invalid VIN format. Must be alphanumeric (excluding I, O, Q)"
        )
    )]
    pub vin: String,

    #[validate(
        length(min = 1, max = 50, message = "Model must be between 1 and 50 characters"),
        regex(
            path = *REGEX_CAR_MODEL,
            message = "Model can only contain letters, numbers, spaces, and hyphens"
        )
    )]
    pub model: String,

    #[validate(
        length(min = 2, max = 50, message = "Brand must be between 2 and 50 characters"),
        regex(
            path = *REGEX_LETTERS_SPACES_HYPHENS,
            message = "Brand can only contain letters, spaces, and hyphens"
        )
    )]
    pub brand: String,

    #[validate(range(min = 1886, message = "Year must be after 1886 (first car invented)"))]
    pub year: i32,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(
        length(min = 2, max = 30, message = "Color must be between 2 and 30 characters"),
        regex(
            path = *REGEX_LETTERS_SPACES_HYPHENS,
            message = "Color can only contain letters, spaces, and hyphens"
        )
    )]
    pub color: String,

    #[validate(range(min = 0.0, message = "Mileage cannot be negative"))]
    pub mileage: f64,

    #[validate(
        required(message = "Dealer ID cannot be null"),
        range(min = 1, message = "Dealer ID must be a positive number")
    )]
    pub dealer_id: Option<i32>,
}

/// Request body for updating a car. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    /// Must equal the stored VIN when present.
    #[validate(length(equal = 17, message = "VIN must be exactly 17 characters"))]
    pub vin: Option<String>,

    #[validate(
        length(min = 1, max = 50, message = "Model must be between 1 and 50 characters"),
        regex(
            path = *REGEX_CAR_MODEL,
            message = "Model can only contain letters, numbers, spaces, and hyphens"
        )
    )]
    pub model: Option<String>,

    #[validate(
        length(min = 2, max = 50, message = "Brand must be between 2 and 50 characters"),
        regex(
            path = *REGEX_LETTERS_SPACES_HYPHENS,
            message = "Brand can only contain letters, spaces, and hyphens"
        )
    )]
    pub brand: Option<String>,

    #[validate(range(min = 1886, message = "Year must be after 1886 (first car invented)"))]
    pub year: Option<i32>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,

    #[validate(
        length(min = 2, max = 30, message = "Color must be between 2 and 30 characters"),
        regex(
            path = *REGEX_LETTERS_SPACES_HYPHENS,
            message = "Color can only contain letters, spaces, and hyphens"
        )
    )]
    pub color: Option<String>,

    #[validate(range(min = 0.0, message = "Mileage cannot be negative"))]
    pub mileage: Option<f64>,

    #[validate(range(min = 1, message = "Dealer ID must be a positive number"))]
    pub dealer_id: Option<i32>,
}

/// Optional bounds for `GET /api/cars/filter`.
#[derive(Serialize, Deserialize, IntoParams, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CarFilterQuery {
    /// Inclusive lower bound on the model year.
    pub min_year: Option<i32>,
    /// Inclusive upper bound on the model year.
    pub max_year: Option<i32>,
    /// Inclusive upper bound on the mileage.
    pub max_mileage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_car() -> CreateCarDto {
        CreateCarDto {
            vin: "1HGCM82633A004352".to_string(),
            model: "Accord".to_string(),
            brand: "Honda".to_string(),
            year: 2003,
            price: 4500.0,
            color: "Dark Blue".to_string(),
            mileage: 180000.0,
            dealer_id: Some(1),
        }
    }

    #[test]
    fn accepts_valid_car() {
        assert!(valid_car().validate().is_ok());
    }

    #[test]
    fn rejects_vin_with_forbidden_letters() {
        let car = CreateCarDto {
            vin: "1HGCM82633A00435O".to_string(),
            ..valid_car()
        };

        let errors = car.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("vin"));
    }

    #[test]
    fn requires_dealer_id() {
        let car = CreateCarDto {
            dealer_id: None,
            ..valid_car()
        };

        let errors = car.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("dealer_id"));
    }

    #[test]
    fn reports_every_failing_field() {
        let car = CreateCarDto {
            brand: "X".to_string(),
            color: "R3d".to_string(),
            mileage: -1.0,
            ..valid_car()
        };

        let errors = car.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("brand"));
        assert!(fields.contains_key("color"));
        assert!(fields.contains_key("mileage"));
    }

    #[test]
    fn update_ignores_absent_fields() {
        assert!(UpdateCarDto::default().validate().is_ok());
    }
}
