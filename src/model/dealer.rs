use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::car::CarDto;

lazy_static! {
    pub static ref REGEX_DEALER_NAME: Regex = Regex::new(r"^[a-zA-Z0-9\s\-.,&]+$").unwrap();
    pub static ref REGEX_PHONE_NUMBER: Regex = Regex::new(r"^\+?[0-9\s\-()]{7,20}$").unwrap();
}

/// A dealer along with every car in its inventory.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealerDto {
    pub id: i32,
    #[schema(example = "Premium Auto Group")]
    pub name: String,
    #[schema(example = "123 Auto Mall Rd, Detroit, MI 48201")]
    pub address: String,
    #[schema(example = "+1 (555) 123-4567")]
    pub phone_number: String,
    pub cars: Vec<CarDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealerDto {
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        regex(
            path = *REGEX_DEALER_NAME,
            message = "Name can only contain letters, numbers, spaces, hyphens, commas, dots, and ampersands"
        )
    )]
    pub name: String,

    #[validate(length(min = 5, max = 200, message = "Address must be between 5 and 200 characters"))]
    pub address: String,

    #[validate(regex(
        path = *REGEX_PHONE_NUMBER,
        message = "Invalid phone number format. Use digits, spaces, hyphens, or parentheses"
    ))]
    pub phone_number: String,
}

/// Request body for updating a dealer. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealerDto {
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        regex(
            path = *REGEX_DEALER_NAME,
            message = "Name can only contain letters, numbers, spaces, hyphens, commas, dots, and ampersands"
        )
    )]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 200, message = "Address must be between 5 and 200 characters"))]
    pub address: Option<String>,

    #[validate(regex(
        path = *REGEX_PHONE_NUMBER,
        message = "Invalid phone number format. Use digits, spaces, hyphens, or parentheses"
    ))]
    pub phone_number: Option<String>,
}

/// Query for the dealer brand lookup.
#[derive(Serialize, Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct BrandQuery {
    /// Car brand to match, compared case-insensitively.
    pub brand: Option<String>,
}
