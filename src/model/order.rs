use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Serde adapter for the `yyyy-MM-dd HH:mm:ss` order timestamp, interpreted as UTC.
pub mod order_date_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT)
            .map(|date| date.and_utc())
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] DateTime<Utc>);

            let wrapper = Option::<Wrapper>::deserialize(deserializer)?;
            Ok(wrapper.map(|Wrapper(date)| date))
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    #[serde(with = "order_date_format")]
    #[schema(value_type = String, example = "2023-05-15 14:30:00")]
    pub order_date: DateTime<Utc>,
    /// Sum of the prices of every car in the order.
    #[schema(example = 45000.5)]
    pub total_price: f64,
    pub user_id: i32,
    pub car_ids: Vec<i32>,
}

/// Request body for placing an order.
///
/// `orderDate` is accepted for compatibility but the stored date is always the time the
/// order was written. Any `totalPrice` sent by the client is ignored.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    #[serde(default, with = "order_date_format::option")]
    #[schema(value_type = Option<String>, example = "2023-05-15 14:30:00")]
    #[validate(custom(function = "validate_not_in_future"))]
    pub order_date: Option<DateTime<Utc>>,

    #[validate(
        required(message = "User ID cannot be null"),
        range(min = 1, message = "User ID must be positive")
    )]
    pub user_id: Option<i32>,

    #[validate(
        required(message = "Car IDs list cannot be empty"),
        length(min = 1, max = 10, message = "Order must contain between 1 and 10 cars"),
        custom(function = "validate_car_ids")
    )]
    pub car_ids: Option<Vec<i32>>,
}

/// Request body for updating an order. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    #[serde(default, with = "order_date_format::option")]
    #[schema(value_type = Option<String>, example = "2023-05-15 14:30:00")]
    #[validate(custom(function = "validate_not_in_future"))]
    pub order_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: Option<i32>,

    #[validate(
        length(min = 1, max = 10, message = "Order must contain between 1 and 10 cars"),
        custom(function = "validate_car_ids")
    )]
    pub car_ids: Option<Vec<i32>>,
}

fn validate_not_in_future(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date > Utc::now() {
        return Err(ValidationError::new("past_or_present")
            .with_message("Order date cannot be in the future".into()));
    }

    Ok(())
}

fn validate_car_ids(car_ids: &Vec<i32>) -> Result<(), ValidationError> {
    if car_ids.iter().any(|id| *id < 1) {
        return Err(ValidationError::new("positive").with_message("Car ID must be positive".into()));
    }

    Ok(())
}
