use std::collections::BTreeMap;

use convert_case::{Case, Casing};
use thiserror::Error;
use validator::ValidationErrors;

/// Business-rule violations detected by the service layer.
///
/// Each variant carries the exact message returned to the client. Rules are checked in a
/// fixed order and the first failure is reported on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid car ID: {0}")]
    InvalidCarId(i32),
    #[error("VIN cannot be empty")]
    VinEmpty,
    #[error("VIN must be exactly 17 characters")]
    VinLength,
    #[error("VIN contains invalid characters")]
    VinFormat,
    #[error("Changing is not allowed VIN: {0}")]
    VinChangeNotAllowed(String),
    #[error("Model cannot be empty")]
    ModelEmpty,
    #[error("Model cannot exceed 50 characters")]
    ModelTooLong,
    #[error("Brand cannot be empty")]
    BrandEmpty,
    #[error("Brand cannot exceed 50 characters")]
    BrandTooLong,
    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },
    #[error("Price must be positive")]
    PriceNotPositive,
    #[error("Mileage cannot be negative")]
    MileageNegative,
    #[error("Color cannot be empty")]
    ColorEmpty,
    #[error("Color cannot exceed 30 characters")]
    ColorTooLong,
    #[error("Color contains invalid characters")]
    ColorInvalid,
    #[error("Minimum year must be at least {0}")]
    FilterMinYear(i32),
    #[error("Maximum mileage cannot be negative")]
    FilterMaxMileage,

    #[error("Dealer ID must be positive")]
    InvalidDealerId,
    #[error("Dealer name cannot be empty")]
    DealerNameEmpty,
    #[error("Dealer name cannot exceed 100 characters")]
    DealerNameTooLong,
    #[error("Dealer name contains invalid characters")]
    DealerNameInvalid,
    #[error("Dealer address cannot be empty")]
    DealerAddressEmpty,
    #[error("Dealer address cannot exceed 200 characters")]
    DealerAddressTooLong,
    #[error("Phone number cannot be empty")]
    PhoneNumberEmpty,
    #[error("Invalid phone number format")]
    PhoneNumberInvalid,
    #[error("Brand must be between 2 and 50 characters")]
    InvalidBrand,

    #[error("Order ID must be positive")]
    InvalidOrderId,
    #[error("Order must contain at least one car")]
    OrderWithoutCars,
    #[error("Order cannot contain more than 10 cars")]
    OrderTooManyCars,
    #[error("Car with ID {0} is listed more than once")]
    OrderDuplicateCar(i32),
    #[error("Order must have a user")]
    OrderWithoutUser,
    #[error("Order date cannot be in the future")]
    OrderDateInFuture,

    #[error("User ID must be positive")]
    InvalidUserId,
    #[error("Username cannot be empty")]
    UsernameEmpty,
}

/// Flattens request-binding errors into `{field: message}` with camelCase field names.
///
/// Only the first message of each field is kept, matching the shape clients expect.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_case(Case::Camel), message)
            })
        })
        .collect()
}

/// Same as [`field_messages`] with every key prefixed by the failing element's position.
pub fn indexed_field_messages(
    index: usize,
    errors: &ValidationErrors,
) -> BTreeMap<String, String> {
    field_messages(errors)
        .into_iter()
        .map(|(field, message)| (format!("[{}].{}", index, field), message))
        .collect()
}
