//! Business rules checked by the services before anything is written.
//!
//! Every check is a pure function returning the first rule that fails. Request-binding
//! validation on the DTOs runs earlier and is more lenient in places (a price of zero, a
//! seven digit phone number), so these rules are the ones that finally guard the store.

use chrono::{DateTime, Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::{
    model::car::{REGEX_LETTERS_SPACES_HYPHENS, REGEX_VIN},
    server::{
        error::validation::ValidationError,
        model::{car::CreateCarParams, dealer::CreateDealerParams},
    },
};

/// Year the first production automobile was built.
pub const FIRST_CAR_YEAR: i32 = 1886;

pub const MAX_CARS_PER_ORDER: usize = 10;

lazy_static! {
    static ref REGEX_DEALER_NAME: Regex = Regex::new(r"^[\p{L}0-9 .'-]+$").unwrap();
    static ref REGEX_PHONE_NUMBER: Regex = Regex::new(r"^\+?[0-9\s()-]{10,20}$").unwrap();
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn car_id(id: i32) -> Result<i32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidCarId(id));
    }
    Ok(id)
}

pub fn dealer_id(id: i32) -> Result<i32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidDealerId);
    }
    Ok(id)
}

pub fn order_id(id: i32) -> Result<i32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidOrderId);
    }
    Ok(id)
}

pub fn user_id(id: i32) -> Result<i32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidUserId);
    }
    Ok(id)
}

/// Checks a complete car record against the rules in effect this year.
pub fn validate_car(car: &CreateCarParams) -> Result<(), ValidationError> {
    validate_car_in_year(car, Utc::now().year())
}

/// Checks a complete car record, accepting model years up to `current_year + 1`.
pub fn validate_car_in_year(car: &CreateCarParams, current_year: i32) -> Result<(), ValidationError> {
    if is_blank(&car.vin) {
        return Err(ValidationError::VinEmpty);
    }
    if char_len(&car.vin) != 17 {
        return Err(ValidationError::VinLength);
    }
    if !REGEX_VIN.is_match(&car.vin) {
        return Err(ValidationError::VinFormat);
    }

    if is_blank(&car.model) {
        return Err(ValidationError::ModelEmpty);
    }
    if char_len(&car.model) > 50 {
        return Err(ValidationError::ModelTooLong);
    }

    if is_blank(&car.brand) {
        return Err(ValidationError::BrandEmpty);
    }
    if char_len(&car.brand) > 50 {
        return Err(ValidationError::BrandTooLong);
    }

    let max_year = current_year + 1;
    if car.year < FIRST_CAR_YEAR || car.year > max_year {
        return Err(ValidationError::YearOutOfRange {
            min: FIRST_CAR_YEAR,
            max: max_year,
        });
    }

    if car.price <= 0.0 || car.price.is_nan() {
        return Err(ValidationError::PriceNotPositive);
    }

    if car.mileage < 0.0 || car.mileage.is_nan() {
        return Err(ValidationError::MileageNegative);
    }

    if is_blank(&car.color) {
        return Err(ValidationError::ColorEmpty);
    }
    if char_len(&car.color) > 30 {
        return Err(ValidationError::ColorTooLong);
    }
    if !REGEX_LETTERS_SPACES_HYPHENS.is_match(&car.color) {
        return Err(ValidationError::ColorInvalid);
    }

    match car.dealer_id {
        Some(id) => dealer_id(id).map(|_| ()),
        None => Err(ValidationError::InvalidDealerId),
    }
}

pub fn validate_dealer(dealer: &CreateDealerParams) -> Result<(), ValidationError> {
    if is_blank(&dealer.name) {
        return Err(ValidationError::DealerNameEmpty);
    }
    if char_len(&dealer.name) > 100 {
        return Err(ValidationError::DealerNameTooLong);
    }
    if !REGEX_DEALER_NAME.is_match(&dealer.name) {
        return Err(ValidationError::DealerNameInvalid);
    }

    if is_blank(&dealer.address) {
        return Err(ValidationError::DealerAddressEmpty);
    }
    if char_len(&dealer.address) > 200 {
        return Err(ValidationError::DealerAddressTooLong);
    }

    if is_blank(&dealer.phone_number) {
        return Err(ValidationError::PhoneNumberEmpty);
    }
    if !REGEX_PHONE_NUMBER.is_match(&dealer.phone_number) {
        return Err(ValidationError::PhoneNumberInvalid);
    }

    Ok(())
}

/// Checks the car list of an order: 1 to 10 positive, distinct ids.
pub fn validate_order_cars(car_ids: &[i32]) -> Result<(), ValidationError> {
    if car_ids.is_empty() {
        return Err(ValidationError::OrderWithoutCars);
    }
    if car_ids.len() > MAX_CARS_PER_ORDER {
        return Err(ValidationError::OrderTooManyCars);
    }

    let mut seen = HashSet::with_capacity(car_ids.len());
    for id in car_ids {
        car_id(*id)?;
        if !seen.insert(*id) {
            return Err(ValidationError::OrderDuplicateCar(*id));
        }
    }

    Ok(())
}

pub fn validate_order_date(order_date: Option<DateTime<Utc>>) -> Result<(), ValidationError> {
    match order_date {
        Some(date) if date > Utc::now() => Err(ValidationError::OrderDateInFuture),
        _ => Ok(()),
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::UsernameEmpty);
    }
    Ok(())
}

/// Checks the brand of a dealer lookup and returns it.
pub fn validate_brand(brand: Option<&str>) -> Result<&str, ValidationError> {
    match brand {
        Some(brand) if (2..=50).contains(&char_len(brand)) => Ok(brand),
        _ => Err(ValidationError::InvalidBrand),
    }
}

pub fn validate_car_filter(
    min_year: Option<i32>,
    max_mileage: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(min_year) = min_year {
        if min_year < FIRST_CAR_YEAR {
            return Err(ValidationError::FilterMinYear(FIRST_CAR_YEAR));
        }
    }
    if let Some(max_mileage) = max_mileage {
        if max_mileage < 0.0 {
            return Err(ValidationError::FilterMaxMileage);
        }
    }
    Ok(())
}
