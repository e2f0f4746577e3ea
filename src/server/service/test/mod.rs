use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{validation::ValidationError, AppError};

mod car;
mod user;

fn car_params(vin: &str, dealer_id: i32) -> crate::server::model::car::CreateCarParams {
    crate::server::model::car::CreateCarParams {
        vin: vin.to_string(),
        model: "Corolla".to_string(),
        brand: "Toyota".to_string(),
        year: 2021,
        price: 21000.0,
        color: "White".to_string(),
        mileage: 8000.0,
        dealer_id: Some(dealer_id),
    }
}
