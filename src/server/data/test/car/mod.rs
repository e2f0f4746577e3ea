use crate::server::{
    data::car::CarRepository,
    model::car::{CarFilterParams, CreateCarParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod filter;
mod get_dealer_ids_by_brand;
mod order_link;

fn car_params(vin: &str, dealer_id: i32) -> CreateCarParams {
    CreateCarParams {
        vin: vin.to_string(),
        model: "Civic".to_string(),
        brand: "Honda".to_string(),
        year: 2019,
        price: 18000.0,
        color: "Blue".to_string(),
        mileage: 42000.0,
        dealer_id: Some(dealer_id),
    }
}
