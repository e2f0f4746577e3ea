//! Car domain models and parameters.

use crate::model::car::{CarDto, CarFilterQuery, CreateCarDto, UpdateCarDto};

/// A car together with the ids of the users who favorited it.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub vin: String,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub price: f64,
    pub color: String,
    pub mileage: f64,
    pub dealer_id: i32,
    pub order_id: Option<i32>,
    pub favorited_by: Vec<i32>,
}

impl Car {
    /// Converts an entity row and its favoriting user ids into a domain model.
    pub fn from_entity(entity: entity::car::Model, favorited_by: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            vin: entity.vin,
            model: entity.model,
            brand: entity.brand,
            year: entity.year,
            price: entity.price,
            color: entity.color,
            mileage: entity.mileage,
            dealer_id: entity.dealer_id,
            order_id: entity.order_id,
            favorited_by,
        }
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            vin: self.vin,
            model: self.model,
            brand: self.brand,
            year: self.year,
            price: self.price,
            color: self.color,
            mileage: self.mileage,
            dealer_id: self.dealer_id,
            user_ids_who_favorited: self.favorited_by,
            order_id: self.order_id,
        }
    }
}

/// Every writable car field. Used for creation and as the merged record of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCarParams {
    pub vin: String,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub price: f64,
    pub color: String,
    pub mileage: f64,
    /// `None` only when the request omitted the dealer, which validation rejects.
    pub dealer_id: Option<i32>,
}

impl CreateCarParams {
    pub fn from_dto(dto: CreateCarDto) -> Self {
        Self {
            vin: dto.vin,
            model: dto.model,
            brand: dto.brand,
            year: dto.year,
            price: dto.price,
            color: dto.color,
            mileage: dto.mileage,
            dealer_id: dto.dealer_id,
        }
    }
}

/// Partial car update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCarParams {
    pub id: i32,
    pub vin: Option<String>,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub color: Option<String>,
    pub mileage: Option<f64>,
    pub dealer_id: Option<i32>,
}

impl UpdateCarParams {
    pub fn from_dto(id: i32, dto: UpdateCarDto) -> Self {
        Self {
            id,
            vin: dto.vin,
            model: dto.model,
            brand: dto.brand,
            year: dto.year,
            price: dto.price,
            color: dto.color,
            mileage: dto.mileage,
            dealer_id: dto.dealer_id,
        }
    }

    /// Overlays the provided fields on the stored car, yielding the full record to validate.
    ///
    /// The VIN keeps its stored value; callers compare `self.vin` against it first.
    pub fn merge(self, existing: &entity::car::Model) -> CreateCarParams {
        CreateCarParams {
            vin: existing.vin.clone(),
            model: self.model.unwrap_or_else(|| existing.model.clone()),
            brand: self.brand.unwrap_or_else(|| existing.brand.clone()),
            year: self.year.unwrap_or(existing.year),
            price: self.price.unwrap_or(existing.price),
            color: self.color.unwrap_or_else(|| existing.color.clone()),
            mileage: self.mileage.unwrap_or(existing.mileage),
            dealer_id: Some(self.dealer_id.unwrap_or(existing.dealer_id)),
        }
    }
}

/// Inclusive bounds applied by the car filter. Absent bounds are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarFilterParams {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub max_mileage: Option<f64>,
}

impl From<CarFilterQuery> for CarFilterParams {
    fn from(query: CarFilterQuery) -> Self {
        Self {
            min_year: query.min_year,
            max_year: query.max_year,
            max_mileage: query.max_mileage,
        }
    }
}
