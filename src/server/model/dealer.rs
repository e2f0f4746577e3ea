//! Dealer domain models and parameters.

use crate::{
    model::dealer::{CreateDealerDto, DealerDto, UpdateDealerDto},
    server::model::car::Car,
};

/// A dealer with its full inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Dealer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub cars: Vec<Car>,
}

impl Dealer {
    pub fn from_entity(entity: entity::dealer::Model, cars: Vec<Car>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            phone_number: entity.phone_number,
            cars,
        }
    }

    pub fn into_dto(self) -> DealerDto {
        DealerDto {
            id: self.id,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            cars: self.cars.into_iter().map(Car::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDealerParams {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl CreateDealerParams {
    pub fn from_dto(dto: CreateDealerDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            phone_number: dto.phone_number,
        }
    }
}

/// Partial dealer update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDealerParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateDealerParams {
    pub fn from_dto(id: i32, dto: UpdateDealerDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
            phone_number: dto.phone_number,
        }
    }

    pub fn merge(self, existing: &entity::dealer::Model) -> CreateDealerParams {
        CreateDealerParams {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            address: self.address.unwrap_or_else(|| existing.address.clone()),
            phone_number: self
                .phone_number
                .unwrap_or_else(|| existing.phone_number.clone()),
        }
    }
}
