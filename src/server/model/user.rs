//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// A user with their favorite cars and placed orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub favorite_car_ids: Vec<i32>,
    pub order_ids: Vec<i32>,
}

impl User {
    pub fn from_entity(
        entity: entity::user::Model,
        favorite_car_ids: Vec<i32>,
        order_ids: Vec<i32>,
    ) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            favorite_car_ids,
            order_ids,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            favorite_car_ids: self.favorite_car_ids,
            order_ids: self.order_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub username: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username,
        }
    }
}
