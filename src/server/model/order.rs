//! Order domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::order::{CreateOrderDto, OrderDto, UpdateOrderDto};

/// An order with the ids of the cars it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub total_price: f64,
    pub user_id: i32,
    pub car_ids: Vec<i32>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, car_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            order_date: entity.order_date,
            total_price: entity.total_price,
            user_id: entity.user_id,
            car_ids,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_date: self.order_date,
            total_price: self.total_price,
            user_id: self.user_id,
            car_ids: self.car_ids,
        }
    }
}

/// Order placement input. Missing values are reported by the order rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOrderParams {
    pub user_id: Option<i32>,
    pub car_ids: Option<Vec<i32>>,
    /// Client-supplied date. Only checked, never stored.
    pub order_date: Option<DateTime<Utc>>,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            user_id: dto.user_id,
            car_ids: dto.car_ids,
            order_date: dto.order_date,
        }
    }
}

/// Partial order update. `None` keeps the current user or car set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOrderParams {
    pub id: i32,
    pub user_id: Option<i32>,
    pub car_ids: Option<Vec<i32>>,
    pub order_date: Option<DateTime<Utc>>,
}

impl UpdateOrderParams {
    pub fn from_dto(id: i32, dto: UpdateOrderDto) -> Self {
        Self {
            id,
            user_id: dto.user_id,
            car_ids: dto.car_ids,
            order_date: dto.order_date,
        }
    }
}
