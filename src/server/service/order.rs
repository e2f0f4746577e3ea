use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{car::CarRepository, order::OrderRepository},
    error::{validation::ValidationError, AppError},
    model::order::{CreateOrderParams, Order, UpdateOrderParams},
    service::{
        association::AssociationMaintainer,
        car::car_not_found,
        user::find_user,
    },
    validation,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every order with its car ids
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = OrderRepository::new(self.db).get_all().await?;

        with_car_ids(self.db, orders).await
    }

    /// Gets an order by id
    ///
    /// # Returns
    /// - `Ok(Order)` - The order with its car ids
    /// - `Err(AppError::ValidationErr)` - Non-positive id
    /// - `Err(AppError::NotFound)` - No order with this id
    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        let id = validation::order_id(id)?;

        let order = find_order(self.db, id).await?;

        single(with_car_ids(self.db, vec![order]).await?)
    }

    /// Places an order for a user
    ///
    /// The total is the sum of the car prices and the date is the current instant; any
    /// client-supplied date is only checked not to lie in the future.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order
    /// - `Err(AppError::ValidationErr)` - Missing user, bad car list or future date
    /// - `Err(AppError::NotFound)` - The user or one of the cars does not exist
    /// - `Err(AppError::Conflict)` - One of the cars is already ordered
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let user_id = params.user_id.ok_or(ValidationError::OrderWithoutUser)?;
        let user_id = validation::user_id(user_id)?;
        let car_ids = params.car_ids.ok_or(ValidationError::OrderWithoutCars)?;
        validation::validate_order_cars(&car_ids)?;
        validation::validate_order_date(params.order_date)?;

        let txn = self.db.begin().await?;

        find_user(&txn, user_id).await?;

        let cars = resolve_cars(&txn, &car_ids).await?;
        AssociationMaintainer::new(&txn).ensure_cars_available(&cars, None)?;

        let total_price: f64 = cars.iter().map(|car| car.price).sum();
        let order = OrderRepository::new(&txn)
            .create(user_id, Utc::now(), total_price)
            .await?;

        CarRepository::new(&txn)
            .set_order(&car_ids, Some(order.id))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} placed order {} with {} cars",
            user_id,
            order.id,
            cars.len()
        );

        let car_ids = cars.into_iter().map(|car| car.id).collect();

        Ok(Order::from_entity(order, car_ids))
    }

    /// Updates an order's user and cars
    ///
    /// Omitted fields keep their current value. The total is recomputed and the order date
    /// is reset to the current instant on every update. Cars already in this order may stay;
    /// cars in any other order are rejected.
    pub async fn update(&self, params: UpdateOrderParams) -> Result<Order, AppError> {
        let id = validation::order_id(params.id)?;
        if let Some(user_id) = params.user_id {
            validation::user_id(user_id)?;
        }
        if let Some(car_ids) = params.car_ids.as_deref() {
            validation::validate_order_cars(car_ids)?;
        }
        validation::validate_order_date(params.order_date)?;

        let txn = self.db.begin().await?;

        let existing = find_order(&txn, id).await?;

        let user_id = params.user_id.unwrap_or(existing.user_id);
        find_user(&txn, user_id).await?;

        let current: Vec<i32> = CarRepository::new(&txn)
            .get_by_order_id(id)
            .await?
            .into_iter()
            .map(|car| car.id)
            .collect();
        let desired = params.car_ids.unwrap_or_else(|| current.clone());

        let cars = resolve_cars(&txn, &desired).await?;

        let maintainer = AssociationMaintainer::new(&txn);
        maintainer.ensure_cars_available(&cars, Some(id))?;
        let delta = maintainer.reconcile_order_cars(id, &current, &desired).await?;

        let total_price: f64 = cars.iter().map(|car| car.price).sum();
        let order = OrderRepository::new(&txn)
            .update(id, user_id, Utc::now(), total_price)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Updated order {}: {} cars added, {} removed",
            id,
            delta.added.len(),
            delta.removed.len()
        );

        let car_ids = cars.into_iter().map(|car| car.id).collect();

        Ok(Order::from_entity(order, car_ids))
    }

    /// Deletes an order and releases its cars
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let id = validation::order_id(id)?;

        let txn = self.db.begin().await?;

        find_order(&txn, id).await?;
        AssociationMaintainer::new(&txn).remove_order(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted order {}", id);

        Ok(())
    }
}

async fn find_order<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::order::Model, AppError> {
    OrderRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {}", id)))
}

/// Loads every requested car, failing on the first id with no car in request order
async fn resolve_cars<C: ConnectionTrait>(
    db: &C,
    car_ids: &[i32],
) -> Result<Vec<entity::car::Model>, AppError> {
    let cars = CarRepository::new(db).find_by_ids(car_ids).await?;

    let found: HashSet<i32> = cars.iter().map(|car| car.id).collect();
    if let Some(missing) = car_ids.iter().find(|id| !found.contains(id)) {
        return Err(car_not_found(*missing));
    }

    Ok(cars)
}

async fn with_car_ids<C: ConnectionTrait>(
    db: &C,
    orders: Vec<entity::order::Model>,
) -> Result<Vec<Order>, AppError> {
    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    let mut car_ids = CarRepository::new(db)
        .get_ids_by_order_ids(&order_ids)
        .await?;

    Ok(orders
        .into_iter()
        .map(|order| {
            let ids = car_ids.remove(&order.id).unwrap_or_default();
            Order::from_entity(order, ids)
        })
        .collect())
}

fn single(mut orders: Vec<Order>) -> Result<Order, AppError> {
    orders
        .pop()
        .ok_or_else(|| AppError::InternalError("Order missing after load".to_string()))
}
