//! Order factory for creating test order entities.
//!
//! Creating an order through the factory also points each supplied car at the new order
//! and stores the sum of their prices as the total, mirroring what the order service does.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Factory for creating test orders.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, user.id)
///     .cars(vec![car_a, car_b])
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    order_date: DateTime<Utc>,
    cars: Vec<entity::car::Model>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with no cars, dated now.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - User placing the order
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            order_date: Utc::now(),
            cars: Vec::new(),
        }
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Sets the cars that belong to the order.
    pub fn cars(mut self, cars: Vec<entity::car::Model>) -> Self {
        self.cars = cars;
        self
    }

    /// Builds and inserts the order, then assigns its cars.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let total_price: f64 = self.cars.iter().map(|car| car.price).sum();

        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_date: ActiveValue::Set(self.order_date),
            total_price: ActiveValue::Set(total_price),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await?;

        if !self.cars.is_empty() {
            let car_ids: Vec<i32> = self.cars.iter().map(|car| car.id).collect();

            entity::prelude::Car::update_many()
                .set(entity::car::ActiveModel {
                    order_id: ActiveValue::Set(Some(order.id)),
                    ..Default::default()
                })
                .filter(entity::car::Column::Id.is_in(car_ids))
                .exec(self.db)
                .await?;
        }

        Ok(order)
    }
}

/// Creates an order for `user_id` containing `cars`.
///
/// Shorthand for `OrderFactory::new(db, user_id).cars(cars.to_vec()).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    cars: &[entity::car::Model],
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id)
        .cars(cars.to_vec())
        .build()
        .await
}
