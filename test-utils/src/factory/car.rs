//! Car factory for creating test car entities.
//!
//! Cars always belong to a dealer, so the factory takes the dealer id up front. The
//! default VIN is seventeen characters drawn from the allowed VIN alphabet.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, dealer.id)
///     .brand("Honda")
///     .model("Civic")
///     .price(18000.0)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    dealer_id: i32,
    vin: String,
    model: String,
    brand: String,
    year: i32,
    price: f64,
    color: String,
    mileage: f64,
    order_id: Option<i32>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - vin: `"1HGCM8263"` followed by the zero-padded id
    /// - model: `"Camry"`, brand: `"Toyota"`
    /// - year: `2020`, price: `25000.0`, mileage: `15000.0`
    /// - color: `"Silver"`
    /// - order_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `dealer_id` - Dealer owning the car
    pub fn new(db: &'a DatabaseConnection, dealer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            dealer_id,
            vin: format!("1HGCM8263{:08}", id),
            model: "Camry".to_string(),
            brand: "Toyota".to_string(),
            year: 2020,
            price: 25000.0,
            color: "Silver".to_string(),
            mileage: 15000.0,
            order_id: None,
        }
    }

    pub fn vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn mileage(mut self, mileage: f64) -> Self {
        self.mileage = mileage;
        self
    }

    /// Inserts the car as already belonging to an order.
    ///
    /// The order's total is not adjusted; prefer `order::OrderFactory::cars` when the
    /// total matters.
    pub fn order_id(mut self, order_id: Option<i32>) -> Self {
        self.order_id = order_id;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            vin: ActiveValue::Set(self.vin),
            model: ActiveValue::Set(self.model),
            brand: ActiveValue::Set(self.brand),
            year: ActiveValue::Set(self.year),
            price: ActiveValue::Set(self.price),
            color: ActiveValue::Set(self.color),
            mileage: ActiveValue::Set(self.mileage),
            dealer_id: ActiveValue::Set(self.dealer_id),
            order_id: ActiveValue::Set(self.order_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values for the given dealer.
///
/// Shorthand for `CarFactory::new(db, dealer_id).build().await`.
pub async fn create_car(db: &DatabaseConnection, dealer_id: i32) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, dealer_id).build().await
}
