//! Keeps both sides of the car, order, favorite and dealer relationships consistent.
//!
//! Relationships are stored as foreign keys: `cars.dealer_id`, `cars.order_id`,
//! `orders.user_id` and the `user_favorite_car` join table. The maintainer owns every write
//! that touches more than one side, including the cascading teardown run before a car,
//! order, user or dealer is removed.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        car::CarRepository, dealer::DealerRepository, favorite::FavoriteRepository,
        order::OrderRepository, user::UserRepository,
    },
    error::AppError,
};

/// Members added to and removed from an id set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub added: Vec<i32>,
    pub removed: Vec<i32>,
}

/// Computes the ids to add and remove to turn `current` into `desired`.
///
/// Both lists keep the order in which ids appear in their source slice.
pub fn reconcile(current: &[i32], desired: &[i32]) -> Reconciliation {
    let current_set: HashSet<i32> = current.iter().copied().collect();
    let desired_set: HashSet<i32> = desired.iter().copied().collect();

    let mut seen = HashSet::new();
    let added = desired
        .iter()
        .copied()
        .filter(|id| !current_set.contains(id) && seen.insert(*id))
        .collect();

    let mut seen = HashSet::new();
    let removed = current
        .iter()
        .copied()
        .filter(|id| !desired_set.contains(id) && seen.insert(*id))
        .collect();

    Reconciliation { added, removed }
}

pub struct AssociationMaintainer<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssociationMaintainer<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a car as a favorite of a user
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(AppError::Conflict)` - The user already favorited the car
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_favorite(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.exists(user_id, car_id).await? {
            return Err(AppError::Conflict("Car is already in favorites".to_string()));
        }

        repo.create(user_id, car_id).await?;

        Ok(())
    }

    /// Removes a car from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(AppError::NotFound)` - The car was not a favorite of the user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_favorite(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete(user_id, car_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "Car is not in user's favorites".to_string(),
            ));
        }

        Ok(())
    }

    /// Rejects cars that already belong to an order other than `order_id`.
    ///
    /// Pass `None` when placing a new order, so any ordered car is rejected.
    pub fn ensure_cars_available(
        &self,
        cars: &[entity::car::Model],
        order_id: Option<i32>,
    ) -> Result<(), AppError> {
        for car in cars {
            if let Some(current) = car.order_id {
                if Some(current) != order_id {
                    return Err(AppError::Conflict(format!(
                        "Car with ID {} is already ordered",
                        car.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Moves the order's car links from `current` to `desired`.
    ///
    /// Cars leaving the order are detached and cars joining it are attached. Availability
    /// of the joining cars must be checked beforehand with `ensure_cars_available`.
    pub async fn reconcile_order_cars(
        &self,
        order_id: i32,
        current: &[i32],
        desired: &[i32],
    ) -> Result<Reconciliation, AppError> {
        let delta = reconcile(current, desired);
        let repo = CarRepository::new(self.db);

        repo.set_order(&delta.removed, None).await?;
        repo.set_order(&delta.added, Some(order_id)).await?;

        Ok(delta)
    }

    /// Detaches every car of an order, then deletes the order
    pub async fn remove_order(&self, order_id: i32) -> Result<(), AppError> {
        CarRepository::new(self.db).clear_order(order_id).await?;
        OrderRepository::new(self.db).delete(order_id).await?;

        Ok(())
    }

    /// Deletes a car after unlinking it from favorites and removing its order.
    ///
    /// An order cannot exist without cars, so the whole order goes and its other cars
    /// become available again.
    pub async fn remove_car(&self, car: &entity::car::Model) -> Result<(), AppError> {
        FavoriteRepository::new(self.db)
            .delete_by_car_id(car.id)
            .await?;

        if let Some(order_id) = car.order_id {
            self.remove_order(order_id).await?;
        }

        CarRepository::new(self.db).delete(car.id).await?;

        Ok(())
    }

    /// Deletes a dealer after tearing down each of its cars
    pub async fn remove_dealer(&self, dealer_id: i32) -> Result<(), AppError> {
        let car_repo = CarRepository::new(self.db);

        for car in car_repo.get_by_dealer_id(dealer_id).await? {
            // An earlier car may have removed the order this one pointed at.
            let car = match car_repo.find_by_id(car.id).await? {
                Some(car) => car,
                None => continue,
            };
            self.remove_car(&car).await?;
        }

        DealerRepository::new(self.db).delete(dealer_id).await?;

        Ok(())
    }

    /// Deletes a user after removing their favorites and every order they placed
    pub async fn remove_user(&self, user_id: i32) -> Result<(), AppError> {
        FavoriteRepository::new(self.db)
            .delete_by_user_id(user_id)
            .await?;

        for order in OrderRepository::new(self.db).get_by_user_id(user_id).await? {
            self.remove_order(order.id).await?;
        }

        UserRepository::new(self.db).delete(user_id).await?;

        Ok(())
    }
}
