use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{car::CarRepository, dealer::DealerRepository, favorite::FavoriteRepository},
    error::{validation::ValidationError, AppError},
    model::car::{Car, CarFilterParams, CreateCarParams, UpdateCarParams},
    service::association::AssociationMaintainer,
    validation,
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every car ordered by id
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = CarRepository::new(self.db).get_all().await?;

        with_favorites(self.db, cars).await
    }

    /// Gets a car by id
    ///
    /// # Returns
    /// - `Ok(Car)` - The car with its favoriting users
    /// - `Err(AppError::ValidationErr)` - Non-positive id
    /// - `Err(AppError::NotFound)` - No car with this id
    pub async fn get_by_id(&self, id: i32) -> Result<Car, AppError> {
        let id = validation::car_id(id)?;

        let car = find_car(self.db, id).await?;

        single(with_favorites(self.db, vec![car]).await?)
    }

    /// Gets the cars matching the optional year and mileage bounds
    pub async fn filter(&self, params: CarFilterParams) -> Result<Vec<Car>, AppError> {
        validation::validate_car_filter(params.min_year, params.max_mileage)?;

        let cars = CarRepository::new(self.db).filter(params).await?;

        with_favorites(self.db, cars).await
    }

    /// Gets the cars owned by a dealer
    pub async fn get_by_dealer(&self, dealer_id: i32) -> Result<Vec<Car>, AppError> {
        let dealer_id = validation::dealer_id(dealer_id)?;

        ensure_dealer_exists(self.db, dealer_id).await?;

        let cars = CarRepository::new(self.db)
            .get_by_dealer_id(dealer_id)
            .await?;

        with_favorites(self.db, cars).await
    }

    /// Creates a car for an existing dealer
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car
    /// - `Err(AppError::ValidationErr)` - A car rule failed
    /// - `Err(AppError::Conflict)` - The VIN is already in use
    /// - `Err(AppError::NotFound)` - The dealer does not exist
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        validation::validate_car(&params)?;

        let txn = self.db.begin().await?;
        let repo = CarRepository::new(&txn);

        if repo.exists_by_vin(&params.vin).await? {
            return Err(AppError::Conflict(format!(
                "Car already exists with VIN: {}",
                params.vin
            )));
        }

        if let Some(dealer_id) = params.dealer_id {
            ensure_dealer_exists(&txn, dealer_id).await?;
        }

        let car = repo.create(params).await?;

        txn.commit().await?;

        tracing::info!("Created car {} with VIN {}", car.id, car.vin);

        Ok(Car::from_entity(car, Vec::new()))
    }

    /// Creates several cars at once
    ///
    /// Either every car is created or none is. The batch is rejected when any car fails
    /// validation, any VIN repeats within the batch or already exists, or any dealer is
    /// missing.
    pub async fn create_bulk(&self, params: Vec<CreateCarParams>) -> Result<Vec<Car>, AppError> {
        let mut vins = HashSet::with_capacity(params.len());
        for car in &params {
            validation::validate_car(car)?;

            if !vins.insert(car.vin.as_str()) {
                return Err(AppError::Conflict(format!(
                    "Duplicate VIN in request: {}",
                    car.vin
                )));
            }
        }

        let txn = self.db.begin().await?;
        let repo = CarRepository::new(&txn);

        let requested_vins: Vec<String> = params.iter().map(|car| car.vin.clone()).collect();
        let existing = repo.find_by_vins(&requested_vins).await?;
        if !existing.is_empty() {
            let existing_vins: Vec<String> = existing.into_iter().map(|car| car.vin).collect();
            return Err(AppError::Conflict(format!(
                "Car already exists with VIN: {}",
                existing_vins.join(", ")
            )));
        }

        let mut dealer_ids: Vec<i32> = params.iter().filter_map(|car| car.dealer_id).collect();
        dealer_ids.sort_unstable();
        dealer_ids.dedup();

        let found: HashSet<i32> = DealerRepository::new(&txn)
            .find_by_ids(&dealer_ids)
            .await?
            .into_iter()
            .map(|dealer| dealer.id)
            .collect();
        if let Some(missing) = dealer_ids.iter().find(|id| !found.contains(id)) {
            return Err(dealer_not_found(*missing));
        }

        let mut created = Vec::with_capacity(params.len());
        for car in params {
            created.push(repo.create(car).await?);
        }

        txn.commit().await?;

        tracing::info!("Created {} cars in bulk", created.len());

        Ok(created
            .into_iter()
            .map(|car| Car::from_entity(car, Vec::new()))
            .collect())
    }

    /// Updates the provided fields of a car
    ///
    /// The merged record is validated as a whole. The VIN cannot change.
    ///
    /// # Returns
    /// - `Ok(Car)` - The updated car
    /// - `Err(AppError::ValidationErr)` - A rule failed or a different VIN was sent
    /// - `Err(AppError::NotFound)` - The car or the new dealer does not exist
    pub async fn update(&self, params: UpdateCarParams) -> Result<Car, AppError> {
        let id = validation::car_id(params.id)?;

        let txn = self.db.begin().await?;

        let existing = find_car(&txn, id).await?;

        if let Some(vin) = params.vin.as_ref() {
            if *vin != existing.vin {
                return Err(ValidationError::VinChangeNotAllowed(vin.clone()).into());
            }
        }

        let merged = params.merge(&existing);
        validation::validate_car(&merged)?;

        if let Some(dealer_id) = merged.dealer_id {
            if dealer_id != existing.dealer_id {
                ensure_dealer_exists(&txn, dealer_id).await?;
            }
        }

        let car = CarRepository::new(&txn).update(id, merged).await?;
        let car = single(with_favorites(&txn, vec![car]).await?)?;

        txn.commit().await?;

        tracing::info!("Updated car {}", car.id);

        Ok(car)
    }

    /// Deletes a car
    ///
    /// The car leaves every user's favorites. If it was ordered, the whole order is
    /// deleted and the order's other cars are released.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let id = validation::car_id(id)?;

        let txn = self.db.begin().await?;

        let car = find_car(&txn, id).await?;
        AssociationMaintainer::new(&txn).remove_car(&car).await?;

        txn.commit().await?;

        tracing::info!("Deleted car {}", id);

        Ok(())
    }
}

/// Attaches the favoriting user ids to each car, keeping the input order
pub(super) async fn with_favorites<C: ConnectionTrait>(
    db: &C,
    cars: Vec<entity::car::Model>,
) -> Result<Vec<Car>, AppError> {
    let car_ids: Vec<i32> = cars.iter().map(|car| car.id).collect();
    let mut favorites = FavoriteRepository::new(db)
        .get_user_ids_by_car_ids(&car_ids)
        .await?;

    Ok(cars
        .into_iter()
        .map(|car| {
            let favorited_by = favorites.remove(&car.id).unwrap_or_default();
            Car::from_entity(car, favorited_by)
        })
        .collect())
}

pub(super) async fn find_car<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::car::Model, AppError> {
    CarRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| car_not_found(id))
}

pub(super) fn car_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Car not found with ID: {}", id))
}

pub(super) fn dealer_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Dealer not found with id: {}", id))
}

async fn ensure_dealer_exists<C: ConnectionTrait>(db: &C, dealer_id: i32) -> Result<(), AppError> {
    match DealerRepository::new(db).find_by_id(dealer_id).await? {
        Some(_) => Ok(()),
        None => Err(dealer_not_found(dealer_id)),
    }
}

fn single(mut cars: Vec<Car>) -> Result<Car, AppError> {
    cars.pop()
        .ok_or_else(|| AppError::InternalError("Car missing after load".to_string()))
}
