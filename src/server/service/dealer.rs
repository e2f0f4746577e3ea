use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{car::CarRepository, dealer::DealerRepository},
    error::AppError,
    model::{
        car::Car,
        dealer::{CreateDealerParams, Dealer, UpdateDealerParams},
    },
    service::{
        association::AssociationMaintainer,
        car::{dealer_not_found, with_favorites},
    },
    validation,
};

pub struct DealerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DealerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every dealer with its cars
    pub async fn get_all(&self) -> Result<Vec<Dealer>, AppError> {
        let dealers = DealerRepository::new(self.db).get_all().await?;

        with_cars(self.db, dealers).await
    }

    /// Gets a dealer by id with its cars
    ///
    /// # Returns
    /// - `Ok(Dealer)` - The dealer
    /// - `Err(AppError::ValidationErr)` - Non-positive id
    /// - `Err(AppError::NotFound)` - No dealer with this id
    pub async fn get_by_id(&self, id: i32) -> Result<Dealer, AppError> {
        let id = validation::dealer_id(id)?;

        let dealer = find_dealer(self.db, id).await?;

        single(with_cars(self.db, vec![dealer]).await?)
    }

    /// Gets the dealers stocking at least one car of `brand`, ignoring case
    pub async fn get_by_brand(&self, brand: Option<&str>) -> Result<Vec<Dealer>, AppError> {
        let brand = validation::validate_brand(brand)?;

        let dealer_ids = CarRepository::new(self.db)
            .get_dealer_ids_by_brand(brand)
            .await?;
        let dealers = DealerRepository::new(self.db)
            .find_by_ids(&dealer_ids)
            .await?;

        with_cars(self.db, dealers).await
    }

    /// Creates a dealer with no cars
    ///
    /// # Returns
    /// - `Ok(Dealer)` - The created dealer
    /// - `Err(AppError::ValidationErr)` - A dealer rule failed
    /// - `Err(AppError::Conflict)` - Name, phone number or address already in use
    pub async fn create(&self, params: CreateDealerParams) -> Result<Dealer, AppError> {
        validation::validate_dealer(&params)?;

        let txn = self.db.begin().await?;

        ensure_unique(&txn, &params, None).await?;

        let dealer = DealerRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created dealer {} ({})", dealer.id, dealer.name);

        Ok(Dealer::from_entity(dealer, Vec::new()))
    }

    /// Updates the provided fields of a dealer
    ///
    /// Uniqueness is checked against every other dealer, so resending a dealer's own
    /// values is accepted.
    pub async fn update(&self, params: UpdateDealerParams) -> Result<Dealer, AppError> {
        let id = validation::dealer_id(params.id)?;

        let txn = self.db.begin().await?;

        let existing = find_dealer(&txn, id).await?;

        let merged = params.merge(&existing);
        validation::validate_dealer(&merged)?;

        ensure_unique(&txn, &merged, Some(id)).await?;

        let dealer = DealerRepository::new(&txn).update(id, merged).await?;
        let dealer = single(with_cars(&txn, vec![dealer]).await?)?;

        txn.commit().await?;

        tracing::info!("Updated dealer {}", dealer.id);

        Ok(dealer)
    }

    /// Deletes a dealer and every car it owns
    ///
    /// Each car is torn down as in a single car delete, so orders containing any of the
    /// dealer's cars are deleted as well.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let id = validation::dealer_id(id)?;

        let txn = self.db.begin().await?;

        find_dealer(&txn, id).await?;
        AssociationMaintainer::new(&txn).remove_dealer(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted dealer {}", id);

        Ok(())
    }
}

async fn find_dealer<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::dealer::Model, AppError> {
    DealerRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| dealer_not_found(id))
}

/// Checks name, phone number and address in that order against other dealers
async fn ensure_unique<C: ConnectionTrait>(
    db: &C,
    params: &CreateDealerParams,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = DealerRepository::new(db);

    if repo.name_taken(&params.name, exclude_id).await? {
        return Err(AppError::Conflict(
            "Dealer with this name already exists".to_string(),
        ));
    }
    if repo
        .phone_number_taken(&params.phone_number, exclude_id)
        .await?
    {
        return Err(AppError::Conflict(
            "Dealer with this phone number already exists".to_string(),
        ));
    }
    if repo.address_taken(&params.address, exclude_id).await? {
        return Err(AppError::Conflict(
            "Dealer with this address already exists".to_string(),
        ));
    }

    Ok(())
}

/// Loads the cars of each dealer with one query for cars and one for favorites
async fn with_cars<C: ConnectionTrait>(
    db: &C,
    dealers: Vec<entity::dealer::Model>,
) -> Result<Vec<Dealer>, AppError> {
    let dealer_ids: Vec<i32> = dealers.iter().map(|dealer| dealer.id).collect();
    let cars_by_dealer = CarRepository::new(db)
        .get_by_dealer_ids(&dealer_ids)
        .await?;

    let cars = with_favorites(db, cars_by_dealer.into_values().flatten().collect()).await?;

    let mut grouped: HashMap<i32, Vec<Car>> = HashMap::new();
    for car in cars {
        grouped.entry(car.dealer_id).or_default().push(car);
    }

    Ok(dealers
        .into_iter()
        .map(|dealer| {
            let mut cars = grouped.remove(&dealer.id).unwrap_or_default();
            cars.sort_by_key(|car| car.id);
            Dealer::from_entity(dealer, cars)
        })
        .collect())
}

fn single(mut dealers: Vec<Dealer>) -> Result<Dealer, AppError> {
    dealers
        .pop()
        .ok_or_else(|| AppError::InternalError("Dealer missing after load".to_string()))
}
