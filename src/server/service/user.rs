use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteRepository, order::OrderRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::{association::AssociationMaintainer, car::find_car},
    validation,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user with their favorites and orders
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        with_relations(self.db, users).await
    }

    /// Gets a user by id
    ///
    /// # Returns
    /// - `Ok(User)` - The user with favorite car ids and order ids
    /// - `Err(AppError::ValidationErr)` - Non-positive id
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let id = validation::user_id(id)?;

        let user = find_user(self.db, id).await?;

        single(with_relations(self.db, vec![user]).await?)
    }

    /// Creates a user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Blank username
    /// - `Err(AppError::Conflict)` - Username already in use
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        validation::validate_username(&params.username)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.username_taken(&params.username, None).await? {
            return Err(username_conflict());
        }

        let user = repo.create(params.username).await?;

        txn.commit().await?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(User::from_entity(user, Vec::new(), Vec::new()))
    }

    /// Renames a user. Without a username the user is returned unchanged.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let id = validation::user_id(params.id)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let mut user = find_user(&txn, id).await?;

        if let Some(username) = params.username {
            validation::validate_username(&username)?;

            if repo.username_taken(&username, Some(id)).await? {
                return Err(username_conflict());
            }

            user = repo.update_username(id, username).await?;
        }

        let user = single(with_relations(&txn, vec![user]).await?)?;

        txn.commit().await?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user, their favorites and every order they placed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let id = validation::user_id(id)?;

        let txn = self.db.begin().await?;

        find_user(&txn, id).await?;
        AssociationMaintainer::new(&txn).remove_user(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Adds a car to a user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - Favorite added
    /// - `Err(AppError::ValidationErr)` - Non-positive user or car id
    /// - `Err(AppError::NotFound)` - The user or car does not exist
    /// - `Err(AppError::Conflict)` - The car is already a favorite
    pub async fn add_favorite(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        let user_id = validation::user_id(user_id)?;
        let car_id = validation::car_id(car_id)?;

        let txn = self.db.begin().await?;

        find_user(&txn, user_id).await?;
        find_car(&txn, car_id).await?;
        AssociationMaintainer::new(&txn)
            .add_favorite(user_id, car_id)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} favorited car {}", user_id, car_id);

        Ok(())
    }

    /// Removes a car from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(AppError::NotFound)` - The user or car does not exist, or the car is not a
    ///   favorite of the user
    pub async fn remove_favorite(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        let user_id = validation::user_id(user_id)?;
        let car_id = validation::car_id(car_id)?;

        let txn = self.db.begin().await?;

        find_user(&txn, user_id).await?;
        find_car(&txn, car_id).await?;
        AssociationMaintainer::new(&txn)
            .remove_favorite(user_id, car_id)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} unfavorited car {}", user_id, car_id);

        Ok(())
    }
}

pub(super) async fn find_user<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::user::Model, AppError> {
    UserRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))
}

fn username_conflict() -> AppError {
    AppError::Conflict("Username already exists".to_string())
}

async fn with_relations<C: ConnectionTrait>(
    db: &C,
    users: Vec<entity::user::Model>,
) -> Result<Vec<User>, AppError> {
    let user_ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    let mut favorites = FavoriteRepository::new(db)
        .get_car_ids_by_user_ids(&user_ids)
        .await?;
    let mut orders = OrderRepository::new(db)
        .get_ids_by_user_ids(&user_ids)
        .await?;

    Ok(users
        .into_iter()
        .map(|user| {
            let favorite_car_ids = favorites.remove(&user.id).unwrap_or_default();
            let order_ids = orders.remove(&user.id).unwrap_or_default();
            User::from_entity(user, favorite_car_ids, order_ids)
        })
        .collect())
}

fn single(mut users: Vec<User>) -> Result<User, AppError> {
    users
        .pop()
        .ok_or_else(|| AppError::InternalError("User missing after load".to_string()))
}
