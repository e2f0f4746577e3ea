//! Favorite factory linking a user to a car they marked as a favorite.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite link between an existing user and car.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User marking the favorite
/// - `car_id` - Car being marked
///
/// # Returns
/// - `Ok(entity::user_favorite_car::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert, including a duplicate link
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::user_favorite_car::Model, DbErr> {
    entity::user_favorite_car::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        car_id: ActiveValue::Set(car_id),
    }
    .insert(db)
    .await
}
