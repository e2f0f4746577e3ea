//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a dealer and one car in its inventory.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((dealer, car))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_dealer(
    db: &DatabaseConnection,
) -> Result<(entity::dealer::Model, entity::car::Model), DbErr> {
    let dealer = crate::factory::dealer::create_dealer(db).await?;
    let car = crate::factory::car::create_car(db, dealer.id).await?;

    Ok((dealer, car))
}

/// Creates a dealer, a car, a user and an order for that user containing the car.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, car, order))` - Created entities, with `car.order_id` pointing at the order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::car::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (_, car) = create_car_with_dealer(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::create_order(db, user.id, std::slice::from_ref(&car)).await?;

    let car = entity::car::Model {
        order_id: Some(order.id),
        ..car
    };

    Ok((user, car, order))
}
