use super::*;
use crate::server::{
    model::user::{CreateUserParams, UpdateUserParams},
    service::user::UserService,
};

/// Tests creating two users with the same username.
///
/// Expected: Err(AppError::Conflict) on the second attempt
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(CreateUserParams {
            username: "car_fan".to_string(),
        })
        .await
        .unwrap();

    assert!(user.favorite_car_ids.is_empty());
    assert!(user.order_ids.is_empty());

    let result = service
        .create(CreateUserParams {
            username: "car_fan".to_string(),
        })
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert_eq!(message, "Username already exists"),
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests renaming a user to their current username.
///
/// Expected: Ok(User) unchanged
#[tokio::test]
async fn update_allows_own_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(UpdateUserParams {
            id: user.id,
            username: Some(user.username.clone()),
        })
        .await
        .unwrap();

    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests favoriting the same car twice and removing a favorite that does not exist.
///
/// Expected: Conflict on the second add, NotFound on the second remove
#[tokio::test]
async fn favorites_are_unique() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    service.add_favorite(user.id, car.id).await.unwrap();

    let fetched = service.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.favorite_car_ids, vec![car.id]);

    match service.add_favorite(user.id, car.id).await {
        Err(AppError::Conflict(message)) => assert_eq!(message, "Car is already in favorites"),
        other => panic!("expected conflict, got {:?}", other),
    }

    service.remove_favorite(user.id, car.id).await.unwrap();

    match service.remove_favorite(user.id, car.id).await {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Car is not in user's favorites")
        }
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests favoriting a car that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn add_favorite_requires_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db).add_favorite(user.id, 404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a user with favorites and orders.
///
/// Verifies that their favorites and orders go, the ordered cars are released, and other
/// users keep their favorites.
///
/// Expected: Ok(()) with the cascade applied
#[tokio::test]
async fn delete_removes_favorites_and_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, car.id).await?;
    factory::create_favorite(db, other.id, car.id).await?;

    UserService::new(db).delete(user.id).await.unwrap();

    assert_eq!(entity::prelude::User::find_by_id(user.id).one(db).await?, None);
    assert_eq!(entity::prelude::Order::find_by_id(order.id).one(db).await?, None);

    let favorites = entity::prelude::UserFavoriteCar::find().all(db).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, other.id);

    let car = entity::prelude::Car::find_by_id(car.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(car.order_id, None);

    Ok(())
}
