use super::*;

/// Tests removing every favorite of a car.
///
/// Verifies that links to other cars survive.
///
/// Expected: Ok(2) and only the other car's link remains
#[tokio::test]
async fn deletes_all_links_of_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    let car = factory::create_car(db, dealer.id).await?;
    let other_car = factory::create_car(db, dealer.id).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    factory::create_favorite(db, first.id, car.id).await?;
    factory::create_favorite(db, second.id, car.id).await?;
    factory::create_favorite(db, first.id, other_car.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete_by_car_id(car.id).await?, 2);

    let by_car = repo.get_user_ids_by_car_ids(&[car.id, other_car.id]).await?;
    assert_eq!(by_car.get(&car.id), None);
    assert_eq!(by_car.get(&other_car.id), Some(&vec![first.id]));

    Ok(())
}

/// Tests removing every favorite of a user.
///
/// Expected: Ok(1) and the user has no favorites left
#[tokio::test]
async fn deletes_all_links_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, car.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete_by_user_id(user.id).await?, 1);

    let by_user = repo.get_car_ids_by_user_ids(&[user.id]).await?;
    assert!(by_user.is_empty());

    Ok(())
}
