use super::*;

/// Tests adding and removing a single favorite link.
///
/// Expected: exists flips to true then back to false
#[tokio::test]
async fn adds_and_removes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(!repo.exists(user.id, car.id).await?);

    repo.create(user.id, car.id).await?;
    assert!(repo.exists(user.id, car.id).await?);
    assert_eq!(
        repo.get_car_ids_by_user_ids(&[user.id]).await?.get(&user.id),
        Some(&vec![car.id])
    );

    assert!(repo.delete(user.id, car.id).await?);
    assert!(!repo.exists(user.id, car.id).await?);
    assert!(!repo.delete(user.id, car.id).await?);

    Ok(())
}

/// Tests that a user cannot favorite the same car twice at the database level.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, car.id).await?;

    let result = FavoriteRepository::new(db).create(user.id, car.id).await;

    assert!(result.is_err());

    Ok(())
}
