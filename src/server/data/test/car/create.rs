use super::*;

/// Tests creating a car for an existing dealer.
///
/// Verifies that every field is stored and that the new car is not part of any order.
///
/// Expected: Ok(Model) with order_id None
#[tokio::test]
async fn creates_car_for_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let repo = CarRepository::new(db);
    let car = repo.create(car_params("2HGFC2F59KH000001", dealer.id)).await?;

    assert_eq!(car.vin, "2HGFC2F59KH000001");
    assert_eq!(car.brand, "Honda");
    assert_eq!(car.dealer_id, dealer.id);
    assert_eq!(car.order_id, None);
    assert!(repo.exists_by_vin("2HGFC2F59KH000001").await?);

    Ok(())
}

/// Tests creating a car without a resolved dealer.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_without_dealer_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = car_params("2HGFC2F59KH000002", 1);
    params.dealer_id = None;

    let result = CarRepository::new(db).create(params).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests that updating a car leaves its order link alone.
///
/// Expected: Ok(Model) with new fields and the unchanged order_id
#[tokio::test]
async fn update_keeps_order_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let mut params = car_params(&car.vin, car.dealer_id);
    params.color = "Red".to_string();

    let updated = CarRepository::new(db).update(car.id, params).await?;

    assert_eq!(updated.color, "Red");
    assert_eq!(updated.model, "Civic");
    assert_eq!(updated.order_id, Some(order.id));

    Ok(())
}
