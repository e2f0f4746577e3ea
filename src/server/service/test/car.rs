use super::*;
use crate::server::{
    model::car::{CarFilterParams, UpdateCarParams},
    service::car::CarService,
};

/// Tests creating a car with a fresh VIN and reading it back.
///
/// Expected: Ok(Car) equal to the stored car
#[tokio::test]
async fn creates_car_and_gets_it_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let service = CarService::new(db);
    let created = service
        .create(car_params("JTDBR32E540000001", dealer.id))
        .await
        .unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.dealer_id, dealer.id);
    assert!(fetched.favorited_by.is_empty());

    Ok(())
}

/// Tests creating a car whose VIN is already stored.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_vin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (dealer, car) = factory::helpers::create_car_with_dealer(db).await?;

    let result = CarService::new(db)
        .create(car_params(&car.vin, dealer.id))
        .await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, format!("Car already exists with VIN: {}", car.vin));
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests creating a car for a dealer that does not exist.
///
/// Expected: Err(AppError::NotFound) and no car stored
#[tokio::test]
async fn rejects_missing_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db)
        .create(car_params("JTDBR32E540000002", 42))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Car::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a business rule failure is reported before touching the database.
///
/// Expected: Err(AppError::ValidationErr(PriceNotPositive))
#[tokio::test]
async fn rejects_zero_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    let mut params = car_params("JTDBR32E540000003", dealer.id);
    params.price = 0.0;

    let result = CarService::new(db).create(params).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PriceNotPositive))
    ));

    Ok(())
}

/// Tests updating a car with a VIN different from the stored one.
///
/// Verifies that the stored record is left unchanged.
///
/// Expected: Err(AppError::ValidationErr(VinChangeNotAllowed))
#[tokio::test]
async fn rejects_vin_change_and_keeps_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;

    let result = CarService::new(db)
        .update(UpdateCarParams {
            id: car.id,
            vin: Some("JTDBR32E549999999".to_string()),
            color: Some("Green".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::VinChangeNotAllowed(_)))
    ));

    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert_eq!(stored, Some(car));

    Ok(())
}

/// Tests a partial update that resends the stored VIN.
///
/// Expected: Ok(Car) with only the provided fields changed
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;

    let updated = CarService::new(db)
        .update(UpdateCarParams {
            id: car.id,
            vin: Some(car.vin.clone()),
            price: Some(19999.0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.price, 19999.0);
    assert_eq!(updated.model, car.model);
    assert_eq!(updated.year, car.year);
    assert_eq!(updated.mileage, car.mileage);

    Ok(())
}

/// Tests deleting a car that belongs to a multi-car order.
///
/// Verifies that favorites of the car go, the whole order goes, and the order's other
/// car is released rather than deleted.
///
/// Expected: Ok(()) with order deleted and the sibling car's order_id cleared
#[tokio::test]
async fn delete_removes_favorites_and_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    let car = factory::create_car(db, dealer.id).await?;
    let sibling = factory::create_car(db, dealer.id).await?;
    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id, &[car.clone(), sibling.clone()]).await?;
    factory::create_favorite(db, user.id, car.id).await?;

    CarService::new(db).delete(car.id).await.unwrap();

    assert_eq!(entity::prelude::Car::find_by_id(car.id).one(db).await?, None);
    assert_eq!(entity::prelude::Order::find_by_id(order.id).one(db).await?, None);
    assert_eq!(entity::prelude::UserFavoriteCar::find().count(db).await?, 0);

    let sibling = entity::prelude::Car::find_by_id(sibling.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(sibling.order_id, None);

    Ok(())
}

/// Tests bulk creation where one VIN is already stored.
///
/// Expected: Err(AppError::Conflict) and none of the batch stored
#[tokio::test]
async fn bulk_create_is_all_or_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (dealer, existing) = factory::helpers::create_car_with_dealer(db).await?;

    let result = CarService::new(db)
        .create_bulk(vec![
            car_params("JTDBR32E540000010", dealer.id),
            car_params(&existing.vin, dealer.id),
        ])
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Car::find().count(db).await?, 1);

    Ok(())
}

/// Tests bulk creation of valid cars.
///
/// Expected: Ok with every car created in request order
#[tokio::test]
async fn bulk_creates_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let cars = CarService::new(db)
        .create_bulk(vec![
            car_params("JTDBR32E540000011", dealer.id),
            car_params("JTDBR32E540000012", dealer.id),
        ])
        .await
        .unwrap();

    let vins: Vec<&str> = cars.iter().map(|car| car.vin.as_str()).collect();
    assert_eq!(vins, vec!["JTDBR32E540000011", "JTDBR32E540000012"]);

    Ok(())
}

/// Tests bulk creation with the same VIN twice in the batch.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn bulk_rejects_repeated_vin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let result = CarService::new(db)
        .create_bulk(vec![
            car_params("JTDBR32E540000013", dealer.id),
            car_params("JTDBR32E540000013", dealer.id),
        ])
        .await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Duplicate VIN in request: JTDBR32E540000013");
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests the filter rejecting a minimum year before the first car.
///
/// Expected: Err(AppError::ValidationErr(FilterMinYear))
#[tokio::test]
async fn filter_rejects_min_year_before_first_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db)
        .filter(CarFilterParams {
            min_year: Some(1800),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::FilterMinYear(1886)))
    ));

    Ok(())
}

/// Tests listing the cars of a dealer that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_by_dealer_requires_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db).get_by_dealer(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
