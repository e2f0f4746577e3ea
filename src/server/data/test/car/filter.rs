use super::*;

/// Tests filtering cars with every bound set.
///
/// Verifies that the year range is inclusive on both ends and mileage is an upper bound.
///
/// Expected: Ok with only the matching cars, ordered by id
#[tokio::test]
async fn applies_all_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    let old = factory::car::CarFactory::new(db, dealer.id)
        .year(2010)
        .mileage(90000.0)
        .build()
        .await?;
    let in_range = factory::car::CarFactory::new(db, dealer.id)
        .year(2015)
        .mileage(30000.0)
        .build()
        .await?;
    let edge = factory::car::CarFactory::new(db, dealer.id)
        .year(2018)
        .mileage(50000.0)
        .build()
        .await?;
    let high_mileage = factory::car::CarFactory::new(db, dealer.id)
        .year(2016)
        .mileage(120000.0)
        .build()
        .await?;

    let cars = CarRepository::new(db)
        .filter(CarFilterParams {
            min_year: Some(2015),
            max_year: Some(2018),
            max_mileage: Some(50000.0),
        })
        .await?;

    let ids: Vec<i32> = cars.iter().map(|car| car.id).collect();
    assert_eq!(ids, vec![in_range.id, edge.id]);
    assert!(!ids.contains(&old.id));
    assert!(!ids.contains(&high_mileage.id));

    Ok(())
}

/// Tests filtering with no bounds.
///
/// Expected: Ok with every car
#[tokio::test]
async fn returns_all_without_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    factory::create_car(db, dealer.id).await?;
    factory::create_car(db, dealer.id).await?;

    let cars = CarRepository::new(db)
        .filter(CarFilterParams::default())
        .await?;

    assert_eq!(cars.len(), 2);

    Ok(())
}
