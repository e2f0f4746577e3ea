use super::*;

/// Tests looking up dealers by brand with different casing.
///
/// Verifies that the match ignores case and each dealer appears once even when it
/// stocks several cars of the brand.
///
/// Expected: Ok with distinct dealer ids
#[tokio::test]
async fn matches_brand_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let toyota_dealer = factory::create_dealer(db).await?;
    let honda_dealer = factory::create_dealer(db).await?;

    factory::car::CarFactory::new(db, toyota_dealer.id)
        .brand("Toyota")
        .build()
        .await?;
    factory::car::CarFactory::new(db, toyota_dealer.id)
        .brand("TOYOTA")
        .build()
        .await?;
    factory::car::CarFactory::new(db, honda_dealer.id)
        .brand("Honda")
        .build()
        .await?;

    let dealer_ids = CarRepository::new(db)
        .get_dealer_ids_by_brand("toyota")
        .await?;

    assert_eq!(dealer_ids, vec![toyota_dealer.id]);

    Ok(())
}

/// Tests looking up a brand no dealer stocks.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unknown_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_car_with_dealer(db).await?;

    let dealer_ids = CarRepository::new(db)
        .get_dealer_ids_by_brand("Lada")
        .await?;

    assert!(dealer_ids.is_empty());

    Ok(())
}
