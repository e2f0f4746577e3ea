use super::*;

/// Tests attaching cars to an order and detaching them again.
///
/// Expected: Ok with car ids grouped under the order, then none
#[tokio::test]
async fn sets_and_clears_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;
    let user = factory::create_user(db).await?;
    let first = factory::create_car(db, dealer.id).await?;
    let second = factory::create_car(db, dealer.id).await?;
    let order = factory::order::OrderFactory::new(db, user.id).build().await?;

    let repo = CarRepository::new(db);

    let updated = repo.set_order(&[first.id, second.id], Some(order.id)).await?;
    assert_eq!(updated, 2);

    let grouped = repo.get_ids_by_order_ids(&[order.id]).await?;
    assert_eq!(grouped.get(&order.id), Some(&vec![first.id, second.id]));

    let cleared = repo.clear_order(order.id).await?;
    assert_eq!(cleared, 2);
    assert!(repo.get_by_order_id(order.id).await?.is_empty());

    Ok(())
}

/// Tests setting the order of an empty car list.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn set_order_ignores_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CarRepository::new(db).set_order(&[], None).await?;

    assert_eq!(updated, 0);

    Ok(())
}
