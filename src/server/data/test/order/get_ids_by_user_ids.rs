use super::*;

/// Tests grouping order ids by their users.
///
/// Expected: Ok with each user's order ids ascending and no entry for users without orders
#[tokio::test]
async fn groups_orders_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let idle = factory::create_user(db).await?;

    let a = factory::create_order(db, first.id, &[]).await?;
    let b = factory::create_order(db, second.id, &[]).await?;
    let c = factory::create_order(db, first.id, &[]).await?;

    let grouped = OrderRepository::new(db)
        .get_ids_by_user_ids(&[first.id, second.id, idle.id])
        .await?;

    assert_eq!(grouped.get(&first.id), Some(&vec![a.id, c.id]));
    assert_eq!(grouped.get(&second.id), Some(&vec![b.id]));
    assert_eq!(grouped.get(&idle.id), None);

    Ok(())
}
