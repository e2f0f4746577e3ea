use super::*;

/// Tests creating an order and updating its owner, date and total.
///
/// Expected: Ok(Model) reflecting each write
#[tokio::test]
async fn creates_and_updates_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let placed_at = Utc::now() - Duration::days(1);

    let repo = OrderRepository::new(db);
    let order = repo.create(buyer.id, placed_at, 25000.0).await?;

    assert_eq!(order.user_id, buyer.id);
    assert_eq!(order.total_price, 25000.0);

    let now = Utc::now();
    let updated = repo.update(order.id, other.id, now, 40000.0).await?;

    assert_eq!(updated.user_id, other.id);
    assert_eq!(updated.total_price, 40000.0);
    assert!(updated.order_date > placed_at);

    assert!(repo.delete(order.id).await?);
    assert_eq!(repo.find_by_id(order.id).await?, None);

    Ok(())
}
