use super::*;

/// Tests creating and then updating a dealer.
///
/// Expected: Ok(Model) reflecting each write
#[tokio::test]
async fn creates_and_updates_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DealerRepository::new(db);
    let created = repo
        .create(CreateDealerParams {
            name: "Northside Motors".to_string(),
            address: "12 Harbor St".to_string(),
            phone_number: "+1 555 0100100".to_string(),
        })
        .await?;

    assert_eq!(created.name, "Northside Motors");

    let updated = repo
        .update(
            created.id,
            CreateDealerParams {
                name: "Northside Auto".to_string(),
                address: created.address.clone(),
                phone_number: created.phone_number.clone(),
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Northside Auto");
    assert_eq!(repo.find_by_id(created.id).await?, Some(updated));

    Ok(())
}

/// Tests deleting a dealer that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_reports_missing_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DealerRepository::new(db);

    assert!(!repo.delete(999).await?);

    let dealer = factory::create_dealer(db).await?;
    assert!(repo.delete(dealer.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
