use super::*;

/// Tests uniqueness checks against another dealer.
///
/// Expected: Ok(true) for each of name, address and phone number
#[tokio::test]
async fn detects_values_used_by_other_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let repo = DealerRepository::new(db);

    assert!(repo.name_taken(&dealer.name, None).await?);
    assert!(repo.address_taken(&dealer.address, None).await?);
    assert!(repo.phone_number_taken(&dealer.phone_number, None).await?);
    assert!(!repo.name_taken("Unused Name", None).await?);

    Ok(())
}

/// Tests that a dealer's own values are not reported as taken when excluded.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_dealer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dealer = factory::create_dealer(db).await?;

    let repo = DealerRepository::new(db);

    assert!(!repo.name_taken(&dealer.name, Some(dealer.id)).await?);
    assert!(!repo.address_taken(&dealer.address, Some(dealer.id)).await?);
    assert!(
        !repo
            .phone_number_taken(&dealer.phone_number, Some(dealer.id))
            .await?
    );

    Ok(())
}
