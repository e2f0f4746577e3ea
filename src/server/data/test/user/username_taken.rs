use super::*;

/// Tests the username uniqueness check with and without an excluded id.
///
/// Expected: Ok(true) against others, Ok(false) against the user themselves
#[tokio::test]
async fn checks_username_against_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken(&user.username, None).await?);
    assert!(!repo.username_taken(&user.username, Some(user.id)).await?);
    assert!(!repo.username_taken("nobody", None).await?);

    Ok(())
}
