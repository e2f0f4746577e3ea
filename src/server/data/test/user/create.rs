use super::*;

/// Tests creating a user and renaming them.
///
/// Expected: Ok(Model) with the new username
#[tokio::test]
async fn creates_and_renames_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create("jane_doe".to_string()).await?;

    assert_eq!(user.username, "jane_doe");

    let renamed = repo.update_username(user.id, "jane_roe".to_string()).await?;

    assert_eq!(renamed.id, user.id);
    assert_eq!(renamed.username, "jane_roe");

    Ok(())
}

/// Tests that the unique constraint on usernames holds at the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db).create(existing.username).await;

    assert!(result.is_err());

    Ok(())
}
