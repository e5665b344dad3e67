use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password: "hunter2".to_string(),
        username: "Newcomer".to_string(),
    }
}

/// Tests creating an account with a fresh email.
///
/// Verifies the row is inserted with the default role and a zero point
/// balance, and that the supplied hash is what gets stored.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn creates_account_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(&params("fresh@example.com"), "stored-hash")
        .await?
        .unwrap();

    assert_eq!(user.email, "fresh@example.com");
    assert_eq!(user.username, "Newcomer");
    assert_eq!(user.password_hash, "stored-hash");
    assert_eq!(user.role, "member");
    assert_eq!(user.point, 0);
    assert!(!user.created_time.is_empty());

    Ok(())
}

/// Tests creating an account with an email that is already registered.
///
/// Expected: Ok(None), and no second row inserted
#[tokio::test]
async fn refuses_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(&params("taken@example.com"), "hash-one")
        .await?
        .unwrap();

    let second = repo.create(&params("taken@example.com"), "hash-two").await?;

    assert!(second.is_none());

    let survivor = repo.find_by_email("taken@example.com").await?.unwrap();
    assert_eq!(survivor.password_hash, "hash-one");

    Ok(())
}
