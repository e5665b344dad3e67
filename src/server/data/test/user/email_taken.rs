use super::*;

/// Tests availability reporting for registered and free emails.
///
/// Expected: true for an existing address, false otherwise
#[tokio::test]
async fn reports_registered_email_as_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("here@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("here@example.com").await?);
    assert!(!repo.email_taken("gone@example.com").await?);

    Ok(())
}
