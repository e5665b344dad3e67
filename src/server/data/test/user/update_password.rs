use super::*;

/// Tests replacing a stored password hash.
///
/// Expected: the new hash is what subsequent reads see
#[tokio::test]
async fn replaces_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("old-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash").await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");

    Ok(())
}
