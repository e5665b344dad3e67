use super::*;

/// Tests that deltas accumulate on the stored balance.
///
/// Expected: balance reflects the running sum, including negative deltas
#[tokio::test]
async fn accumulates_signed_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).point(10).build().await?;

    let repo = UserRepository::new(db);
    repo.adjust_point(user.id, 5).await?;
    repo.adjust_point(user.id, -3).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.point, 12);

    Ok(())
}

/// Tests a zero delta.
///
/// Zero is accepted; only the field's type is validated upstream.
///
/// Expected: balance unchanged
#[tokio::test]
async fn zero_delta_leaves_balance_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).point(7).build().await?;

    let repo = UserRepository::new(db);
    repo.adjust_point(user.id, 0).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.point, 7);

    Ok(())
}
