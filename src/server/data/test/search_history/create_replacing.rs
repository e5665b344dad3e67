use super::*;

/// Tests recording a fresh search.
///
/// Expected: one row with the given triple
#[tokio::test]
async fn records_new_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SearchHistoryRepository::new(db);
    let history = repo.create_replacing(user.id, &params("coffee")).await?;

    assert_eq!(history.user_id, user.id);
    assert_eq!(history.search_keyword, "coffee");
    assert_eq!(repo.find_by_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests repeating an identical search.
///
/// The earlier row is replaced, not duplicated; the replacement is a new
/// row.
///
/// Expected: one row whose id differs from the first
#[tokio::test]
async fn replaces_identical_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SearchHistoryRepository::new(db);
    let first = repo.create_replacing(user.id, &params("coffee")).await?;
    let second = repo.create_replacing(user.id, &params("coffee")).await?;

    assert_ne!(first.id, second.id);

    let remaining = repo.find_by_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    Ok(())
}

/// Tests that a different keyword or different coordinates is a different
/// search.
///
/// Expected: three rows
#[tokio::test]
async fn keeps_searches_with_different_triple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SearchHistoryRepository::new(db);
    repo.create_replacing(user.id, &params("coffee")).await?;
    repo.create_replacing(user.id, &params("tea")).await?;

    let mut moved = params("coffee");
    moved.latitude = "35.1796".to_string();
    repo.create_replacing(user.id, &moved).await?;

    assert_eq!(repo.find_by_user(user.id).await?.len(), 3);

    Ok(())
}

/// Tests that an identical search by another user is untouched.
///
/// Expected: both users keep their row
#[tokio::test]
async fn scopes_replacement_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = SearchHistoryRepository::new(db);
    repo.create_replacing(first.id, &params("coffee")).await?;
    repo.create_replacing(second.id, &params("coffee")).await?;

    assert_eq!(repo.find_by_user(first.id).await?.len(), 1);
    assert_eq!(repo.find_by_user(second.id).await?.len(), 1);

    Ok(())
}
