use super::*;

/// Tests deleting one's own history row.
///
/// Expected: Ok(true), and the row is gone
#[tokio::test]
async fn deletes_own_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let history = factory::search_history::create_search_history(db, user.id).await?;

    let repo = SearchHistoryRepository::new(db);
    let deleted = repo.delete_owned(history.id, user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a row owned by someone else.
///
/// Expected: Ok(false), and the owner keeps the row
#[tokio::test]
async fn refuses_row_of_another_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SearchHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let history = factory::search_history::create_search_history(db, owner.id).await?;

    let repo = SearchHistoryRepository::new(db);
    let deleted = repo.delete_owned(history.id, intruder.id).await?;

    assert!(!deleted);
    assert_eq!(repo.find_by_user(owner.id).await?.len(), 1);

    Ok(())
}
