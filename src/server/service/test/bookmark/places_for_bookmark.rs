use super::*;

/// Tests the read-time self-heal of a bookmark's place list.
///
/// Ids of places that no longer exist are dropped, and the surviving ids
/// keep their stored order rather than being reordered by the lookup.
///
/// Expected: `[newer, stale, older]` heals to `[newer, older]`
#[tokio::test]
async fn prunes_stale_ids_preserving_stored_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = factory::place::create_place(db).await?;
    let newer = factory::place::create_place(db).await?;
    factory::headcount::create_headcount(db, older.id).await?;
    factory::headcount::create_headcount(db, newer.id).await?;

    // Saved with the higher id first; 9999 was deleted some time ago.
    let bookmark = factory::bookmark::BookmarkFactory::new(db, user.id)
        .place_ids(vec![newer.id, 9999, older.id])
        .build()
        .await?;

    let rows = BookmarkService::new(db)
        .places_for_bookmark(user.id, bookmark.id)
        .await
        .unwrap();

    assert_eq!(
        stored_place_ids(db, bookmark.id, user.id).await?,
        vec![newer.id, older.id]
    );
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests that a fully live list is not rewritten.
///
/// Expected: the stored list is byte-for-byte what the user saved
#[tokio::test]
async fn leaves_live_list_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::place::create_place(db).await?;
    let second = factory::place::create_place(db).await?;

    let bookmark = factory::bookmark::BookmarkFactory::new(db, user.id)
        .place_ids(vec![second.id, first.id])
        .build()
        .await?;

    BookmarkService::new(db)
        .places_for_bookmark(user.id, bookmark.id)
        .await
        .unwrap();

    assert_eq!(
        stored_place_ids(db, bookmark.id, user.id).await?,
        vec![second.id, first.id]
    );

    Ok(())
}

/// Tests reading places through a bookmark the caller does not own.
///
/// Expected: NotFound
#[tokio::test]
async fn refuses_bookmark_of_another_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let intruder = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let bookmark = factory::bookmark::create_bookmark(db, owner.id).await?;

    let err = BookmarkService::new(db)
        .places_for_bookmark(intruder.id, bookmark.id)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
