use super::*;

/// Tests appending a place to several bookmarks at once.
///
/// Expected: every targeted bookmark ends up referencing the place
#[tokio::test]
async fn appends_to_every_targeted_bookmark() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let place = factory::place::create_place(db).await?;
    let first = factory::bookmark::create_bookmark(db, user.id).await?;
    let second = factory::bookmark::create_bookmark(db, user.id).await?;

    BookmarkService::new(db)
        .add_place(user.id, place.id, &[first.id, second.id])
        .await
        .unwrap();

    assert_eq!(stored_place_ids(db, first.id, user.id).await?, vec![place.id]);
    assert_eq!(stored_place_ids(db, second.id, user.id).await?, vec![place.id]);

    Ok(())
}

/// Tests the all-or-nothing conflict check.
///
/// When any targeted bookmark already references the place, the whole
/// operation is refused and none of the other targets is modified.
///
/// Expected: Conflict, and the clean bookmark stays empty
#[tokio::test]
async fn conflict_on_one_target_leaves_all_unmodified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let place = factory::place::create_place(db).await?;
    let clean = factory::bookmark::create_bookmark(db, user.id).await?;
    let holding = factory::bookmark::BookmarkFactory::new(db, user.id)
        .place_ids(vec![place.id])
        .build()
        .await?;

    let err = BookmarkService::new(db)
        .add_place(user.id, place.id, &[clean.id, holding.id])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(stored_place_ids(db, clean.id, user.id).await?.is_empty());

    Ok(())
}

/// Tests targeting bookmarks that belong to someone else.
///
/// Ownership scoping means none of the targeted ids match, which reads the
/// same as targeting bookmarks that do not exist.
///
/// Expected: NotFound, and the foreign bookmark is untouched
#[tokio::test]
async fn refuses_bookmarks_of_another_user() -> Result<(), DbErr> {
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
    let place = factory::place::create_place(db).await?;
    let foreign = factory::bookmark::create_bookmark(db, owner.id).await?;

    let err = BookmarkService::new(db)
        .add_place(intruder.id, place.id, &[foreign.id])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(stored_place_ids(db, foreign.id, owner.id).await?.is_empty());

    Ok(())
}

/// Tests adding a reference to a place that does not exist.
///
/// Expected: NotFound before any bookmark is touched
#[tokio::test]
async fn refuses_missing_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_place_tables()
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let bookmark = factory::bookmark::create_bookmark(db, user.id).await?;

    let err = BookmarkService::new(db)
        .add_place(user.id, 9999, &[bookmark.id])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(stored_place_ids(db, bookmark.id, user.id).await?.is_empty());

    Ok(())
}
