use super::*;

/// Tests renaming and recoloring an owned bookmark.
///
/// Expected: Ok(true); the place list is untouched
#[tokio::test]
async fn updates_name_and_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let bookmark = factory::bookmark::BookmarkFactory::new(db, user.id)
        .place_ids(vec![7, 8])
        .build()
        .await?;

    let repo = BookmarkRepository::new(db);
    let updated = repo
        .update_meta(
            bookmark.id,
            user.id,
            &UpdateBookmarkParams {
                bookmark_name: "Weekend plans".to_string(),
                icon_color: 5,
            },
        )
        .await?;

    assert!(updated);

    let reloaded = repo
        .find_by_id_for_user(bookmark.id, user.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.bookmark_name, "Weekend plans");
    assert_eq!(reloaded.icon_color, 5);
    assert_eq!(reloaded.place_ids.0, vec![7, 8]);

    Ok(())
}

/// Tests updating someone else's bookmark.
///
/// Expected: Ok(false); the bookmark is untouched
#[tokio::test]
async fn refuses_bookmark_of_another_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let bookmark = factory::bookmark::create_bookmark(db, owner.id).await?;

    let repo = BookmarkRepository::new(db);
    let updated = repo
        .update_meta(
            bookmark.id,
            intruder.id,
            &UpdateBookmarkParams {
                bookmark_name: "Hijacked".to_string(),
                icon_color: 9,
            },
        )
        .await?;

    assert!(!updated);

    let reloaded = repo
        .find_by_id_for_user(bookmark.id, owner.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.bookmark_name, bookmark.bookmark_name);

    Ok(())
}
