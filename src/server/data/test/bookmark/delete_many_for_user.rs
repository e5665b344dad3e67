use super::*;

/// Tests bulk deletion scoped to the owner.
///
/// Another user's bookmark named in the list must survive.
///
/// Expected: Ok(2); only the owner's rows removed
#[tokio::test]
async fn deletes_only_owned_bookmarks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::bookmark::create_bookmark(db, owner.id).await?;
    let second = factory::bookmark::create_bookmark(db, owner.id).await?;
    let theirs = factory::bookmark::create_bookmark(db, other.id).await?;

    let repo = BookmarkRepository::new(db);
    let deleted = repo
        .delete_many_for_user(&[first.id, second.id, theirs.id], owner.id)
        .await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_user(owner.id).await?.is_empty());
    assert_eq!(repo.find_by_user(other.id).await?.len(), 1);

    Ok(())
}

/// Tests a list that matches nothing of the user's.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bookmark)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let deleted = BookmarkRepository::new(db)
        .delete_many_for_user(&[998, 999], user.id)
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
