use super::*;
use sea_orm::EntityTrait;

fn withdraw() -> WithdrawParams {
    WithdrawParams {
        withdrawal_reason: "Moving away".to_string(),
        feedback: "Worked well".to_string(),
    }
}

/// Tests the account-deletion cascade.
///
/// Verifies the user, their bookmarks, and their search histories are gone,
/// a withdrawal reason row was recorded, and another user's data survived.
///
/// Expected: only the departing user's rows removed
#[tokio::test]
async fn cascades_owned_data_and_records_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaver = factory::user::create_user(db).await?;
    factory::bookmark::create_bookmark(db, leaver.id).await?;
    factory::search_history::create_search_history(db, leaver.id).await?;

    let stayer = factory::user::create_user(db).await?;
    let kept_bookmark = factory::bookmark::create_bookmark(db, stayer.id).await?;

    let repo = UserRepository::new(db);
    repo.delete_account(leaver.id, &withdraw()).await?;

    assert!(repo.find_by_id(leaver.id).await?.is_none());

    let leaver_bookmarks = entity::prelude::Bookmark::find().all(db).await?;
    assert_eq!(leaver_bookmarks.len(), 1);
    assert_eq!(leaver_bookmarks[0].id, kept_bookmark.id);

    let histories = entity::prelude::SearchHistory::find().all(db).await?;
    assert!(histories.is_empty());

    let reasons = entity::prelude::WithdrawalReason::find().all(db).await?;
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0].withdrawal_reason, "Moving away");
    assert_eq!(reasons[0].feedback, "Worked well");

    Ok(())
}

/// Tests that community data is not part of the cascade.
///
/// Places and headcount readings have no owner and must survive any
/// account deletion.
///
/// Expected: place and reading still present
#[tokio::test]
async fn leaves_places_and_readings_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let place = factory::place::create_place(db).await?;
    factory::headcount::create_headcount(db, place.id).await?;

    UserRepository::new(db)
        .delete_account(user.id, &withdraw())
        .await?;

    assert!(entity::prelude::Place::find_by_id(place.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::Headcount::find().all(db).await?.len(), 1);

    Ok(())
}
