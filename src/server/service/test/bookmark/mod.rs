use crate::server::{
    data::bookmark::BookmarkRepository,
    error::AppError,
    service::bookmark::BookmarkService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_place;
mod places_for_bookmark;

/// Reads a bookmark's stored place-id list straight from the repository.
async fn stored_place_ids(
    db: &sea_orm::DatabaseConnection,
    bookmark_id: i32,
    user_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let bookmark = BookmarkRepository::new(db)
        .find_by_id_for_user(bookmark_id, user_id)
        .await?;

    Ok(bookmark.map(|b| b.place_ids.0).unwrap_or_default())
}
