//! Bookmark data repository.
//!
//! Every query is scoped to an owner; there is no way to read or write
//! another user's bookmarks through this repository. The `place_ids` column
//! is a JSON array, so membership filtering happens in Rust after fetching
//! the owner's rows.

use entity::bookmark::PlaceIdList;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::bookmark::{CreateBookmarkParams, UpdateBookmarkParams};

/// Repository providing database operations for bookmarks.
pub struct BookmarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's bookmarks.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<entity::bookmark::Model>, DbErr> {
        entity::prelude::Bookmark::find()
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Finds one of a user's bookmarks by id.
    pub async fn find_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::bookmark::Model>, DbErr> {
        entity::prelude::Bookmark::find_by_id(id)
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Finds the subset of the given bookmark ids that belong to the user.
    pub async fn find_by_ids_for_user(
        &self,
        ids: &[i32],
        user_id: i32,
    ) -> Result<Vec<entity::bookmark::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Bookmark::find()
            .filter(entity::bookmark::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Lists a user's bookmarks that reference a place.
    pub async fn find_by_user_and_place(
        &self,
        user_id: i32,
        place_id: i32,
    ) -> Result<Vec<entity::bookmark::Model>, DbErr> {
        let bookmarks = self.find_by_user(user_id).await?;

        Ok(bookmarks
            .into_iter()
            .filter(|bookmark| bookmark.place_ids.contains(place_id))
            .collect())
    }

    /// Creates an empty bookmark for a user.
    pub async fn create(
        &self,
        user_id: i32,
        params: &CreateBookmarkParams,
    ) -> Result<entity::bookmark::Model, DbErr> {
        entity::bookmark::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            bookmark_name: ActiveValue::Set(params.bookmark_name.clone()),
            icon_color: ActiveValue::Set(params.icon_color),
            place_ids: ActiveValue::Set(PlaceIdList(Vec::new())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Renames/recolors one of a user's bookmarks.
    ///
    /// # Returns
    /// - `Ok(true)` - Updated
    /// - `Ok(false)` - The bookmark is absent or owned by someone else
    /// - `Err(DbErr)` - Database error
    pub async fn update_meta(
        &self,
        id: i32,
        user_id: i32,
        params: &UpdateBookmarkParams,
    ) -> Result<bool, DbErr> {
        let Some(bookmark) = self.find_by_id_for_user(id, user_id).await? else {
            return Ok(false);
        };

        let mut active: entity::bookmark::ActiveModel = bookmark.into();
        active.bookmark_name = ActiveValue::Set(params.bookmark_name.clone());
        active.icon_color = ActiveValue::Set(params.icon_color);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes the user's bookmarks among the given ids.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookmarks actually deleted
    pub async fn delete_many_for_user(&self, ids: &[i32], user_id: i32) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Bookmark::delete_many()
            .filter(entity::bookmark::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Appends a place reference to a bookmark's place list.
    pub async fn push_place(
        &self,
        bookmark: entity::bookmark::Model,
        place_id: i32,
    ) -> Result<entity::bookmark::Model, DbErr> {
        let mut place_ids = bookmark.place_ids.0.clone();
        place_ids.push(place_id);

        let mut active: entity::bookmark::ActiveModel = bookmark.into();
        active.place_ids = ActiveValue::Set(PlaceIdList(place_ids));
        active.update(self.db).await
    }

    /// Removes every occurrence of a place reference from a bookmark.
    pub async fn pull_place(
        &self,
        bookmark: entity::bookmark::Model,
        place_id: i32,
    ) -> Result<entity::bookmark::Model, DbErr> {
        let place_ids: Vec<i32> = bookmark
            .place_ids
            .0
            .iter()
            .copied()
            .filter(|id| *id != place_id)
            .collect();

        let mut active: entity::bookmark::ActiveModel = bookmark.into();
        active.place_ids = ActiveValue::Set(PlaceIdList(place_ids));
        active.update(self.db).await
    }

    /// Replaces a bookmark's place list outright. Used by the read-time
    /// self-heal after stale ids are pruned.
    pub async fn set_place_ids(&self, id: i32, place_ids: Vec<i32>) -> Result<(), DbErr> {
        let Some(bookmark) = entity::prelude::Bookmark::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let mut active: entity::bookmark::ActiveModel = bookmark.into();
        active.place_ids = ActiveValue::Set(PlaceIdList(place_ids));
        active.update(self.db).await?;

        Ok(())
    }
}
