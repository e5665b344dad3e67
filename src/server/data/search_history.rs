//! Search-history data repository.
//!
//! Histories de-duplicate on (keyword, latitude, longitude) per user:
//! recording a search a second time replaces the earlier row so its
//! timestamp moves forward. Entries expire at year boundaries via read-time
//! pruning.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{model::search_history::CreateSearchHistoryParams, util::time::format_now};

/// Repository providing database operations for search histories.
pub struct SearchHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's search histories, most recent first.
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::search_history::Model>, DbErr> {
        entity::prelude::SearchHistory::find()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::search_history::Column::CreatedTime)
            .all(self.db)
            .await
    }

    /// Records a search, replacing any earlier identical one.
    ///
    /// Delete-then-insert runs in one transaction so the user never ends up
    /// with two rows for the same search.
    pub async fn create_replacing(
        &self,
        user_id: i32,
        params: &CreateSearchHistoryParams,
    ) -> Result<entity::search_history::Model, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .filter(entity::search_history::Column::SearchKeyword.eq(&params.search_keyword))
            .filter(entity::search_history::Column::Latitude.eq(&params.latitude))
            .filter(entity::search_history::Column::Longitude.eq(&params.longitude))
            .exec(&txn)
            .await?;

        let history = entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            search_keyword: ActiveValue::Set(params.search_keyword.clone()),
            latitude: ActiveValue::Set(params.latitude.clone()),
            longitude: ActiveValue::Set(params.longitude.clone()),
            created_time: ActiveValue::Set(format_now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(history)
    }

    /// Deletes one of a user's search histories.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - The row is absent or owned by someone else
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::Id.eq(id))
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user's histories recorded before the cutoff.
    ///
    /// `cutoff` is a `created_time`-formatted string; the zero-padded format
    /// makes lexicographic comparison chronological.
    pub async fn prune_before(&self, user_id: i32, cutoff: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .filter(entity::search_history::Column::CreatedTime.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
