//! Search-history factory for creating test search records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, now_string};

/// Factory for creating test search-history rows owned by a user.
pub struct SearchHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    search_keyword: String,
    latitude: String,
    longitude: String,
    created_time: String,
}

impl<'a> SearchHistoryFactory<'a> {
    /// Creates a new SearchHistoryFactory for the given owner.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            search_keyword: format!("keyword {}", id),
            latitude: format!("37.{:06}", id),
            longitude: format!("127.{:06}", id),
            created_time: now_string(),
        }
    }

    pub fn search_keyword(mut self, search_keyword: impl Into<String>) -> Self {
        self.search_keyword = search_keyword.into();
        self
    }

    pub fn coordinates(
        mut self,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.latitude = latitude.into();
        self.longitude = longitude.into();
        self
    }

    pub fn created_time(mut self, created_time: impl Into<String>) -> Self {
        self.created_time = created_time.into();
        self
    }

    /// Builds and inserts the search-history row.
    pub async fn build(self) -> Result<entity::search_history::Model, DbErr> {
        entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            search_keyword: ActiveValue::Set(self.search_keyword),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            created_time: ActiveValue::Set(self.created_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a search-history row for the user with default values.
pub async fn create_search_history(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::search_history::Model, DbErr> {
    SearchHistoryFactory::new(db, user_id).build().await
}
