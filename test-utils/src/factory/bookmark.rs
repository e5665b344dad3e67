//! Bookmark factory for creating test bookmarks.

use entity::bookmark::PlaceIdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test bookmarks owned by a user.
pub struct BookmarkFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    bookmark_name: String,
    icon_color: i32,
    place_ids: Vec<i32>,
}

impl<'a> BookmarkFactory<'a> {
    /// Creates a new BookmarkFactory for the given owner.
    ///
    /// Defaults: `"Bookmark {n}"` name, icon color 1, no place references.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            bookmark_name: format!("Bookmark {}", id),
            icon_color: 1,
            place_ids: Vec::new(),
        }
    }

    pub fn bookmark_name(mut self, bookmark_name: impl Into<String>) -> Self {
        self.bookmark_name = bookmark_name.into();
        self
    }

    pub fn place_ids(mut self, place_ids: Vec<i32>) -> Self {
        self.place_ids = place_ids;
        self
    }

    /// Builds and inserts the bookmark row.
    pub async fn build(self) -> Result<entity::bookmark::Model, DbErr> {
        entity::bookmark::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            bookmark_name: ActiveValue::Set(self.bookmark_name),
            icon_color: ActiveValue::Set(self.icon_color),
            place_ids: ActiveValue::Set(PlaceIdList(self.place_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty bookmark for the user with default values.
pub async fn create_bookmark(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::bookmark::Model, DbErr> {
    BookmarkFactory::new(db, user_id).build().await
}
