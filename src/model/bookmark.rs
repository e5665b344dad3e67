use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub id: i32,
    pub user_id: i32,
    pub bookmark_name: String,
    pub icon_color: i32,
    pub bookmarked_place_id: Vec<i32>,
}

impl BookmarkDto {
    pub fn from_entity(bookmark: entity::bookmark::Model) -> Self {
        Self {
            id: bookmark.id,
            user_id: bookmark.user_id,
            bookmark_name: bookmark.bookmark_name,
            icon_color: bookmark.icon_color,
            bookmarked_place_id: bookmark.place_ids.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkDto {
    pub bookmark_name: Option<String>,
    pub icon_color: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkDto {
    pub bookmark_name: Option<String>,
    pub icon_color: Option<i32>,
}
