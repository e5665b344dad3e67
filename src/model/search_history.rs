use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryDto {
    pub id: i32,
    pub user_id: i32,
    pub search_keyword: String,
    pub latitude: String,
    pub longitude: String,
    pub created_time: String,
}

impl SearchHistoryDto {
    pub fn from_entity(history: entity::search_history::Model) -> Self {
        Self {
            id: history.id,
            user_id: history.user_id,
            search_keyword: history.search_keyword,
            latitude: history.latitude,
            longitude: history.longitude,
            created_time: history.created_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSearchHistoryDto {
    pub search_keyword: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}
