use crate::server::{
    data::search_history::SearchHistoryRepository,
    model::search_history::CreateSearchHistoryParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_replacing;
mod delete_owned;

fn params(keyword: &str) -> CreateSearchHistoryParams {
    CreateSearchHistoryParams {
        search_keyword: keyword.to_string(),
        latitude: "37.5665".to_string(),
        longitude: "126.9780".to_string(),
    }
}
