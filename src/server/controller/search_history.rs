use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::MessageDto,
        search_history::{CreateSearchHistoryDto, SearchHistoryDto},
    },
    server::{
        data::search_history::SearchHistoryRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::search_history::CreateSearchHistoryParams,
        state::AppState,
        util::{extract::ValidJson, parse::parse_id, time::year_start},
    },
};

/// Lists the authenticated user's search histories, most recent first.
///
/// Entries recorded before January 1 of the current year are deleted before
/// the read; histories do not survive a year boundary.
///
/// # Returns
/// - `200 OK` - The remaining histories
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The user has no histories left
pub async fn list_search_histories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let repo = SearchHistoryRepository::new(&state.db);
    repo.prune_before(user.id, &year_start(Utc::now().naive_utc()))
        .await?;

    let histories = repo.find_by_user(user.id).await?;

    if histories.is_empty() {
        return Err(AppError::NotFound("No search histories".to_string()));
    }

    Ok(Json(
        histories
            .into_iter()
            .map(SearchHistoryDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// Records a search, replacing any earlier identical one.
///
/// # Returns
/// - `201 Created` - The stored history
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn create_search_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateSearchHistoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let params = CreateSearchHistoryParams::from_dto(payload)?;

    let history = SearchHistoryRepository::new(&state.db)
        .create_replacing(user.id, &params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SearchHistoryDto::from_entity(history)),
    ))
}

/// Deletes one of the user's search histories.
///
/// # Returns
/// - `200 OK` - Deleted
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The row is absent or owned by someone else
/// - `415 Unsupported Media Type` - Malformed id
pub async fn delete_search_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let id = parse_id(&id)?;

    let deleted = SearchHistoryRepository::new(&state.db)
        .delete_owned(id, user.id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "Search history {} not found",
            id
        )));
    }

    Ok(Json(MessageDto::ok()))
}
