use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        bookmark::{BookmarkDto, CreateBookmarkDto, UpdateBookmarkDto},
    },
    server::{
        data::bookmark::BookmarkRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::bookmark::{CreateBookmarkParams, UpdateBookmarkParams},
        service::bookmark::BookmarkService,
        state::AppState,
        util::{
            extract::ValidJson,
            parse::{parse_id, parse_ids},
        },
    },
};

/// Lists the authenticated user's bookmarks.
///
/// # Returns
/// - `200 OK` - The bookmarks
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The user has no bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let bookmarks = BookmarkRepository::new(&state.db)
        .find_by_user(user.id)
        .await?;

    if bookmarks.is_empty() {
        return Err(AppError::NotFound("No bookmarks".to_string()));
    }

    Ok(Json(
        bookmarks
            .into_iter()
            .map(BookmarkDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// Creates an empty bookmark list.
///
/// # Returns
/// - `201 Created` - The created bookmark
/// - `400 Bad Request` - Missing name, or icon color that is not a number
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn create_bookmark(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateBookmarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let params = CreateBookmarkParams::from_dto(payload)?;

    let bookmark = BookmarkRepository::new(&state.db)
        .create(user.id, &params)
        .await?;

    Ok((StatusCode::CREATED, Json(BookmarkDto::from_entity(bookmark))))
}

/// Renames or recolors one of the user's bookmarks.
///
/// # Returns
/// - `200 OK` - Updated
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The bookmark is absent or owned by someone else
/// - `415 Unsupported Media Type` - Malformed bookmark id
pub async fn update_bookmark(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UpdateBookmarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let id = parse_id(&id)?;
    let params = UpdateBookmarkParams::from_dto(payload)?;

    let updated = BookmarkRepository::new(&state.db)
        .update_meta(id, user.id, &params)
        .await?;

    if !updated {
        return Err(AppError::NotFound(format!("Bookmark {} not found", id)));
    }

    Ok(Json(MessageDto::ok()))
}

/// Bulk-deletes the user's bookmarks named in the request body.
///
/// # Returns
/// - `200 OK` - At least one bookmark was deleted
/// - `400 Bad Request` - Empty id list
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - None of the ids matched the user's bookmarks
/// - `415 Unsupported Media Type` - A malformed bookmark id
pub async fn delete_bookmarks(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let ids = parse_ids(&payload)?;

    let deleted = BookmarkRepository::new(&state.db)
        .delete_many_for_user(&ids, user.id)
        .await?;

    if deleted == 0 {
        return Err(AppError::NotFound("No matching bookmarks".to_string()));
    }

    Ok(Json(MessageDto::ok()))
}

/// Returns the latest annotated reading for each place in a bookmark,
/// pruning place ids whose place no longer exists.
///
/// # Returns
/// - `200 OK` - Annotated rows for the surviving places
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The bookmark is absent or owned by someone else
/// - `415 Unsupported Media Type` - Malformed bookmark id
pub async fn bookmark_places(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let id = parse_id(&id)?;

    let rows = BookmarkService::new(&state.db)
        .places_for_bookmark(user.id, id)
        .await?;

    Ok(Json(
        rows.into_iter().map(|row| row.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Lists the user's bookmarks that reference a place.
///
/// # Returns
/// - `200 OK` - The bookmarks containing the place
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - None of the user's bookmarks reference the place
/// - `415 Unsupported Media Type` - Malformed place id
pub async fn bookmarks_with_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(place_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let place_id = parse_id(&place_id)?;

    let bookmarks = BookmarkService::new(&state.db)
        .bookmarks_containing_place(user.id, place_id)
        .await?;

    Ok(Json(
        bookmarks
            .into_iter()
            .map(BookmarkDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// Adds a place reference to each bookmark named in the request body.
///
/// # Returns
/// - `200 OK` - Appended to every targeted bookmark
/// - `400 Bad Request` - Empty bookmark id list
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - The place is absent, or no targeted bookmark exists
/// - `409 Conflict` - A targeted bookmark already references the place
/// - `415 Unsupported Media Type` - A malformed id
pub async fn add_place_to_bookmarks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(place_id): Path<String>,
    ValidJson(payload): ValidJson<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let place_id = parse_id(&place_id)?;
    let bookmark_ids = parse_ids(&payload)?;

    BookmarkService::new(&state.db)
        .add_place(user.id, place_id, &bookmark_ids)
        .await?;

    Ok(Json(MessageDto::ok()))
}

/// Removes a place reference from each bookmark named in the request body.
///
/// # Returns
/// - `200 OK` - The reference is gone from every targeted bookmark
/// - `400 Bad Request` - Empty bookmark id list
/// - `401 Unauthorized` - Missing or invalid credential
/// - `415 Unsupported Media Type` - A malformed id
pub async fn remove_place_from_bookmarks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(place_id): Path<String>,
    ValidJson(payload): ValidJson<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let place_id = parse_id(&place_id)?;
    let bookmark_ids = parse_ids(&payload)?;

    BookmarkService::new(&state.db)
        .remove_place(user.id, place_id, &bookmark_ids)
        .await?;

    Ok(Json(MessageDto::ok()))
}
