use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::place::{CreatePlaceDto, PlaceDto, PlaceRemovalDto, UpdatePlaceDto},
    server::{
        data::place::PlaceRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::place::{CreatePlaceParams, UpdatePlaceParams},
        state::AppState,
        util::{extract::ValidJson, parse::parse_id},
    },
};

/// Lists every registered place.
pub async fn list_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = PlaceRepository::new(&state.db).find_all().await?;

    Ok(Json(
        places
            .into_iter()
            .map(PlaceDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// Registers a place at the given coordinates.
///
/// Reuses the marker with exactly matching coordinate strings or creates a
/// new one, and seeds the place with its sentinel headcount.
///
/// # Returns
/// - `201 Created` - The created place
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn create_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let params = CreatePlaceParams::from_dto(payload)?;

    let place = PlaceRepository::new(&state.db)
        .create_with_coordinates(&params)
        .await?;

    Ok((StatusCode::CREATED, Json(PlaceDto::from_entity(place))))
}

/// Updates a place's name and detail address.
///
/// # Returns
/// - `200 OK` - The updated place
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No place with that id
/// - `415 Unsupported Media Type` - Malformed place id
pub async fn update_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UpdatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let id = parse_id(&id)?;
    let params = UpdatePlaceParams::from_dto(payload)?;

    let place = PlaceRepository::new(&state.db)
        .update(id, &params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Place {} not found", id)))?;

    Ok(Json(PlaceDto::from_entity(place)))
}

/// Deletes a place, its readings, and its marker when this was the marker's
/// last place.
///
/// # Returns
/// - `200 OK` - `{remainingPlaces}`: how many places still share the marker
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No place with that id
/// - `415 Unsupported Media Type` - Malformed place id
pub async fn delete_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let id = parse_id(&id)?;

    let remaining = PlaceRepository::new(&state.db)
        .delete_cascading(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Place {} not found", id)))?;

    Ok(Json(PlaceRemovalDto {
        remaining_places: remaining,
    }))
}
