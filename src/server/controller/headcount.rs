use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::headcount::{CreateHeadcountDto, HeadcountDto},
    server::{
        data::{headcount::HeadcountRepository, marker::MarkerRepository, place::PlaceRepository},
        error::AppError,
        middleware::auth::AuthGuard,
        service::headcount::HeadcountService,
        state::AppState,
        util::{extract::ValidJson, parse::parse_id, validate::require_field},
    },
};

/// Lists every raw headcount reading.
pub async fn list_headcounts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let readings = HeadcountRepository::new(&state.db).find_all().await?;

    Ok(Json(
        readings
            .into_iter()
            .map(HeadcountDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// Map overview: the most recently updated place per marker, with its
/// current reading, staleness, place, and marker, most recent first.
pub async fn overview(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = HeadcountService::new(&state.db).overview().await?;

    Ok(Json(
        rows.into_iter().map(|row| row.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Latest annotated reading for one place.
///
/// # Returns
/// - `200 OK` - The place's current reading with `updateElapsedTime`
/// - `404 Not Found` - The place has no readings
/// - `415 Unsupported Media Type` - Malformed place id
pub async fn latest_for_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let place_id = parse_id(&id)?;

    let annotated = HeadcountService::new(&state.db)
        .latest_for_place(place_id)
        .await?;

    Ok(Json(annotated.into_dto()))
}

/// Latest annotated reading for every place at a marker.
///
/// # Returns
/// - `200 OK` - One annotated row per place at the marker
/// - `404 Not Found` - No marker with that id
/// - `415 Unsupported Media Type` - Malformed marker id
pub async fn latest_for_marker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let marker_id = parse_id(&id)?;

    MarkerRepository::new(&state.db)
        .find_by_id(marker_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Marker {} not found", marker_id)))?;

    let rows = HeadcountService::new(&state.db)
        .latest_for_marker(marker_id)
        .await?;

    Ok(Json(
        rows.into_iter().map(|row| row.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Reports a crowd-level reading for a place.
///
/// Reported values must be zero or greater; the negative sentinel is
/// reserved for system-created rows.
///
/// # Returns
/// - `201 Created` - The stored reading
/// - `400 Bad Request` - Missing, non-numeric, or negative headcount
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No place with that id
/// - `415 Unsupported Media Type` - Malformed place id
pub async fn report_headcount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<CreateHeadcountDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let place_id = parse_id(&id)?;

    let headcount = require_field(payload.headcount, "headcount")?;
    if headcount < 0 {
        return Err(AppError::BadRequest(
            "headcount must be zero or greater".to_string(),
        ));
    }

    PlaceRepository::new(&state.db)
        .find_by_id(place_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Place {} not found", place_id)))?;

    let reading = HeadcountRepository::new(&state.db)
        .create(place_id, headcount)
        .await?;

    Ok((StatusCode::CREATED, Json(HeadcountDto::from_entity(reading))))
}
