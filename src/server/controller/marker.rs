use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::marker::MarkerDto,
    server::{data::marker::MarkerRepository, error::AppError, state::AppState},
};

/// Lists every marker on the map.
///
/// Markers are created and removed through place registration, never
/// directly, so reading is the only operation here.
pub async fn list_markers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let markers = MarkerRepository::new(&state.db).find_all().await?;

    Ok(Json(
        markers
            .into_iter()
            .map(MarkerDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}
