use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use rand::Rng;

use crate::{
    model::{
        api::MessageDto,
        user::{AdjustPointDto, TemporaryPasswordDto, UpdatePasswordDto, UpdateProfileDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        state::AppState,
        util::{extract::ValidJson, validate::require_field},
    },
};

const TEMPORARY_PASSWORD_LEN: usize = 12;

/// Returns the authenticated user's profile.
///
/// # Returns
/// - `200 OK` - The profile, without the password hash
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    Ok(Json(UserDto::from_entity(user)))
}

/// Updates the authenticated user's email and username.
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Missing field or malformed email
/// - `401 Unauthorized` - Missing or invalid credential
/// - `409 Conflict` - The new email belongs to another user
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let params = UpdateProfileParams::from_dto(payload)?;

    let updated = UserRepository::new(&state.db)
        .update_profile(user.id, &params)
        .await?;

    if !updated {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    Ok(Json(MessageDto::ok()))
}

/// Replaces the authenticated user's password.
///
/// # Returns
/// - `200 OK` - Password updated
/// - `400 Bad Request` - Missing password field
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let password = require_field(payload.password, "password")?;

    UserRepository::new(&state.db)
        .update_password(user.id, &state.auth.hash_password(&password))
        .await?;

    Ok(Json(MessageDto::ok()))
}

/// Applies a signed delta to the authenticated user's point balance.
///
/// Zero is a valid delta; only the field's presence and type are validated.
///
/// # Returns
/// - `200 OK` - Balance adjusted
/// - `400 Bad Request` - Missing or non-numeric point field
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn adjust_point(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<AdjustPointDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let delta = require_field(payload.point, "point")?;

    UserRepository::new(&state.db)
        .adjust_point(user.id, delta)
        .await?;

    Ok(Json(MessageDto::ok()))
}

/// Issues a temporary password for an account that lost its credentials.
///
/// Stores the new password's hash and mails the plaintext to the account's
/// address through the mail collaborator. Mail failure fails the request;
/// the password has already been rotated at that point, so the client is
/// told to retry.
///
/// # Returns
/// - `201 Created` - Temporary password stored and mailed
/// - `400 Bad Request` - Missing email field
/// - `404 Not Found` - No account with that email
pub async fn temporary_password(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<TemporaryPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_field(payload.email, "email")?;

    let repo = UserRepository::new(&state.db);
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("No account with that email".to_string()))?;

    let password = generate_password();
    repo.update_password(user.id, &state.auth.hash_password(&password))
        .await?;

    state
        .mailer
        .send_temporary_password(&user.email, &password)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::ok())))
}

/// Random alphanumeric password for the reset flow.
fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();
    (0..TEMPORARY_PASSWORD_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
