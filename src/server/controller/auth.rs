use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        user::{EmailAvailabilityQuery, LoginDto, SignUpDto, TokenDto, UserDto, WithdrawDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, TOKEN_COOKIE},
        model::user::{CreateUserParams, Credentials, WithdrawParams},
        state::AppState,
        util::{extract::ValidJson, validate::require_valid_email},
    },
};

/// Checks whether an email address is still available for registration.
///
/// # Returns
/// - `200 OK` - The address is free
/// - `400 Bad Request` - Missing or malformed email parameter
/// - `409 Conflict` - The address is already registered
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<EmailAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = query
        .email
        .ok_or_else(|| AppError::BadRequest("missing required parameter 'email'".to_string()))?;
    require_valid_email(&email)?;

    if UserRepository::new(&state.db).email_taken(&email).await? {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    Ok(Json(MessageDto::ok()))
}

/// Authenticates a user and issues a bearer token.
///
/// The token is returned in the body and mirrored in a `user` cookie for
/// browser clients.
///
/// # Returns
/// - `200 OK` - `{accessToken}` plus a Set-Cookie header
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = Credentials::from_dto(payload)?;

    let user = UserRepository::new(&state.db)
        .find_by_email(&credentials.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if state.auth.hash_password(&credentials.password) != user.password_hash {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.auth.issue_token(user.id)?;
    let cookie = format!("{}={}; Path=/; HttpOnly", TOKEN_COOKIE, token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(TokenDto {
            access_token: token,
        }),
    ))
}

/// Registers a new account.
///
/// # Returns
/// - `201 Created` - The created user, without its password hash
/// - `400 Bad Request` - Missing field or malformed email
/// - `409 Conflict` - The email is already registered
pub async fn sign_up(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;
    let password_hash = state.auth.hash_password(&params.password);

    let user = UserRepository::new(&state.db)
        .create(&params, &password_hash)
        .await?
        .ok_or_else(|| AppError::Conflict("Email is already registered".to_string()))?;

    Ok((StatusCode::CREATED, Json(UserDto::from_entity(user))))
}

/// Deletes the authenticated user's account.
///
/// Removes the account and everything it owns, and records the withdrawal
/// reason. Already-issued tokens are not revoked; they expire on their own.
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `400 Bad Request` - Missing withdrawal reason
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<WithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let params = WithdrawParams::from_dto(payload)?;

    UserRepository::new(&state.db)
        .delete_account(user.id, &params)
        .await?;

    tracing::info!(user_id = user.id, "Account deleted");

    Ok(Json(MessageDto::ok()))
}
