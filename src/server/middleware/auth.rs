//! Request authentication guard.
//!
//! Handlers that require an authenticated caller construct an [`AuthGuard`]
//! and call [`AuthGuard::require`], which resolves the request's credential
//! to a stored user. The credential may arrive as an `Authorization: Bearer`
//! header or a `user` cookie; both carry the same token format.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
};

/// Name of the cookie carrying the token for browser clients.
pub const TOKEN_COOKIE: &str = "user";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthService, headers: &'a HeaderMap) -> Self {
        Self { db, auth, headers }
    }

    /// Resolves the request's credential to its user.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing, malformed, expired, or forged
    ///   credential, or a subject that no longer exists; all map to 401
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let token = extract_token(self.headers).ok_or(AuthError::MissingCredential)?;

        let claims = self.auth.verify_token(&token)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::MalformedSubject(claims.sub.clone()))?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::SubjectNotFound(user_id))?;

        Ok(user)
    }
}

/// Pulls the token out of the Authorization header, falling back to the
/// `user` cookie.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.trim().to_string());
        }
    }

    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|cookie| {
                    cookie
                        .strip_prefix(TOKEN_COOKIE)
                        .and_then(|rest| rest.strip_prefix('='))
                })
                .map(str::to_string)
        })
}
