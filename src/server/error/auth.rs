use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication failures.
///
/// Every variant maps to 401 Unauthorized. The caller cannot distinguish a
/// missing credential from an expired or forged one; the variants exist for
/// server-side logging only.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the Authorization header or `user` cookie.
    #[error("Request carried no credential")]
    MissingCredential,

    /// Signature, expiry, issuer, or audience verification failed.
    #[error("Credential verification failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The verified subject claim is not a well-formed user id.
    #[error("Credential subject '{0}' is not a valid user id")]
    MalformedSubject(String),

    /// The verified subject no longer exists in storage.
    #[error("Credential subject {0} not found")]
    SubjectNotFound(i32),

    /// Login attempt with an unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Failure details are logged at debug level; the client-facing message
/// stays generic so credential probing learns nothing.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failure: {}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid credentials",
            _ => "Unauthorized",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
