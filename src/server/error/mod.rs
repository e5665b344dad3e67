//! Error types and HTTP response handling.
//!
//! Provides the application's error hierarchy and the conversion logic that
//! turns errors into HTTP responses. `AppError` is the top-level type that
//! wraps domain-specific errors and implements `IntoResponse`, so handlers
//! can return `Result<_, AppError>` and get the correct status code and
//! `{error}` JSON body for free.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` handles
/// its own response mapping (always 401); the generic variants carry the
/// message returned to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Never reaches a request handler.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error; maps to 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM; maps to 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Outbound HTTP (mail collaborator) error; maps to 500.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket/bind error during startup; maps to 500 if it ever surfaces.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Token issuance failure; maps to 500. Verification failures are
    /// `AuthError` instead.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Missing or mistyped request input; maps to 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced record absent; maps to 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique field or duplicate relationship; maps to 409.
    #[error("{0}")]
    Conflict(String),

    /// Identifier failed format validation before any lookup; maps to 415.
    #[error("{0}")]
    UnsupportedId(String),

    /// Internal server error with a custom message. The message is logged
    /// and a generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 415 Unsupported Media Type - For `UnsupportedId`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::UnsupportedId(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
