//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a pooled handle, the token and mailer services
//! hold reference-counted or small owned data.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{auth::AuthService, mailer::MailerService},
};

/// Shared resources and dependencies for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens and hashes passwords.
    pub auth: AuthService,

    /// Sends outbound mail through the configured mail-API collaborator.
    pub mailer: MailerService,
}

impl AppState {
    /// Creates the application state from startup dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the mail collaborator
    /// - `config` - Application configuration
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            auth: AuthService::from_config(config),
            mailer: MailerService::from_config(http_client, config),
        }
    }
}
