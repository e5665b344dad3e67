use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5050";

/// Application configuration, constructed once at process start and passed
/// into the components that need it.
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,

    pub token_secret: String,
    pub token_issuer: String,
    pub token_audience: String,
    /// Lifetime of issued bearer tokens, in seconds.
    pub token_ttl_secs: i64,

    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_sender: String,
    pub mail_subject: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - A variable is missing or unparseable
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            database_url: require("DATABASE_URL")?,
            token_secret: require("JWT_TOKEN_SECRET")?,
            token_issuer: require("JWT_ISSUER")?,
            token_audience: require("JWT_AUDIENCE")?,
            token_ttl_secs: require("JWT_ACCESS_TOKEN_EXPIRES_IN")?
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar("JWT_ACCESS_TOKEN_EXPIRES_IN".to_string()))?,
            mail_api_url: require("MAIL_API_URL")?,
            mail_api_key: require("MAIL_API_KEY")?,
            mail_sender: require("MAIL_SENDER")?,
            mail_subject: require("MAIL_SUBJECT")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
