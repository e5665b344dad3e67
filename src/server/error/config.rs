use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set. Check `.env.example` for
    /// the full list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is present but not parseable as its expected
    /// type.
    #[error("Malformed environment variable: {0}")]
    InvalidEnvVar(String),
}
