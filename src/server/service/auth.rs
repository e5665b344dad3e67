//! Token issuance, verification, and password hashing.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
};

/// Claims carried by every issued token. `sub` is the user id in decimal
/// string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 bearer tokens and hashes passwords.
///
/// Built once from configuration and cloned into request state. Tokens are
/// self-contained; nothing is stored server-side, so an issued token stays
/// valid until its expiry even if the account is deleted.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl AuthService {
    pub fn from_config(config: &Config) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.token_issuer]);
        validation.set_audience(&[&config.token_audience]);

        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
            issuer: config.token_issuer.clone(),
            audience: config.token_audience.clone(),
            ttl_secs: config.token_ttl_secs,
        }
    }

    /// Hashes a password for storage or comparison.
    ///
    /// SHA-512, hex-encoded. Matching the stored format is what makes login
    /// comparison work, so this is the only place hashing happens.
    pub fn hash_password(&self, password: &str) -> String {
        hex::encode(Sha512::digest(password.as_bytes()))
    }

    /// Issues a signed token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token valid for the configured TTL
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verifies a token's signature, expiry, issuer, and audience.
    ///
    /// # Returns
    /// - `Ok(Claims)` - The token is authentic and current
    /// - `Err(AuthError::InvalidToken)` - Any verification failure
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
