use crate::model::user::{LoginDto, SignUpDto, UpdateProfileDto, WithdrawDto};
use crate::server::error::AppError;
use crate::server::util::validate::{require_field, require_valid_email};

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl CreateUserParams {
    /// Validates field presence and email shape at the API boundary.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All required fields were supplied
    /// - `Err(AppError::BadRequest)` - A field was missing or the email is malformed
    pub fn from_dto(dto: SignUpDto) -> Result<Self, AppError> {
        let email = require_field(dto.email, "email")?;
        require_valid_email(&email)?;

        Ok(Self {
            email,
            password: require_field(dto.password, "password")?,
            username: require_field(dto.username, "username")?,
        })
    }
}

/// Email/password pair extracted from a login request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        Ok(Self {
            email: require_field(dto.email, "email")?,
            password: require_field(dto.password, "password")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub email: String,
    pub username: String,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let email = require_field(dto.email, "email")?;
        require_valid_email(&email)?;

        Ok(Self {
            email,
            username: require_field(dto.username, "username")?,
        })
    }
}

/// Reason a user gave when closing their account. Feedback is free-text and
/// optional.
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    pub withdrawal_reason: String,
    pub feedback: String,
}

impl WithdrawParams {
    pub fn from_dto(dto: WithdrawDto) -> Result<Self, AppError> {
        Ok(Self {
            withdrawal_reason: require_field(dto.withdrawal_reason, "withdrawalReason")?,
            feedback: dto.feedback.unwrap_or_default(),
        })
    }
}
