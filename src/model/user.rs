use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub role: String,
    pub point: i32,
    pub created_time: String,
}

impl UserDto {
    /// Builds the API view of a user. The password hash never leaves the
    /// server, so there is no field for it here.
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            role: user.role,
            point: user.point,
            created_time: user.created_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileDto {
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePasswordDto {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustPointDto {
    pub point: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemporaryPasswordDto {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawDto {
    pub withdrawal_reason: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailAvailabilityQuery {
    pub email: Option<String>,
}
