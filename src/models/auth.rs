use serde::{Deserialize, Serialize};

/// Login payload. The backend accepts either a username/password pair or
/// a platform login code; this client uses the password flow.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn with_password(username: &str, password: &str) -> Self {
        Self {
            code: None,
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Family role label chosen at signup, e.g. "parent" or "child"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Bearer token issued on login, register, and refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangeRequest {
    pub old_password: String,
    pub new_password: String,
}
