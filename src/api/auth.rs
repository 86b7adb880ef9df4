//! Authentication and profile endpoints.
//!
//! Login, register, and refresh capture the issued access token into the
//! shared session before the response body is handed back; logout is a
//! local-only operation that never touches the network.

use reqwest::multipart;
use tracing::{debug, info};

use crate::models::{
    LoginRequest, PasswordChangeRequest, RegisterRequest, StatusMessage, TokenResponse, User,
    UserUpdate,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Log in with username and password. On success the access token is
    /// stored in the session before the body is returned.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<TokenResponse> {
        debug!(username, "Attempting login");
        let request = LoginRequest::with_password(username, password);
        let token: TokenResponse = self.post("/auth/login", &request).await?;
        self.session.set_token(&token.access_token);
        info!("Login successful");
        Ok(token)
    }

    /// Register a new account. Like login, the issued token is captured
    /// so the user is signed in immediately.
    pub async fn register(&self, data: &RegisterRequest) -> ApiResult<TokenResponse> {
        debug!(username = %data.username, "Registering account");
        let token: TokenResponse = self.post("/auth/register", data).await?;
        self.session.set_token(&token.access_token);
        info!("Registration successful");
        Ok(token)
    }

    /// Exchange the current token for a fresh one before it expires.
    pub async fn refresh(&self) -> ApiResult<TokenResponse> {
        let token: TokenResponse = self.post("/auth/refresh", &serde_json::json!({})).await?;
        self.session.set_token(&token.access_token);
        debug!("Session token refreshed");
        Ok(token)
    }

    /// Clear the local session. Fire-and-forget: no network call, token
    /// invalidation server-side is the backend's concern.
    pub fn logout(&self) {
        self.session.clear();
        info!("Logged out");
    }

    /// Fetch the authenticated user's profile
    pub async fn fetch_current_user(&self) -> ApiResult<User> {
        self.get("/auth/me").await
    }

    /// Update nickname and/or avatar key
    pub async fn update_profile(&self, update: &UserUpdate) -> ApiResult<User> {
        self.put("/auth/me", update).await
    }

    /// Change the account password; the backend verifies the old one
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> ApiResult<StatusMessage> {
        let request = PasswordChangeRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.put("/auth/me/password", &request).await
    }

    /// Upload a new avatar image; returns the updated profile
    pub async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<User> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        self.post_multipart("/auth/me/avatar", form).await
    }
}
