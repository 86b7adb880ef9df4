use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a user has not set an avatar
pub const DEFAULT_AVATAR: &str = "/assets/default-avatar.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub avatar_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Avatar asset path with the placeholder substituted for a blank key.
    pub fn avatar_or_default(&self) -> &str {
        self.avatar_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_key: Option<String>,
}
