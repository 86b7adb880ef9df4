use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a family has not set an avatar
pub const DEFAULT_FAMILY_AVATAR: &str = "/assets/default-family-avatar.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_key: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Family {
    pub fn avatar_or_default(&self) -> &str {
        self.avatar_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_FAMILY_AVATAR)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FamilyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub family_id: String,
    pub user_id: String,
    pub role: String,
    /// Spending allowance granted each month, in ledger units
    #[serde(default)]
    pub monthly_quota: f64,
    pub joined_at: DateTime<Utc>,
}

impl FamilyMember {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyMemberCreate {
    pub user_id: String,
    pub role: String,
    pub monthly_quota: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FamilyMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_quota: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_family_member() {
        let json = r#"{
            "id": "5d1f9f1e-0000-4a1b-9e6a-2a2a2a2a2a2a",
            "family_id": "0e65066c-ab20-4da0-b3bf-79dfd0668049",
            "user_id": "22b210e3-d325-41be-b761-31e18bfe2c73",
            "role": "admin",
            "monthly_quota": 50.0,
            "joined_at": "2024-03-01T08:30:00Z"
        }"#;
        let member: FamilyMember = serde_json::from_str(json).expect("parse failed");
        assert!(member.is_admin());
        assert_eq!(member.monthly_quota, 50.0);
    }

    #[test]
    fn test_family_avatar_default() {
        let json = r#"{
            "id": "0e65066c-ab20-4da0-b3bf-79dfd0668049",
            "name": "The Parkers",
            "created_by": "22b210e3-d325-41be-b761-31e18bfe2c73",
            "created_at": "2024-03-01T08:30:00Z"
        }"#;
        let family: Family = serde_json::from_str(json).expect("parse failed");
        assert_eq!(family.avatar_or_default(), DEFAULT_FAMILY_AVATAR);
    }
}
