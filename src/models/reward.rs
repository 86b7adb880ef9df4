use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member-submitted request for a balance credit, subject to admin
/// approval on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub family_id: String,
    pub member_id: String,
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardCreate {
    pub family_id: String,
    pub member_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Approval state change; the only mutable field on a reward.
#[derive(Debug, Clone, Serialize)]
pub struct RewardUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reward() {
        let json = r#"{
            "id": "1c2d3e4f-0000-4a1b-9e6a-555555555555",
            "family_id": "0e65066c-ab20-4da0-b3bf-79dfd0668049",
            "member_id": "5d1f9f1e-0000-4a1b-9e6a-2a2a2a2a2a2a",
            "amount": 5.0,
            "reason": "Good grades",
            "status": "pending",
            "created_at": "2024-03-03T10:00:00Z"
        }"#;
        let reward: Reward = serde_json::from_str(json).expect("parse failed");
        assert_eq!(reward.amount, 5.0);
        assert_eq!(reward.status, "pending");
    }
}
