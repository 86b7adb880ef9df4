use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work offered by one member for a reward collected by another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BountyTask {
    pub id: String,
    pub family_id: String,
    pub title: String,
    pub reward_amount: f64,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BountyTaskCreate {
    pub family_id: String,
    pub created_by: String,
    pub title: String,
    pub reward_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BountyTaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
