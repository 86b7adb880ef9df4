use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring offering in the family marketplace, e.g. "walk the dog",
/// priced in ledger units and provided by one member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub family_id: String,
    pub title: String,
    pub price: f64,
    pub provider_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCreate {
    pub family_id: String,
    pub title: String,
    pub price: f64,
    pub provider_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
