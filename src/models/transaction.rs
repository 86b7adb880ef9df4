use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the family ledger. Balance arithmetic and transaction
/// integrity are enforced by the backend; the client only renders these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEvent {
    pub id: String,
    pub family_id: String,
    pub event_type: String,
    pub amount: f64,
    #[serde(default)]
    pub from_member_id: Option<String>,
    #[serde(default)]
    pub to_member_id: Option<String>,
    /// Task, reward, or service this entry settles, if any
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl TransactionEvent {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionEventCreate {
    pub family_id: String,
    pub event_type: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionEventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberBalanceSnapshot {
    pub member_id: String,
    pub balance: f64,
    pub updated_at: DateTime<Utc>,
}
