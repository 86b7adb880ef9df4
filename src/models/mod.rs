//! Typed models for backend payloads.
//!
//! Shapes mirror the backend schemas one-to-one. The client does not
//! validate or transform them beyond display-default substitution
//! (blank avatar keys become placeholder asset paths); all business
//! semantics - balances, roles, state transitions - are owned by the
//! backend. IDs are opaque UUID strings and status fields are opaque
//! strings for the same reason.

pub mod auth;
pub mod family;
pub mod reward;
pub mod service;
pub mod task;
pub mod transaction;
pub mod user;

pub use auth::{LoginRequest, PasswordChangeRequest, RegisterRequest, TokenResponse};
pub use family::{
    Family, FamilyCreate, FamilyMember, FamilyMemberCreate, FamilyMemberUpdate, FamilyUpdate,
};
pub use reward::{Reward, RewardCreate, RewardUpdate};
pub use service::{Service, ServiceCreate, ServiceUpdate};
pub use task::{BountyTask, BountyTaskCreate, BountyTaskUpdate};
pub use transaction::{
    MemberBalanceSnapshot, TransactionEvent, TransactionEventCreate, TransactionEventUpdate,
};
pub use user::{User, UserUpdate};

use serde::{Deserialize, Serialize};

/// Message envelope returned by delete/join endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
