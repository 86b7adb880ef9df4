//! Core library for HomeLedger - a family finance and chore-management app.
//!
//! This crate is the client-side foundation shared by the HomeLedger
//! front-ends. It provides:
//! - `ApiClient`: authenticated REST client for the HomeLedger backend
//! - `Session`: bearer-token session with durable local persistence
//! - typed models for users, families, transactions, tasks, rewards,
//!   and services
//!
//! All business rules (balances, task and reward state transitions,
//! permissions) live in the backend; this crate renders state and issues
//! requests. Failures surface through the `Notify` hook so the embedding
//! UI can show a transient notice at the point of failure.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod notify;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiResult};
pub use auth::Session;
pub use config::Config;
pub use notify::{Notify, TracingNotifier};
