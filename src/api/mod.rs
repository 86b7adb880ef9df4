//! REST API client module for the HomeLedger backend.
//!
//! This module provides the `ApiClient` for issuing requests against the
//! backend's JSON API. Resource accessors are grouped one file per
//! capability, mirroring the backend routers: auth, family, transaction,
//! task, reward, service.
//!
//! The API uses JWT bearer token authentication; the token is captured
//! on login/register and attached to every subsequent call.

pub mod auth;
pub mod client;
pub mod error;
pub mod family;
pub mod reward;
pub mod service;
pub mod task;
pub mod transaction;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

// Re-exported so callers of `ApiClient::request` don't need a direct
// reqwest dependency.
pub use reqwest::header;
pub use reqwest::Method;
