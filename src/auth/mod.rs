//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `Session`: bearer-token session state with durable persistence
//! - `TokenStore`: storage seam behind `Session`, with file-backed and
//!   in-memory implementations
//!
//! The token is persisted in a single durable slot and mirrored in memory
//! for the process lifetime; it is cleared on logout or when the backend
//! rejects it with a 401.

pub mod session;

pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
