//! Bearer-token session state shared across the client.
//!
//! The session holds one opaque credential. It is mirrored in memory and
//! persisted through a `TokenStore`; the in-memory value is lazily
//! populated from storage on first read and both are written together on
//! update, so the two always converge. Absence is represented as an empty
//! value, never an error - storage failures are logged and swallowed so
//! that reading the session can never fail a caller.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Session file name in the app data directory
const SESSION_FILE: &str = "session.json";

/// Durable storage slot for the session token.
///
/// `Session` treats this as a single key-value slot that survives process
/// restarts. The file-backed implementation is used by the apps; the
/// in-memory one backs tests and explicit demo/offline usage.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    updated_at: DateTime<Utc>,
}

/// Token storage backed by a JSON file in the app data directory.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .context("Failed to read session file")?;
        let persisted: PersistedSession = serde_json::from_str(&contents)
            .context("Failed to parse session file")?;
        Ok(Some(persisted.token))
    }

    fn save(&self, token: &str) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let persisted = PersistedSession {
            token: token.to_string(),
            updated_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&persisted)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory token storage for tests and demo mode.
///
/// Demo/offline usage is an explicit caller decision: construct the
/// `Session` over this store instead of relying on any fallback inside
/// the data path.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(lock_recovering(&self.token).clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *lock_recovering(&self.token) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *lock_recovering(&self.token) = None;
        Ok(())
    }
}

/// Process-wide session object.
///
/// All token mutation points (login/register success, explicit update,
/// logout, 401 clearing) go through this object. The internal mutex only
/// satisfies Rust's shared-mutability rules; there is no concurrent
/// contention by design, as UI event handlers run to completion.
pub struct Session {
    store: Box<dyn TokenStore>,
    // Empty string means "no known token"; the store is consulted on read.
    cached: Mutex<String>,
}

impl Session {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            cached: Mutex::new(String::new()),
        }
    }

    /// Convenience constructor for the standard file-backed session.
    pub fn with_data_dir(dir: PathBuf) -> Self {
        Self::new(Box::new(FileTokenStore::new(dir)))
    }

    /// Overwrite the in-memory token and persist it. Never fails; a
    /// persistence error is logged and the in-memory value still wins.
    pub fn set_token(&self, token: &str) {
        *lock_recovering(&self.cached) = token.to_string();
        if let Err(e) = self.store.save(token) {
            warn!(error = %e, "Failed to persist session token");
        }
        debug!("Session token updated");
    }

    /// Return the current token, lazily reading it from durable storage
    /// when the in-memory value is empty. `None` means not authenticated.
    pub fn token(&self) -> Option<String> {
        let mut cached = lock_recovering(&self.cached);
        if cached.is_empty() {
            match self.store.load() {
                Ok(Some(token)) => {
                    debug!("Session token loaded from storage");
                    *cached = token;
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Failed to load session token"),
            }
        }
        if cached.is_empty() {
            None
        } else {
            Some(cached.clone())
        }
    }

    /// True iff a non-empty token is available.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drop the token from memory and durable storage together.
    pub fn clear(&self) {
        lock_recovering(&self.cached).clear();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session token");
        }
        debug!("Session cleared");
    }
}

/// Recover the guarded value even if a holder panicked.
fn lock_recovering<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_session() -> Session {
        Session::new(Box::new(MemoryTokenStore::default()))
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let session = memory_session();
        session.set_token("tok-123");
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_empty_session_is_unauthenticated() {
        let session = memory_session();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_removes_token_everywhere() {
        let store = Box::new(MemoryTokenStore::default());
        let session = Session::new(store);
        session.set_token("tok-123");
        session.clear();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_token_lazily_loaded_from_store() {
        // Simulates a restart: storage has a token the new session's
        // memory does not.
        let store = MemoryTokenStore::default();
        store.save("persisted-tok").expect("save failed");
        let session = Session::new(Box::new(store));
        assert_eq!(session.token().as_deref(), Some("persisted-tok"));
    }

    #[test]
    fn test_overwrite_replaces_previous_token() {
        let session = memory_session();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "homeledger-session-test-{}",
            std::process::id()
        ));
        let store = FileTokenStore::new(dir.clone());

        assert!(store.load().expect("load failed").is_none());

        store.save("file-tok").expect("save failed");
        assert_eq!(
            store.load().expect("load failed").as_deref(),
            Some("file-tok")
        );

        store.clear().expect("clear failed");
        assert!(store.load().expect("load failed").is_none());

        let _ = std::fs::remove_dir_all(dir);
    }
}
