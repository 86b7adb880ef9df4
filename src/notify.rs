//! User-facing notice hook.
//!
//! Every request failure surfaces a transient on-screen notice at the
//! point of failure; a 401 additionally tells the UI to send the user
//! back to the login surface. The client core only emits these events -
//! rendering a toast and performing navigation belong to the embedding
//! front-end, which supplies its own `Notify` implementation.

use std::time::Duration;

use tracing::warn;

/// Delay before the UI should navigate to the login surface after a
/// session-expired event, so the notice stays readable.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Notice shown when a request never reached the backend.
pub const NETWORK_ERROR_NOTICE: &str = "Network error, please try again";

/// Notice shown when the backend rejected the session token.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired, please log in again";

pub trait Notify: Send + Sync {
    /// Show a transient notice to the user.
    fn toast(&self, message: &str);

    /// The session was invalidated by the backend. Implementations show
    /// `SESSION_EXPIRED_NOTICE` and schedule navigation to the login
    /// surface after `LOGIN_REDIRECT_DELAY`.
    fn session_expired(&self);
}

/// Default implementation that records notices in the log stream.
/// Headless callers (scripts, tests without assertions) use this.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notify for TracingNotifier {
    fn toast(&self, message: &str) {
        warn!(notice = message, "User notice");
    }

    fn session_expired(&self) {
        warn!(
            notice = SESSION_EXPIRED_NOTICE,
            redirect_after_ms = LOGIN_REDIRECT_DELAY.as_millis() as u64,
            "Session expired"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_delay_keeps_notice_readable() {
        // The UI shows the expiry notice, waits this long, then
        // navigates to the login surface
        assert_eq!(LOGIN_REDIRECT_DELAY, Duration::from_millis(1500));
    }
}
