//! # Session
//!
//! The logged-in user's session as an explicit object with an explicit
//! init-on-login / clear-on-logout lifecycle. It is passed by reference to
//! whatever needs it — never held as an ambient singleton — so ownership of
//! "who is logged in" is visible in every signature that depends on it.

use tracing::info;

/// Credentials of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub token: String,
    pub user_id: u64,
}

/// The session slot: either logged out or holding an [`ActiveSession`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    active: Option<ActiveSession>,
}

impl Session {
    /// A fresh, logged-out session.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Initializes the session after a successful login.
    pub fn log_in(&mut self, token: impl Into<String>, user_id: u64) {
        info!(user_id, "session started");
        self.active = Some(ActiveSession {
            token: token.into(),
            user_id,
        });
    }

    /// Clears the session on logout.
    pub fn log_out(&mut self) {
        if let Some(active) = self.active.take() {
            info!(user_id = active.user_id, "session ended");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The bearer token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.token.as_str())
    }

    /// The logged-in user's id, if any.
    pub fn user_id(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.user_id)
    }
}
