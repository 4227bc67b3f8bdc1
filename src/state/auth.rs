//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity-aware code (the `Mine` pin filter, leaderboard highlighting)
//! reads the current user from here; the session itself is persisted to
//! browser storage by `util::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, User};

/// Authentication state tracking the current user, bearer token, and
/// loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Install a fresh login/signup result as the active session.
    pub fn establish(&mut self, auth: AuthResponse) {
        self.token = Some(auth.token);
        self.user = Some(auth.user);
    }

    /// Drop the active session.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Whether both a user record and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Identifier of the signed-in user, if any.
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.user_id)
    }
}
