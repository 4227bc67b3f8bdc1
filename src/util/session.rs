//! Auth-session persistence across page loads.
//!
//! Stores the bearer token and the serialized user record in
//! `localStorage` and restores them on startup. Requires a browser
//! environment; SSR paths safely no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::User;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::credentials::TOKEN_STORAGE_KEY;

/// localStorage key the serialized user record is persisted under.
pub const USER_STORAGE_KEY: &str = "authUser";

/// Parse a persisted user record. Returns `None` for anything that is not
/// a valid serialized `User`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_stored_user(raw: &str) -> Option<User> {
    serde_json::from_str::<User>(raw).ok()
}

/// Restore a persisted session into `auth`.
///
/// A token without a parseable user (or vice versa) counts as invalid
/// stored data: both keys are cleared and `auth` is left signed out.
pub fn restore(auth: &mut AuthState) {
    #[cfg(feature = "hydrate")]
    {
        let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(s) => s,
            None => return,
        };
        let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten();
        let user = storage
            .get_item(USER_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| parse_stored_user(&raw));

        match (token, user) {
            (Some(token), Some(user)) => {
                auth.token = Some(token);
                auth.user = Some(user);
            }
            (None, None) => {}
            _ => {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
                let _ = storage.remove_item(USER_STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Persist the current session. Signed-out state clears both keys.
pub fn persist(auth: &AuthState) {
    #[cfg(feature = "hydrate")]
    {
        let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(s) => s,
            None => return,
        };
        match (&auth.token, &auth.user) {
            (Some(token), Some(user)) => {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
                if let Ok(raw) = serde_json::to_string(user) {
                    let _ = storage.set_item(USER_STORAGE_KEY, &raw);
                }
            }
            _ => {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
                let _ = storage.remove_item(USER_STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Remove any persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            let _ = storage.remove_item(USER_STORAGE_KEY);
        }
    }
}
