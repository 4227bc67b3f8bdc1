//! Credential access for authenticated requests and the pin feed.
//!
//! DESIGN
//! ======
//! The browser keeps the bearer token in `localStorage`; consumers only
//! ever need a synchronous read at the moment they connect, so the store
//! is abstracted behind a trait rather than threaded through as a global.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// localStorage key the bearer token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Synchronous source of the current bearer token.
///
/// Implementations never refresh or own the credential; they report
/// whatever is present at the moment of the call.
pub trait CredentialProvider {
    /// The current bearer token, if one is available.
    fn token(&self) -> Option<String>;
}

/// Reads the bearer token from browser `localStorage`.
///
/// Outside the browser (SSR, native tests) there is no storage, so this
/// always reports no token.
#[derive(Clone, Copy, Debug, Default)]
pub struct StorageCredentials;

impl CredentialProvider for StorageCredentials {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Fixed credential source for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: Option<&str>) -> Self {
        Self { token: token.map(str::to_owned) }
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
