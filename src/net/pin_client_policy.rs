//! Reconnect, backoff, and endpoint policy for the pin feed.

#[cfg(test)]
#[path = "pin_client_policy_test.rs"]
mod pin_client_policy_test;

#[cfg(any(test, feature = "hydrate"))]
pub(super) const BASE_RECONNECT_DELAY_MS: u64 = 1000;
#[cfg(any(test, feature = "hydrate"))]
pub(super) const MAX_RECONNECT_DELAY_MS: u64 = 30_000;
#[cfg(any(test, feature = "hydrate"))]
pub(super) const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// Snapshot refresh interval once streaming has been abandoned.
#[cfg(any(test, feature = "hydrate"))]
pub(super) const POLL_INTERVAL_MS: u64 = 30_000;

/// Retry interval while no credential is available.
#[cfg(any(test, feature = "hydrate"))]
pub(super) const TOKEN_RETRY_DELAY_MS: u64 = 1000;

/// Poll interval while waiting for a socket handshake to settle.
#[cfg(any(test, feature = "hydrate"))]
pub(super) const HANDSHAKE_POLL_MS: u64 = 50;

/// What the connection loop should do this pass, given the credential.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum ConnectStep {
    /// No token available: stay disconnected and retry after the delay.
    RetryToken { delay_ms: u64 },
    /// Credential in hand: proceed to the handshake.
    Connect { token: String },
}

/// Gate a connection attempt on credential presence.
///
/// The retry delay is fixed, never backed off; a missing credential is a
/// transient store state, not a connection failure.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn connect_step(token: Option<String>) -> ConnectStep {
    match token {
        Some(token) => ConnectStep::Connect { token },
        None => ConnectStep::RetryToken { delay_ms: TOKEN_RETRY_DELAY_MS },
    }
}

/// Bounded exponential backoff for stream reconnection.
///
/// Each failure doubles the delay (2s, 4s, 8s, 16s, then capped at 30s);
/// after five failures the policy is exhausted and the caller falls back
/// to polling. Only a successful open re-arms the sequence.
#[cfg(any(test, feature = "hydrate"))]
pub(super) struct ReconnectPolicy {
    attempts: u32,
}

#[cfg(any(test, feature = "hydrate"))]
impl ReconnectPolicy {
    pub(super) fn new() -> Self {
        Self { attempts: 0 }
    }

    pub(super) fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Delay before the next reconnect attempt, or `None` once exhausted.
    pub(super) fn next_delay_ms(&mut self) -> Option<u64> {
        if self.attempts >= MAX_RECONNECT_ATTEMPTS {
            return None;
        }
        self.attempts += 1;
        Some((BASE_RECONNECT_DELAY_MS << self.attempts).min(MAX_RECONNECT_DELAY_MS))
    }

    pub(super) fn reset(&mut self) {
        self.attempts = 0;
    }
}

/// Websocket origin for an HTTP(S) API origin.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn ws_base(api_base: &str) -> String {
    if let Some(rest) = api_base.strip_prefix("https") {
        format!("wss{rest}")
    } else if let Some(rest) = api_base.strip_prefix("http") {
        format!("ws{rest}")
    } else {
        api_base.to_owned()
    }
}

/// Full pin feed URL with the bearer token as a connection parameter.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn ws_endpoint(api_base: &str, token: &str) -> String {
    format!("{}/ws/pins?token={token}", ws_base(api_base))
}
