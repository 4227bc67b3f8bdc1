//! Websocket pin feed client with reconnect and polling fallback.
//!
//! The pin client owns the live pin collection: it runs the initial REST
//! snapshot fetch, keeps a receive-only websocket feed open with bounded
//! exponential-backoff reconnection, and degrades to periodic snapshot
//! polling once reconnection is exhausted. It is the only writer of
//! `PinsState`.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures feed the reconnect loop, malformed payloads are
//! logged and dropped, and a missing credential is retried on a short
//! interval; none of them surface to the caller. The worst degraded mode
//! is indefinite polling.

#[path = "pin_client_parse.rs"]
mod pin_client_parse;
#[path = "pin_client_policy.rs"]
mod pin_client_policy;

#[cfg(feature = "hydrate")]
use self::pin_client_parse::parse_pin_batch;
#[cfg(feature = "hydrate")]
use self::pin_client_policy::{HANDSHAKE_POLL_MS, POLL_INTERVAL_MS, ReconnectPolicy, ws_endpoint};
#[cfg(any(test, feature = "hydrate"))]
use self::pin_client_policy::{ConnectStep, connect_step};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Pin;
#[cfg(feature = "hydrate")]
use crate::state::pins::PinFilter;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::pins::{ConnectionStatus, PinsState};
#[cfg(feature = "hydrate")]
use crate::util::credentials::CredentialProvider;
#[cfg(feature = "hydrate")]
use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

use std::cell::Cell;
use std::rc::Rc;

/// Liveness gate shared between a running pin client and its handle.
///
/// Every pending continuation (fetch completion, stream event, timer fire)
/// checks the gate before touching state, so completions that land after
/// teardown become no-ops. In-flight network calls are not cancelled, only
/// suppressed.
#[derive(Clone, Debug)]
pub struct SyncGate {
    live: Rc<Cell<bool>>,
}

impl SyncGate {
    pub fn new() -> Self {
        Self { live: Rc::new(Cell::new(true)) }
    }

    /// Whether effects may still be applied.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    fn shut(&self) {
        self.live.set(false);
    }
}

impl Default for SyncGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one running pin client instance.
#[derive(Debug)]
pub struct SyncHandle {
    gate: SyncGate,
}

impl SyncHandle {
    /// Tear down the client by invalidating the shared gate.
    ///
    /// Safe to call any number of times; the connection loop, any pending
    /// reconnect timer, and the polling loop all exit at their next gate
    /// check.
    pub fn stop(&self) {
        self.gate.shut();
    }

    pub fn is_stopped(&self) -> bool {
        !self.gate.is_live()
    }
}

/// Gate-checked batch merge; the stream receive path applies messages
/// through here so completions landing after teardown are no-ops.
#[cfg(any(test, feature = "hydrate"))]
fn merge_if_live(gate: &SyncGate, state: &mut PinsState, batch: Vec<Pin>) {
    if gate.is_live() {
        state.merge_batch(batch);
    }
}

/// Gate-checked snapshot replacement; the fetch completion path applies
/// results through here. Clears `loading` only when the result lands.
#[cfg(any(test, feature = "hydrate"))]
fn replace_if_live(gate: &SyncGate, state: &mut PinsState, snapshot: Vec<Pin>) {
    if gate.is_live() {
        state.replace_all(snapshot);
        state.loading = false;
    }
}

/// Start the pin sync client for `filter`.
///
/// Resets `pins` to an empty collection, kicks off the initial snapshot
/// fetch, and starts the websocket connection loop. A filter change is a
/// stop-then-respawn: call [`SyncHandle::stop`] on the old handle first.
#[cfg(feature = "hydrate")]
pub fn spawn_pin_client(
    pins: RwSignal<PinsState>,
    credentials: Rc<dyn CredentialProvider>,
    filter: PinFilter,
) -> SyncHandle {
    let gate = SyncGate::new();

    pins.update(|p| {
        *p = PinsState { filter, ..PinsState::default() };
    });

    leptos::task::spawn_local(refresh_pins(pins, credentials.clone(), filter, gate.clone()));
    leptos::task::spawn_local(pin_client_loop(pins, credentials, filter, gate.clone()));

    SyncHandle { gate }
}

/// Fetch a snapshot and replace the collection with it.
///
/// On failure the collection is left untouched and only `loading` clears.
#[cfg(feature = "hydrate")]
async fn refresh_pins(
    pins: RwSignal<PinsState>,
    credentials: Rc<dyn CredentialProvider>,
    filter: PinFilter,
    gate: SyncGate,
) {
    if !gate.is_live() {
        return;
    }
    pins.update(|p| p.loading = true);

    let token = credentials.token();
    match crate::net::api::fetch_pins(filter, token.as_deref()).await {
        Ok(snapshot) => pins.update(|p| replace_if_live(&gate, p, snapshot)),
        Err(e) => {
            leptos::logging::warn!("pin snapshot fetch failed: {e}");
            if gate.is_live() {
                pins.update(|p| p.loading = false);
            }
        }
    }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn pin_client_loop(
    pins: RwSignal<PinsState>,
    credentials: Rc<dyn CredentialProvider>,
    filter: PinFilter,
    gate: SyncGate,
) {
    let mut policy = ReconnectPolicy::new();

    loop {
        if !gate.is_live() {
            return;
        }

        // No credential yet: stay disconnected and poll the store until
        // one appears.
        let token = match connect_step(credentials.token()) {
            ConnectStep::RetryToken { delay_ms } => {
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
                continue;
            }
            ConnectStep::Connect { token } => token,
        };

        pins.update(|p| p.connection_status = ConnectionStatus::Connecting);

        let url = ws_endpoint(&crate::net::api::api_base(), &token);
        match run_stream(&url, pins, &mut policy, &gate).await {
            Ok(()) => leptos::logging::log!("pin feed closed"),
            Err(e) => leptos::logging::warn!("pin feed error: {e}"),
        }

        if !gate.is_live() {
            return;
        }
        pins.update(|p| p.connection_status = ConnectionStatus::Disconnected);

        match policy.next_delay_ms() {
            Some(delay) => {
                pins.update(|p| p.reconnect_attempts = policy.attempts());
                leptos::logging::log!(
                    "reconnecting pin feed in {delay}ms (attempt {})",
                    policy.attempts()
                );
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            }
            None => {
                leptos::logging::warn!("pin feed reconnects exhausted, falling back to polling");
                poll_pins(pins, credentials, filter, gate).await;
                return;
            }
        }
    }
}

/// Wait for the socket handshake to settle.
///
/// Returns `Ok(true)` once open, `Ok(false)` if the client was stopped
/// while waiting, and an error if the socket closed before opening.
#[cfg(feature = "hydrate")]
async fn await_handshake(
    ws: &gloo_net::websocket::futures::WebSocket,
    gate: &SyncGate,
) -> Result<bool, String> {
    use gloo_net::websocket::State;

    loop {
        if !gate.is_live() {
            return Ok(false);
        }
        match ws.state() {
            State::Connecting => {
                gloo_timers::future::sleep(std::time::Duration::from_millis(HANDSHAKE_POLL_MS))
                    .await;
            }
            State::Open => return Ok(true),
            State::Closing | State::Closed => return Err("handshake failed".to_owned()),
        }
    }
}

/// Connect to the pin feed and merge messages until disconnect.
///
/// A construction or handshake failure is reported the same way as a
/// mid-stream error; the caller treats both as a closed connection.
#[cfg(feature = "hydrate")]
async fn run_stream(
    url: &str,
    pins: RwSignal<PinsState>,
    policy: &mut ReconnectPolicy,
    gate: &SyncGate,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::{Message, futures::WebSocket};

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;

    if !await_handshake(&ws, gate).await? {
        let _ = ws.close(None, None);
        return Ok(());
    }

    // Open: the backoff sequence re-arms and any poll fallback yields.
    policy.reset();
    pins.update(|p| {
        p.connection_status = ConnectionStatus::Connected;
        p.reconnect_attempts = 0;
        p.polling = false;
    });
    leptos::logging::log!("pin feed connected");

    while let Some(message) = ws.next().await {
        if !gate.is_live() {
            break;
        }
        match message {
            Ok(Message::Text(text)) => match parse_pin_batch(&text) {
                Some(batch) => pins.update(|p| merge_if_live(gate, p, batch)),
                None => leptos::logging::warn!("discarding malformed pin payload"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}

/// Terminal fallback: refresh the snapshot on a fixed interval.
///
/// Entered once reconnection is exhausted; streaming is not retried for
/// the remainder of this client's lifetime.
#[cfg(feature = "hydrate")]
async fn poll_pins(
    pins: RwSignal<PinsState>,
    credentials: Rc<dyn CredentialProvider>,
    filter: PinFilter,
    gate: SyncGate,
) {
    if !gate.is_live() {
        return;
    }
    pins.update(|p| p.polling = true);

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
        if !gate.is_live() {
            return;
        }
        refresh_pins(pins, credentials.clone(), filter, gate.clone()).await;
    }
}

#[cfg(test)]
#[path = "pin_client_test.rs"]
mod pin_client_test;
