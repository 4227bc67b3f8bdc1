use super::pin_client_policy::TOKEN_RETRY_DELAY_MS;
use super::*;
use crate::util::credentials::{CredentialProvider, StaticCredentials};

// =============================================================
// Helpers
// =============================================================

fn pin(pin_id: i64, user_id: i64) -> Pin {
    Pin {
        pin_id,
        user_id,
        lat: 34.0205,
        lng: -118.2856,
        description: None,
        created_at: "2025-11-03T18:21:07Z".to_owned(),
        image_url: None,
        username: None,
    }
}

// =============================================================
// SyncGate
// =============================================================

#[test]
fn gate_starts_live() {
    assert!(SyncGate::new().is_live());
    assert!(SyncGate::default().is_live());
}

#[test]
fn gate_clones_share_liveness() {
    let gate = SyncGate::new();
    let observer = gate.clone();
    gate.shut();
    assert!(!observer.is_live());
}

// =============================================================
// SyncHandle
// =============================================================

#[test]
fn stop_is_idempotent() {
    let handle = SyncHandle { gate: SyncGate::new() };
    assert!(!handle.is_stopped());

    handle.stop();
    handle.stop();
    assert!(handle.is_stopped());
}

// =============================================================
// Gate-checked continuations
// =============================================================

#[test]
fn late_stream_batch_is_suppressed_after_stop() {
    let gate = SyncGate::new();
    let handle = SyncHandle { gate: gate.clone() };
    let mut state = PinsState::default();

    merge_if_live(&gate, &mut state, vec![pin(1, 10)]);
    assert_eq!(state.pins.len(), 1);

    handle.stop();

    // An in-flight message arriving after teardown must be a no-op.
    merge_if_live(&gate, &mut state, vec![pin(2, 11)]);
    assert_eq!(state.pins.len(), 1);
    assert!(state.pins.contains_key(&1));
}

#[test]
fn snapshot_completion_replaces_and_clears_loading() {
    let gate = SyncGate::new();
    let mut state = PinsState::default();
    state.loading = true;
    merge_if_live(&gate, &mut state, vec![pin(1, 10), pin(2, 11)]);

    replace_if_live(&gate, &mut state, vec![pin(3, 12)]);
    assert_eq!(state.pins.len(), 1);
    assert!(state.pins.contains_key(&3));
    assert!(!state.loading);
}

#[test]
fn late_snapshot_is_suppressed_after_stop() {
    let gate = SyncGate::new();
    let handle = SyncHandle { gate: gate.clone() };
    let mut state = PinsState::default();
    state.loading = true;
    merge_if_live(&gate, &mut state, vec![pin(1, 10)]);

    handle.stop();

    replace_if_live(&gate, &mut state, vec![pin(2, 11)]);
    assert!(state.pins.contains_key(&1));
    assert!(!state.pins.contains_key(&2));
    assert!(state.loading);
}

// =============================================================
// Credential gating
// =============================================================

#[test]
fn missing_token_stays_disconnected_and_retries_on_fixed_interval() {
    let creds = StaticCredentials::new(None);
    let mut state = PinsState::default();

    // Each pass without a credential picks the same retry delay and the
    // status never advances.
    for _ in 0..3 {
        match connect_step(creds.token()) {
            ConnectStep::RetryToken { delay_ms } => {
                assert_eq!(delay_ms, TOKEN_RETRY_DELAY_MS);
            }
            ConnectStep::Connect { .. } => {
                state.connection_status = ConnectionStatus::Connecting;
            }
        }
    }
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn token_arrival_proceeds_to_connect() {
    let creds = StaticCredentials::new(Some("jwt-abc"));
    match connect_step(creds.token()) {
        ConnectStep::Connect { token } => assert_eq!(token, "jwt-abc"),
        ConnectStep::RetryToken { .. } => panic!("retried with a credential present"),
    }
}
