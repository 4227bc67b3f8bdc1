//! Live pin-set state synced from the server.
//!
//! DESIGN
//! ======
//! Pins are keyed by `pin_id` so updates arriving twice (snapshot + stream)
//! deduplicate by identity. Insertion order carries no meaning; display
//! order is derived from map position. The streamed merge only adds or
//! overwrites, while a snapshot replaces the whole set so pins the server
//! no longer returns drop out.

#[cfg(test)]
#[path = "pins_test.rs"]
mod pins_test;

use std::collections::HashMap;

use crate::net::types::Pin;

/// Which slice of pins the sync client is presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinFilter {
    /// Everyone's pins.
    #[default]
    All,
    /// Only the viewer's own pins.
    Mine,
}

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Synced pin collection plus connection health.
///
/// Owned by the pin sync client; UI code reads it through the signal but
/// never mutates it directly.
#[derive(Clone, Debug, Default)]
pub struct PinsState {
    pub pins: HashMap<i64, Pin>,
    pub connection_status: ConnectionStatus,
    pub loading: bool,
    pub polling: bool,
    pub reconnect_attempts: u32,
    pub filter: PinFilter,
}

impl PinsState {
    /// Merge a streamed batch: a pin with a known id replaces the stored
    /// record whole, everything else is preserved. Never deletes.
    pub fn merge_batch(&mut self, batch: Vec<Pin>) {
        for pin in batch {
            self.pins.insert(pin.pin_id, pin);
        }
    }

    /// Replace the collection with a fresh snapshot; pins absent from the
    /// snapshot are dropped.
    pub fn replace_all(&mut self, snapshot: Vec<Pin>) {
        self.pins.clear();
        for pin in snapshot {
            self.pins.insert(pin.pin_id, pin);
        }
    }

    /// Pins visible under the current filter for `viewer`.
    ///
    /// The `Mine` filter is a client-side safety net over whatever the
    /// server already filtered; without a known viewer identity it passes
    /// everything through.
    pub fn visible_pins(&self, viewer: Option<i64>) -> Vec<Pin> {
        match (self.filter, viewer) {
            (PinFilter::Mine, Some(user_id)) => self
                .pins
                .values()
                .filter(|pin| pin.user_id == user_id)
                .cloned()
                .collect(),
            _ => self.pins.values().cloned().collect(),
        }
    }
}
