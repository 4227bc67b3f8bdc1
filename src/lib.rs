//! # spotter-client
//!
//! Leptos + WASM client core for the Squirrel Spotter campus map app.
//! Owns the live set of squirrel pins: a REST snapshot fetch, a receive-only
//! websocket feed with reconnect/backoff, and a periodic polling fallback
//! once reconnection is exhausted.
//!
//! UI chrome (routing, forms, map rendering) lives in the host application;
//! this crate contains the wire types, REST helpers, per-domain state, and
//! the pin sync client.

pub mod net;
pub mod state;
pub mod util;
