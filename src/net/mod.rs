//! Networking modules for HTTP + the pin websocket feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `pin_client` manages the websocket lifecycle
//! and polling fallback, and `types` defines the shared wire schema.

pub mod api;
pub mod pin_client;
pub mod types;
