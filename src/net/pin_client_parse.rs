//! Payload decoding for the pin feed.

#[cfg(test)]
#[path = "pin_client_parse_test.rs"]
mod pin_client_parse_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Pin;

/// Decode one feed message into a batch of pins.
///
/// The server broadcasts either a single pin object or an array of pins;
/// both normalize to a `Vec` here so the merge path sees one shape.
/// Returns `None` for anything that is not a pin payload.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_pin_batch(text: &str) -> Option<Vec<Pin>> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    if value.is_array() {
        serde_json::from_value::<Vec<Pin>>(value).ok()
    } else {
        serde_json::from_value::<Pin>(value).ok().map(|pin| vec![pin])
    }
}
