//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `pins`) so individual components can
//! depend on small focused models. Structs hold plain fields; the host app
//! wraps them in `RwSignal`s and provides them via context.

pub mod auth;
pub mod pins;
