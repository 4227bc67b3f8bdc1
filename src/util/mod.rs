//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credentials` abstracts the ambient token store behind a trait so the
//! sync client stays testable; `session` persists and restores the auth
//! session across page loads.

pub mod credentials;
pub mod session;
