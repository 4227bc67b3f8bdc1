//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names intentionally mirror the server payloads (`pinID`, `userID`,
//! `totalCount`) so serde round-trips stay lossless; Rust-side names follow
//! normal snake_case via `serde(rename)`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A geotagged squirrel sighting as represented on the wire.
///
/// Pins are immutable from the client's perspective except for whole-record
/// replacement: a later payload with the same `pin_id` supersedes the
/// earlier one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Unique server-assigned pin identifier.
    #[serde(rename = "pinID")]
    pub pin_id: i64,
    /// Identifier of the user who dropped the pin.
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Free-text description entered by the spotter.
    pub description: Option<String>,
    /// Server-assigned creation timestamp, ISO-8601.
    pub created_at: String,
    /// URL of the uploaded photo, if one was attached.
    pub image_url: Option<String>,
    /// Denormalized display name, populated by the server for convenience.
    pub username: Option<String>,
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// Display name.
    pub username: String,
    /// Account email address.
    pub email: String,
}

/// Login/signup response carrying the bearer token and the user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent REST and websocket authentication.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// One row of the pin-count leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Identifier of the ranked user.
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// Display name of the ranked user.
    pub username: String,
    /// All-time pin count.
    pub total_pins: i64,
    /// Pin count for the current week.
    pub weekly_pins: i64,
}

/// Paged leaderboard payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    /// Entries for the requested page, ranked best-first.
    pub entries: Vec<LeaderboardEntry>,
    /// Total number of ranked users across all pages.
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

/// Which leaderboard ranking to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardKind {
    /// Pins dropped this week.
    Weekly,
    /// Pins dropped since account creation.
    AllTime,
}

impl LeaderboardKind {
    /// Value of the `type` query parameter for this ranking.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::AllTime => "all-time",
        }
    }
}
