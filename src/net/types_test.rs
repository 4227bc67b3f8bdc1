use super::*;

// =============================================================
// Helpers
// =============================================================

fn pin_json() -> serde_json::Value {
    serde_json::json!({
        "pinID": 42,
        "userID": 7,
        "lat": 34.0205,
        "lng": -118.2856,
        "description": "Fox squirrel near Doheny",
        "created_at": "2025-11-03T18:21:07Z",
        "image_url": "https://img.example.com/42.jpg",
        "username": "tommy"
    })
}

// =============================================================
// Pin serde
// =============================================================

#[test]
fn pin_deserializes_wire_field_names() {
    let pin: Pin = serde_json::from_value(pin_json()).unwrap();
    assert_eq!(pin.pin_id, 42);
    assert_eq!(pin.user_id, 7);
    assert_eq!(pin.lat, 34.0205);
    assert_eq!(pin.lng, -118.2856);
    assert_eq!(pin.description.as_deref(), Some("Fox squirrel near Doheny"));
    assert_eq!(pin.created_at, "2025-11-03T18:21:07Z");
    assert_eq!(pin.username.as_deref(), Some("tommy"));
}

#[test]
fn pin_serializes_wire_field_names() {
    let pin: Pin = serde_json::from_value(pin_json()).unwrap();
    let value = serde_json::to_value(&pin).unwrap();
    assert!(value.get("pinID").is_some());
    assert!(value.get("userID").is_some());
    assert!(value.get("pin_id").is_none());
    assert!(value.get("user_id").is_none());
}

#[test]
fn pin_optional_fields_default_to_none() {
    let pin: Pin = serde_json::from_value(serde_json::json!({
        "pinID": 1,
        "userID": 2,
        "lat": 0.0,
        "lng": 0.0,
        "created_at": "2025-11-03T00:00:00Z"
    }))
    .unwrap();
    assert!(pin.description.is_none());
    assert!(pin.image_url.is_none());
    assert!(pin.username.is_none());
}

// =============================================================
// Auth + leaderboard serde
// =============================================================

#[test]
fn auth_response_deserializes() {
    let auth: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt-abc",
        "user": {"userID": 7, "username": "tommy", "email": "tommy@usc.edu"}
    }))
    .unwrap();
    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.user.user_id, 7);
    assert_eq!(auth.user.username, "tommy");
}

#[test]
fn leaderboard_response_uses_total_count_field_name() {
    let resp: LeaderboardResponse = serde_json::from_value(serde_json::json!({
        "entries": [
            {"userID": 7, "username": "tommy", "total_pins": 31, "weekly_pins": 5}
        ],
        "totalCount": 120
    }))
    .unwrap();
    assert_eq!(resp.total_count, 120);
    assert_eq!(resp.entries.len(), 1);
    assert_eq!(resp.entries[0].weekly_pins, 5);
}

#[test]
fn leaderboard_kind_query_values() {
    assert_eq!(LeaderboardKind::Weekly.as_query(), "weekly");
    assert_eq!(LeaderboardKind::AllTime.as_query(), "all-time");
}
