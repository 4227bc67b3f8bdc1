use super::*;

fn pin_json(pin_id: i64) -> serde_json::Value {
    serde_json::json!({
        "pinID": pin_id,
        "userID": 7,
        "lat": 34.0205,
        "lng": -118.2856,
        "created_at": "2025-11-03T18:21:07Z"
    })
}

#[test]
fn single_pin_normalizes_to_batch_of_one() {
    let batch = parse_pin_batch(&pin_json(1).to_string()).expect("pin batch");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].pin_id, 1);
    assert_eq!(batch[0].user_id, 7);
}

#[test]
fn array_payload_yields_all_pins() {
    let payload = serde_json::json!([pin_json(1), pin_json(2)]).to_string();
    let batch = parse_pin_batch(&payload).expect("pin batch");
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1].pin_id, 2);
}

#[test]
fn empty_array_yields_empty_batch() {
    let batch = parse_pin_batch("[]").expect("pin batch");
    assert!(batch.is_empty());
}

#[test]
fn unparseable_text_is_rejected() {
    assert!(parse_pin_batch("{not json").is_none());
}

#[test]
fn non_pin_json_is_rejected() {
    assert!(parse_pin_batch("42").is_none());
    assert!(parse_pin_batch("\"pin\"").is_none());
    assert!(parse_pin_batch(r#"{"userID": 7}"#).is_none());
}

#[test]
fn array_with_malformed_entry_is_rejected_whole() {
    let payload = serde_json::json!([pin_json(1), {"pinID": "not-a-number"}]).to_string();
    assert!(parse_pin_batch(&payload).is_none());
}

#[test]
fn optional_fields_may_be_absent() {
    let batch = parse_pin_batch(&pin_json(1).to_string()).expect("pin batch");
    assert!(batch[0].description.is_none());
    assert!(batch[0].image_url.is_none());
    assert!(batch[0].username.is_none());
}
