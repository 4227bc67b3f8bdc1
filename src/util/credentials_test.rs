use super::*;

#[test]
fn static_credentials_report_configured_token() {
    let creds = StaticCredentials::new(Some("jwt-abc"));
    assert_eq!(creds.token().as_deref(), Some("jwt-abc"));
}

#[test]
fn static_credentials_report_absence() {
    let creds = StaticCredentials::new(None);
    assert!(creds.token().is_none());
}

#[test]
fn storage_credentials_report_none_outside_browser() {
    let creds = StorageCredentials;
    assert!(creds.token().is_none());
}

#[test]
fn token_storage_key_matches_persisted_name() {
    assert_eq!(TOKEN_STORAGE_KEY, "authToken");
}
