//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade into stale data or retry loops without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, LeaderboardKind, LeaderboardResponse, Pin};
use crate::state::pins::PinFilter;

#[cfg(any(test, feature = "hydrate"))]
const DEV_API_BASE: &str = "http://localhost:8080";

/// Origin the REST endpoints are resolved against.
///
/// In the browser this is the page origin; outside it (tests, SSR) the dev
/// server default is used.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEV_API_BASE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEV_API_BASE.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn pins_endpoint(filter: PinFilter) -> &'static str {
    match filter {
        PinFilter::All => "/api/pins/weekly",
        PinFilter::Mine => "/api/pins/my",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn pin_endpoint(pin_id: i64) -> String {
    format!("/api/pins/{pin_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_pins_endpoint(user_id: i64) -> String {
    format!("/api/users/{user_id}/pins")
}

#[cfg(any(test, feature = "hydrate"))]
fn leaderboard_endpoint(kind: LeaderboardKind, page: u32, page_size: u32) -> String {
    format!(
        "/api/leaderboard?type={}&page={page}&pageSize={page_size}",
        kind.as_query()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Message shown when the server rate-limits pin creation (HTTP 429).
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const PIN_LIMIT_MESSAGE: &str =
    "You've reached the pin limit (4–5 pins per 30 minutes). Try again later.";

/// Fetch the current pin snapshot for `filter` from `/api/pins/weekly` or
/// `/api/pins/my`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_pins(filter: PinFilter, token: Option<&str>) -> Result<Vec<Pin>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", api_base(), pins_endpoint(filter));
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("pins", resp.status()));
        }
        resp.json::<Vec<Pin>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filter, token);
        Err("not available on server".to_owned())
    }
}

/// Fetch a single pin by id. Returns `None` if missing or on the server.
pub async fn fetch_pin(pin_id: i64, token: Option<&str>) -> Option<Pin> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", api_base(), pin_endpoint(pin_id));
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Pin>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pin_id, token);
        None
    }
}

/// Fetch all pins dropped by one user. Returns `None` on failure.
pub async fn fetch_user_pins(user_id: i64, token: Option<&str>) -> Option<Vec<Pin>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", api_base(), user_pins_endpoint(user_id));
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Pin>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, token);
        None
    }
}

/// Create a pin from a multipart form (coordinates, description, photo).
///
/// # Errors
///
/// Returns the server's rate-limit message on HTTP 429, the server-supplied
/// `message` field when present, or a generic failure string.
#[cfg(feature = "hydrate")]
pub async fn create_pin(form: &web_sys::FormData, token: Option<&str>) -> Result<Pin, String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let url = format!("{}/api/pins", api_base());
    let mut req = gloo_net::http::Request::post(&url);
    if let Some(token) = token {
        req = req.header("Authorization", &bearer(token));
    }
    let resp = req
        .body(form.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 429 {
        return Err(PIN_LIMIT_MESSAGE.to_owned());
    }
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(message.unwrap_or_else(|| request_failed_message("create pin", status)));
    }
    resp.json::<Pin>().await.map_err(|e| e.to_string())
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&format!("{}/api/auth/login", api_base()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// registration.
pub async fn signup(email: &str, username: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "username": username,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(&format!("{}/api/auth/signup", api_base()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("signup", resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch one leaderboard page.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_leaderboard(
    kind: LeaderboardKind,
    page: u32,
    page_size: u32,
    token: Option<&str>,
) -> Result<LeaderboardResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", api_base(), leaderboard_endpoint(kind, page, page_size));
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("leaderboard", resp.status()));
        }
        resp.json::<LeaderboardResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, page, page_size, token);
        Err("not available on server".to_owned())
    }
}
