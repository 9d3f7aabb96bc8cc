//! Helpers for talking to the REST backend.

/// Base URL for API requests.
///
/// Derived from the current window location; the backend always listens on
/// port 3000, regardless of where the static assets are served from.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Timestamp query parameter to defeat intermediary caches on GET requests.
pub fn cache_buster() -> i64 {
    js_sys::Date::now() as i64
}
