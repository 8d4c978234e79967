//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

/// Get the base URL for backend requests
///
/// Constructs the base URL from the current window location, using
/// port 8000 for the query backend.
///
/// # Returns
/// - Base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
///
/// # Example
/// ```text
/// let url = format!("{}/ask/?question={}", api_base(), encoded);
/// ```
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
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full backend URL from a path
///
/// # Arguments
/// * `path` - The endpoint path (should start with "/")
///
/// # Example
/// ```text
/// let url = api_url("/connect_db");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
