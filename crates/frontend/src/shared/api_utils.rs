//! API utilities for client-server communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the fallback base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the ledger server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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

/// Join a base URL and an absolute API path without doubling the slash
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("https://api.example.com/", "/auth/login"), "https://api.example.com/auth/login");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encode an id for use as one path segment
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("http://localhost:3000", "/merchants/tables"),
            "http://localhost:3000/merchants/tables"
        );
        assert_eq!(
            api_url("http://localhost:3000/", "merchants/tables"),
            "http://localhost:3000/merchants/tables"
        );
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("m1"), "m1");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
