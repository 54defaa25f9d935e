//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `FINDMYSPOT_API_BASE` set at compile time
/// 2. `[api] base_url` from config.toml
/// 3. current window host with the configured port
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("FINDMYSPOT_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    if let Some(base) = config().api.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Build a versioned API URL, e.g. `api_url("province/65f0")`
/// → "http://localhost:3000/v1/province/65f0"
pub fn api_url(path: &str) -> String {
    config().api.endpoint(&api_base(), path)
}

/// `{collection}/{id}` with the id percent-encoded
pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_encoded() {
        assert_eq!(item_path("province", "65f0c2"), "province/65f0c2");
        assert_eq!(item_path("parking-slot", "a b/c"), "parking-slot/a%20b%2Fc");
    }
}
