use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the admin key for protected listing endpoints
pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time string comparison to prevent timing attacks on the admin key
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the request headers against the configured admin key.
///
/// With no key configured every request is allowed.
pub fn is_authorized(expected: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(expected) = expected else {
        return true;
    };

    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|provided| constant_time_compare(provided, expected))
        .unwrap_or(false)
}
