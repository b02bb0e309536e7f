//! Bearer Token Extraction
//!
//! Reads the credential carried in the `Authorization` header.

use axum::http::{HeaderMap, header};

const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively and may be omitted entirely,
/// in which case the whole header value is the token. Returns `None` when
/// the header is absent, not visible ASCII, or empty after trimming.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        None if value.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
