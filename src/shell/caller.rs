use axum::http::HeaderMap;

use crate::shared::core::identity::Identity;

/// Header the host reads the caller identity from.
pub const CALLER_IDENTITY_HEADER: &str = "x-caller-identity";

/// Caller identity from request headers, if one was supplied.
///
/// Missing, non UTF-8 and blank values all mean an anonymous caller.
pub fn caller_from_headers(headers: &HeaderMap) -> Option<Identity> {
    headers
        .get(CALLER_IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(Identity::from)
}
