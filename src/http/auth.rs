//! Bearer token resolution.

use super::ApiError;
use crate::identity::{domain::Principal, ports::PrincipalDirectory};
use axum::http::{HeaderMap, header::AUTHORIZATION};

const BEARER_SCHEME: &str = "bearer";

/// Resolves the caller named by the request's bearer token.
pub(super) async fn authenticate<D>(
    directory: &D,
    headers: &HeaderMap,
) -> Result<Principal, ApiError>
where
    D: PrincipalDirectory,
{
    let token = bearer_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_owned()))?;
    directory
        .resolve(token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid or expired token".to_owned()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, raw_token) = value.trim().split_once(' ')?;
    let token = raw_token.trim();
    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}
