//! Bearer token extractor backed by the authorization gate

use axum::{
    extract::{FromRequestParts, MatchedPath},
    http::{header, request::Parts, HeaderMap},
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{Identity, Operation};

/// Extractor that requires a valid token for the matched operation.
///
/// The token is read from `Authorization: Bearer <token>`. A missing header
/// or another scheme counts as no token.
#[derive(Debug, Clone)]
pub struct RequireUser(pub Identity);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let operation = parts
            .extensions
            .get::<MatchedPath>()
            .and_then(|path| Operation::from_route(parts.method.as_str(), path.as_str()))
            .ok_or_else(|| ApiError::internal("unknown_operation", "Route is not mapped to an operation"))?;

        let token = extract_bearer_token(&parts.headers);
        let identity = state.gate.authorize(token, operation)?.ok_or_else(|| {
            ApiError::internal("unknown_operation", "Public route requires a caller")
        })?;

        Ok(RequireUser(identity))
    }
}

/// Token from the Authorization header, if it carries a Bearer credential
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
