//! Bearer-key check for every route except `/health`.
//!
//! Active only when [`AppState`] carries a key, i.e. `REUSEGATE_API_KEY` was
//! set at startup. A refused request is counted as
//! [`Rejection::Unauthorized`] before any model runs.

use super::{AppState, metrics::Rejection};
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

/// Key carried in `Authorization: Bearer <key>`, if any.
fn bearer_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Constant time over the key bytes. Length is not secret.
fn key_accepted(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Refuse requests whose Bearer key does not match the configured one.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(request).await;
    };
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let has_key = bearer_key(&request).is_some();
    if bearer_key(&request).is_some_and(|provided| key_accepted(provided, expected)) {
        return next.run(request).await;
    }

    tracing::warn!(
        event = "auth_failure",
        path = %request.uri().path(),
        has_key,
        "Rejected request without a valid API key"
    );
    state.metrics.record_rejected(Rejection::Unauthorized);
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}
