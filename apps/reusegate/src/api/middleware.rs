//! Global request throttle.
//!
//! One `governor` bucket shared by all routes, sized from
//! `REUSEGATE_RATE_LIMIT`. Throttled requests are counted as
//! [`Rejection::RateLimited`].

use super::{AppState, metrics::Rejection};
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Shared, unkeyed limiter.
pub type Throttle = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build a throttle for `per_second` requests, or `None` when it is zero.
pub fn throttle(per_second: u32) -> Option<Throttle> {
    NonZeroU32::new(per_second).map(|rps| Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Turn away requests once the shared bucket is empty.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(limiter) = state.throttle.as_ref() else {
        return next.run(request).await;
    };
    if limiter.check().is_ok() {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
    state.metrics.record_rejected(Rejection::RateLimited);
    (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response()
}
