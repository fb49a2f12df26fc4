//! # ReuseGate HTTP API Module
//!
//! This module implements the HTTP JSON API server using axum.
//!
//! ## Endpoints
//!
//! - `POST /break-even` - Break-even gate (+ optional refurbishment assessment)
//! - `POST /cadence` - Cadence gate
//! - `POST /sweep` - Ceiling vs payload ratio, with chart frame
//! - `GET /scenario` - Evaluate the server's reference scenario
//! - `POST /scenario` - Evaluate a posted scenario
//! - `GET /health` - Health check
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Security
//!
//! API key, rate limit and CORS come from [`ServerSettings`]; see the
//! `settings` module for the environment variables.

mod auth;
mod handlers;
mod metrics;
mod middleware;
mod settings;
pub mod types;

pub use metrics::{EvaluationMetrics, Gate, Rejection};
pub use settings::{DEFAULT_RATE_LIMIT, ServerSettings};
pub use types::{
    BreakEvenRequest, BreakEvenResponse, CadenceRequest, CadenceResponse, HealthResponse,
    ScenarioResponse, SweepRequest, SweepResponse,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use middleware::Throttle;
use reusegate_core::{ReferenceScenario, ReuseError};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Maximum request body size. Requests are a handful of numbers.
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// Only immutable data and atomic counters; nothing computed is cached.
#[derive(Clone)]
pub struct AppState {
    /// Scenario served on `GET /scenario`.
    pub scenario: Arc<ReferenceScenario>,
    /// Evaluation and rejection counters.
    pub metrics: Arc<EvaluationMetrics>,
    api_key: Option<Arc<str>>,
    throttle: Option<Throttle>,
}

impl AppState {
    /// Open state for a scenario: no key, no throttle.
    #[must_use]
    pub fn new(scenario: ReferenceScenario) -> Self {
        Self {
            scenario: Arc::new(scenario),
            metrics: Arc::new(EvaluationMetrics::default()),
            api_key: None,
            throttle: None,
        }
    }

    fn secured(mut self, settings: &ServerSettings) -> Self {
        self.api_key = settings.api_key.as_deref().map(Arc::from);
        self.throttle = middleware::throttle(settings.rate_limit);
        self
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// CORS for browser callers, or `None` to send no CORS headers at all.
///
/// `*` allows any origin; otherwise `origins` is a comma-separated list and
/// unparsable entries are skipped. The API only serves `GET` and `POST`.
fn cors_layer(origins: Option<&str>) -> Option<CorsLayer> {
    let origins = origins?.trim();
    let allow = if origins == "*" {
        tracing::warn!("CORS: allowing any origin");
        AllowOrigin::any()
    } else {
        let list: Vec<HeaderValue> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = o, "CORS: skipping invalid origin: {}", e);
                    None
                }
            })
            .collect();
        if list.is_empty() {
            return None;
        }
        AllowOrigin::list(list)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    )
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Layers, outer to inner: tracing, CORS (if configured), body limit,
/// rate limit (if enabled), API key (if configured). Both guards share the
/// state's [`EvaluationMetrics`], so their refusals appear on `/metrics`.
pub fn create_router(state: AppState, settings: &ServerSettings) -> Router {
    let state = state.secured(settings);

    match state.throttle {
        Some(_) => tracing::info!("Rate limiting enabled: {} requests/second", settings.rate_limit),
        None => tracing::info!("Rate limiting disabled"),
    }
    if state.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED. Set REUSEGATE_API_KEY to require a Bearer key."
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/break-even", post(handlers::break_even_handler))
        .route("/cadence", post(handlers::cadence_handler))
        .route("/sweep", post(handlers::sweep_handler))
        .route(
            "/scenario",
            get(handlers::scenario_handler).post(handlers::evaluate_scenario_handler),
        )
        .route("/metrics", get(handlers::metrics_handler));

    // Authentication is innermost: it runs last on the way in
    if state.api_key.is_some() {
        router = router.layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));
    }
    if state.throttle.is_some() {
        router = router.layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::enforce_rate_limit,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .option_layer(cors_layer(settings.cors_origins.as_deref()))
                .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, scenario: ReferenceScenario) -> Result<(), ReuseError> {
    let router = create_router(AppState::new(scenario), &ServerSettings::from_env());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ReuseError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("ReuseGate HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ReuseError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
