//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers. Every handler
//! is a thin shell around one core call. The core never fails, so client
//! errors come only from unreadable bodies and malformed sweep ranges; both
//! are counted on `/metrics` before the error goes back.

use super::{
    AppState,
    metrics::{Gate, Rejection},
    types::{
        BreakEvenRequest, BreakEvenResponse, CadenceRequest, CadenceResponse, HealthResponse,
        ScenarioResponse, SweepRequest, SweepResponse,
    },
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use reusegate_core::{
    ReferenceScenario, assess_refurbishment, compute_break_even, compute_cadence, sweep_range,
};

/// Count an unreadable body and hand axum's own rejection back.
fn reject_body(state: &AppState, rejection: JsonRejection) -> Response {
    tracing::debug!(status = %rejection.status(), "Rejected body: {}", rejection.body_text());
    state.metrics.record_rejected(Rejection::InvalidBody);
    rejection.into_response()
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// BREAK-EVEN HANDLER
// =============================================================================

/// Evaluate the break-even gate, optionally assessing a refurbishment cost.
pub async fn break_even_handler(
    State(state): State<AppState>,
    body: Result<Json<BreakEvenRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(&state, rejection),
    };
    let result = compute_break_even(&request.inputs);
    let refurbishment = request
        .c_ref
        .map(|c_ref| assess_refurbishment(&request.inputs, c_ref));

    tracing::debug!(
        c_ref_max = result.c_ref_max,
        has_headroom = result.has_headroom(),
        "Break-even evaluated"
    );
    state.metrics.record(Gate::BreakEven);

    (
        StatusCode::OK,
        Json(BreakEvenResponse::new(&result, refurbishment.as_ref())),
    )
        .into_response()
}

// =============================================================================
// CADENCE HANDLER
// =============================================================================

/// Evaluate the cadence gate.
pub async fn cadence_handler(
    State(state): State<AppState>,
    body: Result<Json<CadenceRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(&state, rejection),
    };
    let result = compute_cadence(&request);

    tracing::debug!(
        t_turn95_max = result.t_turn95_max,
        feasible = result.feasible,
        "Cadence evaluated"
    );
    state.metrics.record(Gate::Cadence);

    (StatusCode::OK, Json(CadenceResponse::from(&result))).into_response()
}

// =============================================================================
// SWEEP HANDLER
// =============================================================================

/// Sweep the ceiling over payload ratio.
pub async fn sweep_handler(
    State(state): State<AppState>,
    body: Result<Json<SweepRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(&state, rejection),
    };
    let range = match request.to_range() {
        Ok(r) => r,
        Err(e) => {
            state.metrics.record_rejected(Rejection::InvalidRange);
            return (
                StatusCode::BAD_REQUEST,
                Json(SweepResponse::error(format!("Invalid sweep: {}", e))),
            )
                .into_response();
        }
    };

    let points = sweep_range(&request.to_inputs(), &range);
    tracing::debug!(points = points.len(), "Sweep evaluated");
    state.metrics.record(Gate::Sweep);

    (StatusCode::OK, Json(SweepResponse::success(&points))).into_response()
}

// =============================================================================
// SCENARIO HANDLERS
// =============================================================================

/// Evaluate the scenario the server was started with.
pub async fn scenario_handler(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.scenario.evaluate();
    state.metrics.record(Gate::Scenario);
    (StatusCode::OK, Json(ScenarioResponse::from(&report)))
}

/// Evaluate a posted scenario.
pub async fn evaluate_scenario_handler(
    State(state): State<AppState>,
    body: Result<Json<ReferenceScenario>, JsonRejection>,
) -> Response {
    let Json(scenario) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(&state, rejection),
    };
    let report = scenario.evaluate();
    state.metrics.record(Gate::Scenario);
    (StatusCode::OK, Json(ScenarioResponse::from(&report))).into_response()
}

// =============================================================================
// METRICS HANDLER
// =============================================================================

/// Prometheus text exposition of evaluation counters.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
