//! Integration tests for the ReuseGate HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.
//! Settings are passed explicitly, so no test touches the environment.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use reusegate::api::{
    AppState, BreakEvenResponse, CadenceResponse, EvaluationMetrics, HealthResponse, Rejection,
    ScenarioResponse, ServerSettings, SweepResponse, create_router,
};
use reusegate_core::ReferenceScenario;
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a test server and keep a handle on its counters.
fn create_server_with(
    scenario: ReferenceScenario,
    settings: &ServerSettings,
) -> (TestServer, Arc<EvaluationMetrics>) {
    let state = AppState::new(scenario);
    let metrics = Arc::clone(&state.metrics);
    (TestServer::new(create_router(state, settings)).unwrap(), metrics)
}

/// Server for the reference scenario requiring `api_key`.
fn create_keyed_server(api_key: &str) -> (TestServer, Arc<EvaluationMetrics>) {
    let settings = ServerSettings {
        api_key: Some(api_key.to_string()),
        ..ServerSettings::open()
    };
    create_server_with(ReferenceScenario::default(), &settings)
}

/// Create a test server for the reference scenario without authentication.
fn create_test_server() -> (TestServer, Arc<EvaluationMetrics>) {
    create_server_with(ReferenceScenario::default(), &ServerSettings::open())
}

fn bearer(key: &str) -> HeaderValue {
    format!("Bearer {}", key).parse().unwrap()
}

fn reference_break_even() -> serde_json::Value {
    json!({
        "pe": 16000.0,
        "pr": 14000.0,
        "c_common": 20.0,
        "c1_mfg": 20.0,
        "p_rec": 0.95,
        "n_design": 10
    })
}

fn reference_cadence() -> serde_json::Value {
    json!({
        "rate": 20.0,
        "boosters": 4.0,
        "d_down": 0.1,
        "u_target": 0.7,
        "l_replace": 180.0,
        "p_rec": 0.95,
        "t_turn95": 27.0
    })
}

fn approx(a: Option<f64>, b: f64, tol: f64) -> bool {
    a.is_some_and(|v| (v - b).abs() <= tol)
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _metrics) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// BREAK-EVEN ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_break_even_reference() {
    let (server, _metrics) = create_test_server();

    let response = server.post("/break-even").json(&reference_break_even()).await;

    response.assert_status_ok();
    let body: BreakEvenResponse = response.json();
    assert!(approx(body.n_eff, 8.025_261, 1e-6));
    assert!(approx(body.c_ref_max, 12.507_869, 1e-6));
    assert!(approx(body.cost_per_kg_e, 2_500.0, 1e-9));
    assert!(body.has_headroom);
    assert!(body.refurbishment.is_none());
}

#[tokio::test]
async fn test_break_even_with_refurbishment() {
    let (server, _metrics) = create_test_server();

    let mut request = reference_break_even();
    request["c_ref"] = json!(6.0);
    let response = server.post("/break-even").json(&request).await;

    response.assert_status_ok();
    let body: BreakEvenResponse = response.json();
    let refurb = body.refurbishment.unwrap();
    assert!(approx(refurb.c_r, 28.492_131, 1e-6));
    assert!(refurb.within_ceiling);
}

#[tokio::test]
async fn test_break_even_zero_payload_is_null() {
    let (server, _metrics) = create_test_server();

    let mut request = reference_break_even();
    request["pe"] = json!(0.0);
    let response = server.post("/break-even").json(&request).await;

    response.assert_status_ok();
    let raw: serde_json::Value = response.json();
    assert!(raw["cost_per_kg_e"].is_null());
    assert!(raw["c_ref_max"].is_null());
    assert_eq!(raw["has_headroom"], json!(true));
}

#[tokio::test]
async fn test_break_even_negative_ceiling_kept() {
    let (server, _metrics) = create_test_server();

    let mut request = reference_break_even();
    request["pr"] = json!(8000.0);
    let response = server.post("/break-even").json(&request).await;

    let body: BreakEvenResponse = response.json();
    assert!(body.c_ref_max.unwrap() < 0.0);
    assert!(!body.has_headroom);
}

#[tokio::test]
async fn test_break_even_missing_field_rejected() {
    let (server, _metrics) = create_test_server();

    let response = server
        .post("/break-even")
        .json(&json!({ "pe": 16000.0 }))
        .await;

    assert!(response.status_code().is_client_error());
}

// =============================================================================
// CADENCE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_cadence_reference_infeasible() {
    let (server, _metrics) = create_test_server();

    let response = server.post("/cadence").json(&reference_cadence()).await;

    response.assert_status_ok();
    let body: CadenceResponse = response.json();
    assert!(approx(body.spares, 1.493_151, 1e-6));
    assert!(approx(body.t_turn95_max, 26.915, 1e-9));
    assert!(!body.feasible);
}

#[tokio::test]
async fn test_cadence_zero_rate() {
    let (server, _metrics) = create_test_server();

    let mut request = reference_cadence();
    request["rate"] = json!(0.0);
    request["t_turn95"] = json!(0.0);
    let response = server.post("/cadence").json(&request).await;

    let body: CadenceResponse = response.json();
    assert_eq!(body.t_turn95_max, Some(0.0));
    assert!(body.feasible);
}

// =============================================================================
// SWEEP ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_sweep_default_range() {
    let (server, _metrics) = create_test_server();

    let response = server
        .post("/sweep")
        .json(&json!({ "c_common": 20.0, "c1_mfg": 20.0, "p_rec": 0.95, "n_design": 10 }))
        .await;

    response.assert_status_ok();
    let body: SweepResponse = response.json();
    assert!(body.success);
    let ratios: Vec<f64> = body.points.iter().map(|p| p.ratio).collect();
    assert_eq!(ratios, vec![0.75, 0.8, 0.85, 0.9, 0.95, 1.0]);
    let chart = body.chart.unwrap();
    assert_eq!(chart.polyline.split(' ').count(), 6);
}

#[tokio::test]
async fn test_sweep_custom_range() {
    let (server, _metrics) = create_test_server();

    let response = server
        .post("/sweep")
        .json(&json!({
            "c_common": 20.0, "c1_mfg": 20.0, "p_rec": 0.95, "n_design": 10,
            "range": { "start": 0.5, "end": 1.0, "step": 0.1 }
        }))
        .await;

    response.assert_status_ok();
    let body: SweepResponse = response.json();
    assert_eq!(body.points.len(), 6);
    assert_eq!(body.points[0].ratio, 0.5);
}

#[tokio::test]
async fn test_sweep_invalid_range_rejected() {
    let (server, metrics) = create_test_server();

    let response = server
        .post("/sweep")
        .json(&json!({
            "c_common": 20.0, "c1_mfg": 20.0, "p_rec": 0.95, "n_design": 10,
            "range": { "start": 0.75, "end": 1.0, "step": 0.0 }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: SweepResponse = response.json();
    assert!(!body.success);
    assert!(body.error.unwrap().contains("step"));
    assert_eq!(metrics.rejected(Rejection::InvalidRange), 1);
    assert_eq!(metrics.count(reusegate::api::Gate::Sweep), 0);
}

// =============================================================================
// SCENARIO ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_scenario_reference() {
    let (server, _metrics) = create_test_server();

    let response = server.get("/scenario").await;

    response.assert_status_ok();
    let body: ScenarioResponse = response.json();
    assert!(body.cost_gate);
    assert!(!body.cadence_gate);
    assert!(!body.passed);
    assert_eq!(body.sweep.points.len(), 6);
}

#[tokio::test]
async fn test_scenario_uses_server_parameters() {
    let mut scenario = ReferenceScenario::default();
    scenario.cadence.t_turn95 = 20.0;
    let (server, _metrics) = create_server_with(scenario, &ServerSettings::open());

    let body: ScenarioResponse = server.get("/scenario").await.json();
    assert!(body.passed);
}

#[tokio::test]
async fn test_scenario_post() {
    let (server, _metrics) = create_test_server();

    let response = server
        .post("/scenario")
        .json(&json!({
            "break_even": reference_break_even(),
            "cadence": reference_cadence(),
            "c_ref_example": 20.0
        }))
        .await;

    response.assert_status_ok();
    let body: ScenarioResponse = response.json();
    assert!(!body.cost_gate);
}

// =============================================================================
// METRICS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_metrics_count_evaluations() {
    let (server, _metrics) = create_test_server();

    server.post("/cadence").json(&reference_cadence()).await;
    server.post("/cadence").json(&reference_cadence()).await;
    server.get("/scenario").await;

    let response = server.get("/metrics").await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("reusegate_evaluations_total{gate=\"cadence\"} 2"));
    assert!(body.contains("reusegate_evaluations_total{gate=\"scenario\"} 1"));
    assert!(body.contains("reusegate_evaluations_total{gate=\"break_even\"} 0"));
}

// =============================================================================
// AUTHENTICATION TESTS
// =============================================================================

#[tokio::test]
async fn test_auth_valid_bearer_token() {
    let api_key = "test-secret-key-12345";
    let (server, _metrics) = create_keyed_server(api_key);

    let response = server
        .get("/scenario")
        .add_header(header::AUTHORIZATION, bearer(api_key))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_auth_missing_header_rejected() {
    let (server, _metrics) = create_keyed_server("correct-key");

    let response = server.post("/cadence").json(&reference_cadence()).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_invalid_token_rejected() {
    let (server, _metrics) = create_keyed_server("correct-key");

    let response = server
        .get("/scenario")
        .add_header(header::AUTHORIZATION, bearer("wrong-key"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_health_always_open() {
    let (server, _metrics) = create_keyed_server("correct-key");

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_auth_bare_key_rejected() {
    let (server, _metrics) = create_keyed_server("correct-key");

    let response = server
        .get("/scenario")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("correct-key"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// =============================================================================
// REJECTION ACCOUNTING TESTS
// =============================================================================

#[tokio::test]
async fn test_wrong_token_shows_on_metrics() {
    let (server, _metrics) = create_keyed_server("correct-key");

    server
        .get("/scenario")
        .add_header(header::AUTHORIZATION, bearer("wrong-key"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server.post("/cadence").json(&reference_cadence()).await;

    let text = server
        .get("/metrics")
        .add_header(header::AUTHORIZATION, bearer("correct-key"))
        .await
        .text();
    assert!(text.contains("reusegate_rejected_total{reason=\"unauthorized\"} 2"));
    assert!(text.contains("reusegate_evaluations_total{gate=\"scenario\"} 0"));
}

#[tokio::test]
async fn test_bad_body_shows_on_metrics() {
    let (server, _metrics) = create_test_server();

    let before = server.get("/metrics").await.text();
    assert!(before.contains("reusegate_rejected_total{reason=\"invalid_body\"} 0"));

    let response = server
        .post("/break-even")
        .json(&json!({ "pe": 16000.0 }))
        .await;
    assert!(response.status_code().is_client_error());
    let response = server
        .post("/cadence")
        .content_type("application/json")
        .text("{not json")
        .await;
    assert!(response.status_code().is_client_error());

    let after = server.get("/metrics").await.text();
    assert!(after.contains("reusegate_rejected_total{reason=\"invalid_body\"} 2"));
    assert!(after.contains("reusegate_evaluations_total{gate=\"break_even\"} 0"));
}

#[tokio::test]
async fn test_rate_limited_request_is_counted() {
    let settings = ServerSettings {
        rate_limit: 1,
        ..ServerSettings::open()
    };
    let (server, metrics) = create_server_with(ReferenceScenario::default(), &settings);

    server.get("/health").await.assert_status_ok();
    server
        .get("/health")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    assert_eq!(metrics.rejected(Rejection::RateLimited), 1);
}

// =============================================================================
// CORS TESTS
// =============================================================================

#[tokio::test]
async fn test_cors_headers_only_when_configured() {
    let (server, _metrics) = create_test_server();
    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://a.example"))
        .await;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );

    let settings = ServerSettings {
        cors_origins: Some("http://a.example".to_string()),
        ..ServerSettings::open()
    };
    let (server, _metrics) = create_server_with(ReferenceScenario::default(), &settings);
    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://a.example"))
        .await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://a.example"))
    );
}
