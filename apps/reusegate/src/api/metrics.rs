//! # Evaluation Metrics
//!
//! Per-gate evaluation counters exposed in Prometheus text format on
//! `GET /metrics`.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Which model surface served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    BreakEven,
    Cadence,
    Sweep,
    Scenario,
}

impl Gate {
    fn label(self) -> &'static str {
        match self {
            Gate::BreakEven => "break_even",
            Gate::Cadence => "cadence",
            Gate::Sweep => "sweep",
            Gate::Scenario => "scenario",
        }
    }
}

/// Why a request was turned away before any model ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Missing or wrong Bearer key (401).
    Unauthorized,
    /// Global rate limit exceeded (429).
    RateLimited,
    /// Body was not valid JSON for the endpoint, or too large (4xx).
    InvalidBody,
    /// Sweep range failed validation (400).
    InvalidRange,
}

impl Rejection {
    const ALL: [Rejection; 4] = [
        Rejection::Unauthorized,
        Rejection::RateLimited,
        Rejection::InvalidBody,
        Rejection::InvalidRange,
    ];

    fn label(self) -> &'static str {
        match self {
            Rejection::Unauthorized => "unauthorized",
            Rejection::RateLimited => "rate_limited",
            Rejection::InvalidBody => "invalid_body",
            Rejection::InvalidRange => "invalid_range",
        }
    }

    fn index(self) -> usize {
        match self {
            Rejection::Unauthorized => 0,
            Rejection::RateLimited => 1,
            Rejection::InvalidBody => 2,
            Rejection::InvalidRange => 3,
        }
    }
}

/// Monotonic request counters.
#[derive(Debug, Default)]
pub struct EvaluationMetrics {
    break_even: AtomicU64,
    cadence: AtomicU64,
    sweep: AtomicU64,
    scenario: AtomicU64,
    rejected: [AtomicU64; 4],
}

impl EvaluationMetrics {
    fn counter(&self, gate: Gate) -> &AtomicU64 {
        match gate {
            Gate::BreakEven => &self.break_even,
            Gate::Cadence => &self.cadence,
            Gate::Sweep => &self.sweep,
            Gate::Scenario => &self.scenario,
        }
    }

    /// Count one successful evaluation.
    pub fn record(&self, gate: Gate) {
        self.counter(gate).fetch_add(1, Ordering::Relaxed);
    }

    /// Count one request rejected before evaluation.
    pub fn record_rejected(&self, reason: Rejection) {
        self.rejected[reason.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Rejections recorded for `reason` so far.
    pub fn rejected(&self, reason: Rejection) -> u64 {
        self.rejected[reason.index()].load(Ordering::Relaxed)
    }

    /// Evaluations served for `gate` so far.
    pub fn count(&self, gate: Gate) -> u64 {
        self.counter(gate).load(Ordering::Relaxed)
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# HELP reusegate_evaluations_total Model evaluations served, by gate.\n");
        out.push_str("# TYPE reusegate_evaluations_total counter\n");
        for gate in [Gate::BreakEven, Gate::Cadence, Gate::Sweep, Gate::Scenario] {
            let _ = writeln!(
                out,
                "reusegate_evaluations_total{{gate=\"{}\"}} {}",
                gate.label(),
                self.count(gate)
            );
        }
        out.push_str(
            "# HELP reusegate_rejected_total Requests rejected before evaluation, by reason.\n",
        );
        out.push_str("# TYPE reusegate_rejected_total counter\n");
        for reason in Rejection::ALL {
            let _ = writeln!(
                out,
                "reusegate_rejected_total{{reason=\"{}\"}} {}",
                reason.label(),
                self.rejected(reason)
            );
        }
        out
    }
}
