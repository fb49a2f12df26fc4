//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! JSON has no NaN or Infinity. Every model output that can be non-finite is
//! an `Option<f64>` here and serializes as `null` when unavailable.

use reusegate_core::{
    BreakEvenInputs, BreakEvenResult, CadenceInputs, CadenceResult, ChartFrame, GateVerdict,
    RefurbAssessment, ReuseError, ScenarioReport, SensitivityPoint, SweepRange,
};
use serde::{Deserialize, Serialize};

/// `Some(value)` when finite, `None` otherwise.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// BREAK-EVEN REQUEST/RESPONSE
// =============================================================================

/// Break-even request: the gate inputs plus an optional refurbishment cost
/// to assess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenRequest {
    #[serde(flatten)]
    pub inputs: BreakEvenInputs,
    #[serde(default)]
    pub c_ref: Option<f64>,
}

/// Refurbishment assessment JSON representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefurbJson {
    pub c_ref: Option<f64>,
    pub c_r: Option<f64>,
    pub cost_per_kg_r: Option<f64>,
    pub headroom: Option<f64>,
    pub within_ceiling: bool,
}

impl From<&RefurbAssessment> for RefurbJson {
    fn from(a: &RefurbAssessment) -> Self {
        Self {
            c_ref: finite(a.c_ref),
            c_r: finite(a.c_r),
            cost_per_kg_r: finite(a.cost_per_kg_r),
            headroom: finite(a.headroom),
            within_ceiling: a.within_ceiling,
        }
    }
}

/// Break-even response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenResponse {
    pub n_eff: Option<f64>,
    pub c_e: Option<f64>,
    pub c_ref_max: Option<f64>,
    pub c_r_at_threshold: Option<f64>,
    pub cost_per_kg_e: Option<f64>,
    pub cost_per_kg_r: Option<f64>,
    /// A positive refurbishment budget exists.
    pub has_headroom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub refurbishment: Option<RefurbJson>,
}

impl BreakEvenResponse {
    pub fn new(result: &BreakEvenResult, refurbishment: Option<&RefurbAssessment>) -> Self {
        Self {
            n_eff: finite(result.n_eff),
            c_e: finite(result.c_e),
            c_ref_max: finite(result.c_ref_max),
            c_r_at_threshold: finite(result.c_r_at_threshold),
            cost_per_kg_e: finite(result.cost_per_kg_e),
            cost_per_kg_r: finite(result.cost_per_kg_r),
            has_headroom: result.has_headroom(),
            refurbishment: refurbishment.map(RefurbJson::from),
        }
    }
}

// =============================================================================
// CADENCE RESPONSE
// =============================================================================

/// Cadence request body.
pub type CadenceRequest = CadenceInputs;

/// Cadence response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceResponse {
    pub spares: Option<f64>,
    pub b_eff: Option<f64>,
    pub t_turn95_max: Option<f64>,
    pub feasible: bool,
}

impl From<&CadenceResult> for CadenceResponse {
    fn from(r: &CadenceResult) -> Self {
        Self {
            spares: finite(r.spares),
            b_eff: finite(r.b_eff),
            t_turn95_max: finite(r.t_turn95_max),
            feasible: r.feasible,
        }
    }
}

// =============================================================================
// SWEEP REQUEST/RESPONSE
// =============================================================================

/// Optional explicit sweep range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeJson {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

/// Sweep request.
///
/// Payload masses are not part of the request: the swept ratio replaces
/// `P_r / P_e`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequest {
    pub c_common: f64,
    pub c1_mfg: f64,
    pub p_rec: f64,
    pub n_design: i64,
    #[serde(default)]
    pub range: Option<RangeJson>,
}

impl SweepRequest {
    /// Baseline inputs for the sweep.
    pub fn to_inputs(&self) -> BreakEvenInputs {
        let reference = BreakEvenInputs::reference();
        BreakEvenInputs::new(
            reference.pe,
            reference.pr,
            self.c_common,
            self.c1_mfg,
            self.p_rec,
            self.n_design,
        )
    }

    /// Validated range, defaulting to 0.75..=1.00 step 0.05.
    pub fn to_range(&self) -> Result<SweepRange, ReuseError> {
        match self.range {
            Some(r) => SweepRange::new(r.start, r.end, r.step),
            None => Ok(SweepRange::default()),
        }
    }
}

/// Sweep point JSON representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointJson {
    pub ratio: f64,
    pub c_ref_max: Option<f64>,
}

impl From<&SensitivityPoint> for PointJson {
    fn from(p: &SensitivityPoint) -> Self {
        Self {
            ratio: p.ratio,
            c_ref_max: finite(p.c_ref_max),
        }
    }
}

/// Chart frame JSON representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartJson {
    pub width: f64,
    pub height: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub zero_y: Option<f64>,
    /// SVG polyline points attribute.
    pub polyline: String,
}

impl From<&ChartFrame> for ChartJson {
    fn from(frame: &ChartFrame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            min: finite(frame.min),
            max: finite(frame.max),
            zero_y: finite(frame.zero_y),
            polyline: frame.polyline(),
        }
    }
}

/// Sweep response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    pub success: bool,
    pub points: Vec<PointJson>,
    pub chart: Option<ChartJson>,
    pub error: Option<String>,
}

impl SweepResponse {
    pub fn success(points: &[SensitivityPoint]) -> Self {
        let frame = ChartFrame::fit(points);
        Self {
            success: true,
            points: points.iter().map(PointJson::from).collect(),
            chart: Some(ChartJson::from(&frame)),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            points: Vec::new(),
            chart: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// SCENARIO RESPONSE
// =============================================================================

/// Full scenario evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse {
    pub break_even: BreakEvenResponse,
    pub cadence: CadenceResponse,
    pub sweep: SweepResponse,
    pub cost_gate: bool,
    pub cadence_gate: bool,
    pub passed: bool,
}

impl From<&ScenarioReport> for ScenarioResponse {
    fn from(report: &ScenarioReport) -> Self {
        let GateVerdict {
            cost_gate,
            cadence_gate,
        } = report.verdict;
        Self {
            break_even: BreakEvenResponse::new(&report.break_even, Some(&report.refurbishment)),
            cadence: CadenceResponse::from(&report.cadence),
            sweep: SweepResponse::success(&report.sensitivity),
            cost_gate,
            cadence_gate,
            passed: report.verdict.passed(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use reusegate_core::compute_break_even;

    #[test]
    fn non_finite_serializes_as_null() {
        let inputs = BreakEvenInputs::new(0.0, 14_000.0, 20.0, 20.0, 0.95, 10);
        let response = BreakEvenResponse::new(&compute_break_even(&inputs), None);
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json["cost_per_kg_e"].is_null());
        assert!(json["c_ref_max"].is_null());
        assert!(json.get("refurbishment").is_none());
    }

    #[test]
    fn break_even_request_is_flat() {
        let request: BreakEvenRequest = serde_json::from_str(
            r#"{"pe":16000,"pr":14000,"c_common":20,"c1_mfg":20,"p_rec":0.95,"n_design":10,"c_ref":6}"#,
        )
        .expect("parse");
        assert_eq!(request.inputs, BreakEvenInputs::reference());
        assert_eq!(request.c_ref, Some(6.0));
    }

    #[test]
    fn sweep_request_default_range() {
        let request: SweepRequest =
            serde_json::from_str(r#"{"c_common":20,"c1_mfg":20,"p_rec":0.95,"n_design":10}"#)
                .expect("parse");
        let range = request.to_range().expect("default range");
        assert_eq!(range.len(), 6);
    }

    #[test]
    fn sweep_request_bad_range() {
        let request = SweepRequest {
            c_common: 20.0,
            c1_mfg: 20.0,
            p_rec: 0.95,
            n_design: 10,
            range: Some(RangeJson {
                start: 1.0,
                end: 0.5,
                step: 0.05,
            }),
        };
        assert!(request.to_range().is_err());
    }
}
