//! # Reference Scenario
//!
//! Evaluates both gates and the sweep for one parameter set in a single
//! pass. The default scenario is the worked example: a 16 t expendable /
//! 14 t reusable vehicle flying 20 times a year from a fleet of four.

use crate::break_even::{assess_refurbishment, compute_break_even};
use crate::cadence::compute_cadence;
use crate::chart::ChartFrame;
use crate::sensitivity::sweep;
use crate::types::{
    BreakEvenInputs, BreakEvenResult, CadenceInputs, CadenceResult, RefurbAssessment,
    SensitivityPoint,
};
use serde::{Deserialize, Serialize};

/// Refurbishment + recovery cost assessed by the worked example (M).
pub const REFERENCE_C_REF: f64 = 6.0;

/// A complete parameter set for both gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceScenario {
    pub break_even: BreakEvenInputs,
    pub cadence: CadenceInputs,
    /// Refurbishment + recovery cost per flight to assess (M).
    pub c_ref_example: f64,
}

impl Default for ReferenceScenario {
    fn default() -> Self {
        Self {
            break_even: BreakEvenInputs::reference(),
            cadence: CadenceInputs::reference(),
            c_ref_example: REFERENCE_C_REF,
        }
    }
}

/// Pass/fail of each gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateVerdict {
    /// The assessed refurbishment cost fits under the ceiling.
    pub cost_gate: bool,
    /// The observed tail turnaround fits the cadence budget.
    pub cadence_gate: bool,
}

impl GateVerdict {
    /// Both gates pass.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.cost_gate && self.cadence_gate
    }
}

/// Everything computed for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub break_even: BreakEvenResult,
    pub refurbishment: RefurbAssessment,
    pub cadence: CadenceResult,
    pub sensitivity: Vec<SensitivityPoint>,
    pub chart: ChartFrame,
    pub verdict: GateVerdict,
}

impl ReferenceScenario {
    /// Evaluate both gates, the refurbishment assessment and the sweep.
    #[must_use]
    pub fn evaluate(&self) -> ScenarioReport {
        let break_even = compute_break_even(&self.break_even);
        let refurbishment = assess_refurbishment(&self.break_even, self.c_ref_example);
        let cadence = compute_cadence(&self.cadence);
        let sensitivity = sweep(&self.break_even);
        let chart = ChartFrame::fit(&sensitivity);

        let verdict = GateVerdict {
            cost_gate: refurbishment.within_ceiling,
            cadence_gate: cadence.feasible,
        };

        ScenarioReport {
            break_even,
            refurbishment,
            cadence,
            sensitivity,
            chart,
            verdict,
        }
    }
}
