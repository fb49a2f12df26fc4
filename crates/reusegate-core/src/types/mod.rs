//! # Core Type Definitions
//!
//! This module contains the value records of the reuse model:
//! - Break-even inputs and results (`BreakEvenInputs`, `BreakEvenResult`,
//!   `RefurbAssessment`)
//! - Cadence inputs and results (`CadenceInputs`, `CadenceResult`)
//! - Sweep output (`SensitivityPoint`)
//! - Error types (`ReuseError`)
//!
//! ## Value Semantics
//!
//! All records are `Copy` and immutable once built. A parameter change
//! produces a new result record; nothing is updated in place.
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Payload mass | kg |
//! | Costs | millions of currency units |
//! | Cost per kg | currency units per kg |
//! | Flight rate | flights per year |
//! | Lead time, turnaround | days |
//! | Probabilities, fractions | [0, 1] |

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// BREAK-EVEN
// =============================================================================

/// Inputs to the cost-per-kilogram break-even gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInputs {
    /// Payload mass to target orbit when the first stage is expended (kg).
    pub pe: f64,
    /// Payload mass to target orbit when the first stage is recovered (kg).
    pub pr: f64,
    /// Cost common to both paths per flight: upper stage, fairing, ops (M).
    pub c_common: f64,
    /// First-stage manufacturing cost (M).
    pub c1_mfg: f64,
    /// Per-flight recovery probability.
    pub p_rec: f64,
    /// Design reuse cap: flights a stage is certified for.
    pub n_design: i64,
}

impl BreakEvenInputs {
    /// Create a new set of break-even inputs.
    #[must_use]
    pub const fn new(
        pe: f64,
        pr: f64,
        c_common: f64,
        c1_mfg: f64,
        p_rec: f64,
        n_design: i64,
    ) -> Self {
        Self {
            pe,
            pr,
            c_common,
            c1_mfg,
            p_rec,
            n_design,
        }
    }

    /// Reference vehicle used by the worked example and the sweep.
    #[must_use]
    pub const fn reference() -> Self {
        Self::new(16_000.0, 14_000.0, 20.0, 20.0, 0.95, 10)
    }

    /// Payload ratio `P_r / P_e`.
    #[must_use]
    pub fn payload_ratio(&self) -> f64 {
        self.pr / self.pe
    }
}

impl Default for BreakEvenInputs {
    fn default() -> Self {
        Self::reference()
    }
}

/// Output of the break-even gate.
///
/// `c_ref_max` may be negative: reuse cannot compete at any positive
/// refurbishment cost. Division by a zero payload yields non-finite
/// cost-per-kg figures which are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Expected effective flights per stage.
    pub n_eff: f64,
    /// Total expendable-path cost per flight (M).
    pub c_e: f64,
    /// Refurbishment + recovery ceiling per flight (M).
    pub c_ref_max: f64,
    /// Reusable-path cost per flight exactly at the ceiling (M).
    pub c_r_at_threshold: f64,
    /// Expendable cost per kilogram.
    pub cost_per_kg_e: f64,
    /// Reusable cost per kilogram at the ceiling.
    pub cost_per_kg_r: f64,
}

impl BreakEvenResult {
    /// Whether any positive refurbishment budget exists.
    #[must_use]
    pub fn has_headroom(&self) -> bool {
        self.c_ref_max > 0.0
    }
}

/// A concrete refurbishment cost evaluated against the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefurbAssessment {
    /// The refurbishment + recovery cost that was assessed (M).
    pub c_ref: f64,
    /// Reusable-path cost per flight at `c_ref` (M).
    pub c_r: f64,
    /// Expendable cost per kilogram.
    pub cost_per_kg_e: f64,
    /// Reusable cost per kilogram at `c_ref`.
    pub cost_per_kg_r: f64,
    /// The break-even ceiling for the same inputs (M).
    pub c_ref_max: f64,
    /// `c_ref_max - c_ref`; negative means over budget.
    pub headroom: f64,
    /// `c_ref <= c_ref_max`, exact.
    pub within_ceiling: bool,
}

// =============================================================================
// CADENCE
// =============================================================================

/// Inputs to the launch-cadence gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceInputs {
    /// Required annual flight rate.
    pub rate: f64,
    /// Active booster fleet size.
    pub boosters: f64,
    /// Fraction of time a booster is down for scheduled/unscheduled work.
    pub d_down: f64,
    /// Target utilization of available booster-days.
    pub u_target: f64,
    /// Lead time to build a replacement booster (days).
    pub l_replace: f64,
    /// Per-flight recovery probability.
    pub p_rec: f64,
    /// Observed 95th-percentile turnaround (days).
    pub t_turn95: f64,
}

impl CadenceInputs {
    /// Create a new set of cadence inputs.
    #[must_use]
    pub const fn new(
        rate: f64,
        boosters: f64,
        d_down: f64,
        u_target: f64,
        l_replace: f64,
        p_rec: f64,
        t_turn95: f64,
    ) -> Self {
        Self {
            rate,
            boosters,
            d_down,
            u_target,
            l_replace,
            p_rec,
            t_turn95,
        }
    }

    /// Reference fleet used by the worked example.
    #[must_use]
    pub const fn reference() -> Self {
        Self::new(20.0, 4.0, 0.1, 0.7, 180.0, 0.95, 27.0)
    }
}

impl Default for CadenceInputs {
    fn default() -> Self {
        Self::reference()
    }
}

/// Output of the cadence gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceResult {
    /// Spares requirement `S`; may exceed the fleet size.
    pub spares: f64,
    /// Effective capacity `B_eff`; negative means the fleet cannot sustain
    /// operations at any turnaround.
    pub b_eff: f64,
    /// Maximum tolerable 95th-percentile turnaround (days).
    pub t_turn95_max: f64,
    /// `t_turn95 <= t_turn95_max`.
    pub feasible: bool,
}

// =============================================================================
// SENSITIVITY
// =============================================================================

/// One sample of the refurbishment ceiling against payload ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Payload ratio label, rounded to two decimals.
    pub ratio: f64,
    /// Ceiling computed with the unrounded ratio (M).
    pub c_ref_max: f64,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around the ReuseGate model.
///
/// The formulas themselves never fail. This type covers sweep range
/// construction and the app boundary (parameter files, I/O).
#[derive(Debug, Error)]
pub enum ReuseError {
    /// A parameter is outside the range an operation can work with.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A parameter file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_inputs_match_worked_example() {
        let inputs = BreakEvenInputs::default();
        assert_eq!(inputs.pe, 16_000.0);
        assert_eq!(inputs.pr, 14_000.0);
        assert_eq!(inputs.n_design, 10);
        assert_eq!(inputs.payload_ratio(), 0.875);

        let cadence = CadenceInputs::default();
        assert_eq!(cadence.rate, 20.0);
        assert_eq!(cadence.t_turn95, 27.0);
    }

    #[test]
    fn zero_expendable_payload_ratio_is_infinite() {
        let inputs = BreakEvenInputs::new(0.0, 14_000.0, 20.0, 20.0, 0.95, 10);
        assert!(inputs.payload_ratio().is_infinite());
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ReuseError::InvalidParameter("step must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: step must be positive");
    }
}
