//! # reusegate-core
//!
//! The closed-form reuse economics model for ReuseGate - THE MODEL.
//!
//! This crate answers two independent questions about a reusable first stage:
//!
//! - **Cost gate**: what is the most a stage may cost to refurbish and recover
//!   per flight before reuse loses to an expendable stage on cost per kilogram?
//! - **Cadence gate**: can the booster fleet sustain the required flight rate
//!   given the observed 95th-percentile turnaround?
//!
//! plus a sensitivity sweep of the refurbishment ceiling over payload ratio.
//!
//! ## Architectural Constraints
//!
//! - Pure functions only: no I/O, no async, no hidden state
//! - Inputs are plain value records, clamped at the boundary (`validation`)
//! - Formulas are total; undefined results surface as NaN/Infinity
//! - Negative ceilings and capacities are verdicts, never clamped to zero

// =============================================================================
// MODULES
// =============================================================================

pub mod break_even;
pub mod cadence;
pub mod chart;
pub mod primitives;
pub mod reuse;
pub mod scenario;
pub mod sensitivity;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    BreakEvenInputs, BreakEvenResult, CadenceInputs, CadenceResult, RefurbAssessment,
    ReuseError, SensitivityPoint,
};

// =============================================================================
// RE-EXPORTS: Model
// =============================================================================

pub use break_even::{assess_refurbishment, compute_break_even, cost_per_kg};
pub use cadence::compute_cadence;
pub use chart::ChartFrame;
pub use reuse::compute_n_eff;
pub use scenario::{GateVerdict, ReferenceScenario, ScenarioReport};
pub use sensitivity::{SweepRange, sweep, sweep_range};
pub use validation::clamp_unit;
