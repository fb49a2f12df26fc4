//! # Break-Even Gate
//!
//! Maximum refurbishment-plus-recovery cost per flight at which a reusable
//! first stage matches the expendable stage on cost per kilogram.
//!
//! ## Model
//!
//! ```text
//! C_e        = C_common + C1_mfg
//! C_ref_max  = C_e * (P_r / P_e) - C_common - C1_mfg / N_eff_safe
//! C_r        = C_common + C1_mfg / N_eff_safe + C_ref
//! $/kg       = C * 1e6 / P
//! ```
//!
//! `N_eff_safe` falls back to a single flight when `N_eff` is not positive:
//! the stage then amortizes over one flight, the conservative worst case.
//!
//! A negative `C_ref_max` is the verdict "reuse cannot compete" and is
//! returned as-is. A zero payload produces non-finite cost-per-kg figures,
//! which are also returned as-is.

use crate::primitives::UNITS_PER_MILLION;
use crate::reuse::compute_n_eff;
use crate::types::{BreakEvenInputs, BreakEvenResult, RefurbAssessment};

// =============================================================================
// BUILDING BLOCKS
// =============================================================================

/// Number of flights manufacturing cost is amortized over.
///
/// Returns `n_eff` when positive, else 1 (NaN also falls back to 1).
#[must_use]
pub fn amortization_divisor(n_eff: f64) -> f64 {
    if n_eff > 0.0 { n_eff } else { 1.0 }
}

/// Cost per kilogram from a total in millions and a payload in kilograms.
#[must_use]
pub fn cost_per_kg(total_millions: f64, payload_kg: f64) -> f64 {
    (total_millions * UNITS_PER_MILLION) / payload_kg
}

/// Refurbishment ceiling for an explicit payload ratio.
///
/// Shared by the gate and the sensitivity sweep so both use the same
/// expression, term for term.
#[must_use]
pub(crate) fn refurbishment_ceiling(
    c_common: f64,
    c1_mfg: f64,
    payload_ratio: f64,
    n_eff_safe: f64,
) -> f64 {
    let c_e = c_common + c1_mfg;
    c_e * payload_ratio - c_common - c1_mfg / n_eff_safe
}

// =============================================================================
// GATE
// =============================================================================

/// Evaluate the break-even gate.
#[must_use]
pub fn compute_break_even(inputs: &BreakEvenInputs) -> BreakEvenResult {
    let inputs = inputs.sanitized();

    let n_eff = compute_n_eff(inputs.p_rec, inputs.n_design);
    let n_eff_safe = amortization_divisor(n_eff);
    let c_e = inputs.c_common + inputs.c1_mfg;

    let c_ref_max = refurbishment_ceiling(
        inputs.c_common,
        inputs.c1_mfg,
        inputs.pr / inputs.pe,
        n_eff_safe,
    );
    let c_r_at_threshold = inputs.c_common + inputs.c1_mfg / n_eff_safe + c_ref_max;

    BreakEvenResult {
        n_eff,
        c_e,
        c_ref_max,
        c_r_at_threshold,
        cost_per_kg_e: cost_per_kg(c_e, inputs.pe),
        cost_per_kg_r: cost_per_kg(c_r_at_threshold, inputs.pr),
    }
}

/// Assess a concrete refurbishment-plus-recovery cost `c_ref` (M) against
/// the ceiling for the same inputs.
#[must_use]
pub fn assess_refurbishment(inputs: &BreakEvenInputs, c_ref: f64) -> RefurbAssessment {
    let gate = compute_break_even(inputs);
    let inputs = inputs.sanitized();

    let n_eff_safe = amortization_divisor(gate.n_eff);
    let c_r = inputs.c_common + inputs.c1_mfg / n_eff_safe + c_ref;

    RefurbAssessment {
        c_ref,
        c_r,
        cost_per_kg_e: gate.cost_per_kg_e,
        cost_per_kg_r: cost_per_kg(c_r, inputs.pr),
        c_ref_max: gate.c_ref_max,
        headroom: gate.c_ref_max - c_ref,
        within_ceiling: c_ref <= gate.c_ref_max,
    }
}

// =============================================================================
// TESTS
// =============================================================================
