//! # Model Constants
//!
//! Fixed constants of the reuse model. These are compiled in and immutable at
//! runtime; callers that need other values pass them as inputs instead.

/// Recovery probability at or above which recovery is treated as certain.
///
/// The geometric sum `(1 - p^N) / (1 - p)` is `0/0` at `p = 1`. At or above this
/// threshold `N_eff` is returned as `N_design` exactly. The value has no
/// derivation; it is kept for output parity and may be tuned.
pub const CERTAIN_RECOVERY_THRESHOLD: f64 = 0.9999;

/// Days in a planning year for cadence and lead-time conversions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Currency inputs are in millions; cost-per-kg outputs are in whole units.
pub const UNITS_PER_MILLION: f64 = 1_000_000.0;

// =============================================================================
// SENSITIVITY SWEEP
// =============================================================================

/// Lowest payload ratio `P_r / P_e` in the default sweep.
pub const SWEEP_RATIO_START: f64 = 0.75;

/// Highest payload ratio in the default sweep (inclusive).
pub const SWEEP_RATIO_END: f64 = 1.00;

/// Step between sweep samples.
pub const SWEEP_RATIO_STEP: f64 = 0.05;

/// Decimal places kept on the ratio label of each sweep point.
pub const SWEEP_LABEL_DECIMALS: i32 = 2;

/// Slack used when counting samples so an inclusive end bound survives
/// floating-point drift (`(1.00 - 0.75) / 0.05` is not exactly 5).
pub const SWEEP_BOUND_TOLERANCE: f64 = 1e-9;

/// Maximum number of points a single sweep may produce.
///
/// All sweeps must be computationally bounded.
pub const MAX_SWEEP_POINTS: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_spans_six_points() {
        let count = ((SWEEP_RATIO_END - SWEEP_RATIO_START) / SWEEP_RATIO_STEP
            + SWEEP_BOUND_TOLERANCE)
            .floor() as usize
            + 1;
        assert_eq!(count, 6);
    }

    #[test]
    fn certain_recovery_threshold_below_one() {
        assert!(CERTAIN_RECOVERY_THRESHOLD < 1.0);
        assert!(CERTAIN_RECOVERY_THRESHOLD > 0.999);
    }
}
