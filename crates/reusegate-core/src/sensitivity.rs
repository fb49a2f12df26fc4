//! # Sensitivity Sweep
//!
//! The break-even ceiling sampled across payload ratio `P_r / P_e`, holding
//! `C_common`, `C1_mfg`, `p_rec` and `N_design` at a baseline.
//!
//! The default range is 0.75..=1.00 in steps of 0.05: six points. Points are
//! ascending by ratio and returned eagerly; calling again recomputes the same
//! series.
//!
//! Ratios are generated by index (`start + i * step`), not by repeated
//! addition, so drift does not accumulate along the series. The label is
//! rounded to two decimals; the ceiling uses the unrounded ratio.

use crate::break_even::{amortization_divisor, refurbishment_ceiling};
use crate::primitives::{
    MAX_SWEEP_POINTS, SWEEP_BOUND_TOLERANCE, SWEEP_LABEL_DECIMALS, SWEEP_RATIO_END,
    SWEEP_RATIO_START, SWEEP_RATIO_STEP,
};
use crate::reuse::compute_n_eff;
use crate::types::{BreakEvenInputs, ReuseError, SensitivityPoint};
use serde::Serialize;

// =============================================================================
// SWEEP RANGE
// =============================================================================

/// An inclusive, evenly stepped range of payload ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRange {
    start: f64,
    end: f64,
    step: f64,
}

impl SweepRange {
    /// Create a validated range.
    ///
    /// Fails when a bound is not finite, `step <= 0`, `start > end`, or the
    /// range would produce more than [`MAX_SWEEP_POINTS`] points.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, ReuseError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(ReuseError::InvalidParameter(
                "sweep bounds and step must be finite".to_string(),
            ));
        }
        if step <= 0.0 {
            return Err(ReuseError::InvalidParameter(format!(
                "sweep step must be positive, got {}",
                step
            )));
        }
        if start > end {
            return Err(ReuseError::InvalidParameter(format!(
                "sweep start {} is above end {}",
                start, end
            )));
        }

        let range = Self { start, end, step };
        let count = range.span_steps() + 1.0;
        if count > MAX_SWEEP_POINTS as f64 {
            return Err(ReuseError::InvalidParameter(format!(
                "sweep would produce {} points, maximum is {}",
                count, MAX_SWEEP_POINTS
            )));
        }
        Ok(range)
    }

    /// First ratio.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last ratio (inclusive bound).
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Distance between consecutive ratios.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of points this range produces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.span_steps() as usize + 1
    }

    /// Always false: a valid range contains at least its start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unrounded ratios in ascending order.
    pub fn ratios(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.start + i as f64 * self.step)
    }

    fn span_steps(&self) -> f64 {
        ((self.end - self.start) / self.step + SWEEP_BOUND_TOLERANCE).floor()
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: SWEEP_RATIO_START,
            end: SWEEP_RATIO_END,
            step: SWEEP_RATIO_STEP,
        }
    }
}

// =============================================================================
// SWEEP
// =============================================================================

/// Sweep the default payload-ratio range: six points, 0.75 to 1.00.
#[must_use]
pub fn sweep(base: &BreakEvenInputs) -> Vec<SensitivityPoint> {
    sweep_range(base, &SweepRange::default())
}

/// Sweep an arbitrary validated range.
///
/// `base.pe` and `base.pr` are ignored; the swept ratio replaces them.
#[must_use]
pub fn sweep_range(base: &BreakEvenInputs, range: &SweepRange) -> Vec<SensitivityPoint> {
    let base = base.sanitized();
    let n_eff_safe = amortization_divisor(compute_n_eff(base.p_rec, base.n_design));

    range
        .ratios()
        .map(|ratio| SensitivityPoint {
            ratio: round_label(ratio),
            c_ref_max: refurbishment_ceiling(base.c_common, base.c1_mfg, ratio, n_eff_safe),
        })
        .collect()
}

fn round_label(ratio: f64) -> f64 {
    let scale = 10_f64.powi(SWEEP_LABEL_DECIMALS);
    (ratio * scale).round() / scale
}

// =============================================================================
// TESTS
// =============================================================================
