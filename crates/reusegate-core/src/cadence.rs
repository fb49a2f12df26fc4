//! # Cadence Gate
//!
//! Whether a booster fleet can sustain a required annual flight rate given
//! the observed 95th-percentile turnaround.
//!
//! ## Model
//!
//! ```text
//! S            = 1 + R * (1 - p_rec) * (L_replace / 365)
//! B_eff        = B * (1 - d_down) - S
//! t_turn95_max = 365 * u_target * B_eff / R      (0 when R = 0)
//! feasible     = t_turn95 <= t_turn95_max
//! ```
//!
//! `S` is one booster in rotation plus the boosters expected to be lost
//! during one replacement lead-time window. `t_turn95_max` is the per-flight
//! share of available booster-days; comparing it with the tail turnaround
//! rather than the mean means slow refurbishments must also fit.

use crate::primitives::DAYS_PER_YEAR;
use crate::types::{CadenceInputs, CadenceResult};

/// Spares requirement `S`.
#[must_use]
pub fn spares_requirement(rate: f64, p_rec: f64, l_replace: f64) -> f64 {
    1.0 + rate * (1.0 - p_rec) * (l_replace / DAYS_PER_YEAR)
}

/// Maximum tolerable turnaround for a given effective capacity.
///
/// A zero flight rate has no cadence requirement and yields 0 rather than a
/// division by zero.
#[must_use]
pub fn max_turnaround(rate: f64, u_target: f64, b_eff: f64) -> f64 {
    if rate > 0.0 {
        (DAYS_PER_YEAR * u_target * b_eff) / rate
    } else {
        0.0
    }
}

/// Evaluate the cadence gate.
#[must_use]
pub fn compute_cadence(inputs: &CadenceInputs) -> CadenceResult {
    let inputs = inputs.sanitized();

    let spares = spares_requirement(inputs.rate, inputs.p_rec, inputs.l_replace);
    let b_eff = inputs.boosters * (1.0 - inputs.d_down) - spares;
    let t_turn95_max = max_turnaround(inputs.rate, inputs.u_target, b_eff);

    CadenceResult {
        spares,
        b_eff,
        t_turn95_max,
        feasible: inputs.t_turn95 <= t_turn95_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn worked_example_is_just_infeasible() {
        let result = compute_cadence(&CadenceInputs::reference());

        assert!(approx(result.spares, 1.493_150_7, 1e-6));
        assert!(approx(result.b_eff, 2.106_849_3, 1e-6));
        assert!(approx(result.t_turn95_max, 26.915, 1e-9));
        // 27 > 26.915
        assert!(!result.feasible);
    }

    #[test]
    fn exact_equality_is_feasible() {
        let base = compute_cadence(&CadenceInputs::reference());
        let inputs = CadenceInputs {
            t_turn95: base.t_turn95_max,
            ..CadenceInputs::reference()
        };
        assert!(compute_cadence(&inputs).feasible);
    }

    #[test]
    fn zero_rate_guard() {
        let inputs = CadenceInputs {
            rate: 0.0,
            ..CadenceInputs::reference()
        };
        let result = compute_cadence(&inputs);
        assert_eq!(result.spares, 1.0);
        assert_eq!(result.t_turn95_max, 0.0);
        assert!(!result.feasible);

        let instant = CadenceInputs {
            rate: 0.0,
            t_turn95: 0.0,
            ..CadenceInputs::reference()
        };
        assert!(compute_cadence(&instant).feasible);
    }

    #[test]
    fn negative_capacity_is_reported() {
        let inputs = CadenceInputs::new(200.0, 2.0, 0.3, 0.7, 365.0, 0.8, 1.0);
        let result = compute_cadence(&inputs);
        // S = 1 + 200 * 0.2 * 1 = 41
        assert!(approx(result.spares, 41.0, 1e-9));
        assert!(result.spares > inputs.boosters);
        assert!(result.b_eff < 0.0);
        assert!(result.t_turn95_max < 0.0);
        assert!(!result.feasible);
    }

    #[test]
    fn certain_recovery_needs_one_spare() {
        let inputs = CadenceInputs {
            p_rec: 1.0,
            ..CadenceInputs::reference()
        };
        assert_eq!(compute_cadence(&inputs).spares, 1.0);
    }

    #[test]
    fn fractions_are_clamped() {
        let wild = CadenceInputs {
            d_down: -1.0,
            u_target: 4.0,
            p_rec: 1.5,
            ..CadenceInputs::reference()
        };
        let tame = CadenceInputs {
            d_down: 0.0,
            u_target: 1.0,
            p_rec: 1.0,
            ..CadenceInputs::reference()
        };
        assert_eq!(compute_cadence(&wild), compute_cadence(&tame));
    }

    #[test]
    fn max_turnaround_scales_with_capacity() {
        assert_eq!(max_turnaround(10.0, 1.0, 2.0), 73.0);
        assert_eq!(max_turnaround(0.0, 1.0, 2.0), 0.0);
        assert_eq!(max_turnaround(-5.0, 1.0, 2.0), 0.0);
    }
}
