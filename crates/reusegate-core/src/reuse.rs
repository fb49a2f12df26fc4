//! # Effective Reuse
//!
//! Expected number of flights a recoverable stage delivers before it is lost
//! or reaches its design reuse cap.
//!
//! Flight `i` (1-based) happens only if the previous `i - 1` recoveries all
//! succeeded, so
//!
//! ```text
//! N_eff = sum_{i=1..N} p^(i-1) = (1 - p^N) / (1 - p)
//! ```
//!
//! The closed form is `0/0` at `p = 1`; at or above
//! [`CERTAIN_RECOVERY_THRESHOLD`] the limit `N` is returned instead.

use crate::primitives::CERTAIN_RECOVERY_THRESHOLD;

/// Expected effective flights for recovery probability `p_rec` and design cap
/// `n_design`.
///
/// `p_rec` is expected in [0, 1] (see [`crate::validation::clamp_unit`]).
/// A cap of zero or below means no flight can be credited and yields 0.
#[must_use]
pub fn compute_n_eff(p_rec: f64, n_design: i64) -> f64 {
    if n_design <= 0 {
        return 0.0;
    }
    let n = n_design as f64;
    if p_rec >= CERTAIN_RECOVERY_THRESHOLD {
        return n;
    }
    (1.0 - p_rec.powf(n)) / (1.0 - p_rec)
}
