//! # Boundary Clamping
//!
//! Probability and fraction inputs are clamped to [0, 1] here, before any
//! formula sees them. The formula bodies assume clamped inputs and stay total.
//!
//! NaN is not a number to clamp: it passes through unchanged so that the
//! result is visibly unavailable instead of silently pinned to a bound.

use crate::types::{BreakEvenInputs, CadenceInputs};

/// Clamp a probability or fraction to [0, 1].
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

impl BreakEvenInputs {
    /// Copy of these inputs with `p_rec` clamped to [0, 1].
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            p_rec: clamp_unit(self.p_rec),
            ..self
        }
    }
}

impl CadenceInputs {
    /// Copy of these inputs with `p_rec`, `d_down` and `u_target` clamped
    /// to [0, 1].
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            p_rec: clamp_unit(self.p_rec),
            d_down: clamp_unit(self.d_down),
            u_target: clamp_unit(self.u_target),
            ..self
        }
    }
}
