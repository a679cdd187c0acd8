//! Shared numerical primitives for s-domain evaluation.

use std::f64::consts::PI;

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and phasors.
pub type CScalar = Complex<Scalar>;

/// Returns the angular frequency ω (rad/s) for a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Returns the complex frequency `s = jω` for a linear frequency `hz`.
///
/// This is the evaluation point for AC steady-state analysis; a fresh value
/// is built per sample.
#[inline]
#[must_use]
pub fn complex_frequency(hz: Scalar) -> CScalar {
    CScalar::new(0.0, angular_frequency(hz))
}
