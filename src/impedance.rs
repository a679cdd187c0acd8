//! Impedance algebra for lumped elements at a complex frequency.
//!
//! Pure combinators over [`CScalar`]: leaf impedances for the three passive
//! element kinds plus the series/parallel composition rules. Degenerate
//! inputs (a zero product `s·C`, a zero admittance sum) yield non-finite
//! values through ordinary complex arithmetic; callers sweeping a ladder
//! tolerate those samples instead of trapping them.

use crate::math::{CScalar, Scalar};

/// Impedance of an ideal capacitor `C` (farads) at complex frequency `s`:
/// `1 / (s · C)`.
///
/// Non-finite (NaN/∞ components) when `s · C == 0`, i.e. at DC; sweeps never
/// evaluate there.
#[inline]
#[must_use]
pub fn capacitor(s: CScalar, capacitance_f: Scalar) -> CScalar {
    CScalar::new(1.0, 0.0) / (s * capacitance_f)
}

/// Impedance of an ideal inductor `L` (henries) at complex frequency `s`:
/// `s · L`.
#[inline]
#[must_use]
pub fn inductor(s: CScalar, inductance_h: Scalar) -> CScalar {
    s * inductance_h
}

/// Impedance of an ideal resistor `R` (ohms), frequency-independent.
#[inline]
#[must_use]
pub fn resistor(resistance_ohms: Scalar) -> CScalar {
    CScalar::new(resistance_ohms, 0.0)
}

/// Series combination: `Z1 + Z2`.
#[inline]
#[must_use]
pub fn series(z1: CScalar, z2: CScalar) -> CScalar {
    z1 + z2
}

/// Parallel combination: `1 / (1/Z1 + 1/Z2)`.
///
/// When the admittances cancel (`1/Z1 + 1/Z2 == 0`, an anti-resonance) the
/// division produces a non-finite value, which propagates to the caller.
#[inline]
#[must_use]
pub fn parallel(z1: CScalar, z2: CScalar) -> CScalar {
    let one = CScalar::new(1.0, 0.0);
    one / (one / z1 + one / z2)
}
