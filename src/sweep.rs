//! Logarithmic frequency sweeps and Bode post-processing.
//!
//! A [`SweepPlan`] fixes the bounds and sample count of a geometric
//! frequency grid. [`SweepPlan::bode`] drives any response closure across
//! that grid lazily, yielding one [`BodePoint`] per sample. Samples are
//! independent and recomputed from scratch, so a plan can be swept any
//! number of times with identical results.

use crate::errors::LadderBodeError;
use crate::math::{complex_frequency, CScalar, Scalar};

/// Magnitude in dB: `20 · log10(|h|)`.
///
/// Not clamped. A zero response maps to negative infinity, which stays
/// representable through the sweep and its writers; non-finite responses
/// stay non-finite.
#[inline]
#[must_use]
pub fn magnitude_db(h: CScalar) -> Scalar {
    20.0 * h.norm().log10()
}

/// Phase in degrees: `arg(h) · 180/π`.
#[inline]
#[must_use]
pub fn phase_deg(h: CScalar) -> Scalar {
    h.arg().to_degrees()
}

/// One row of a Bode dataset.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodePoint {
    /// Sample frequency in hertz.
    pub frequency_hz: Scalar,
    /// Response magnitude in dB.
    pub magnitude_db: Scalar,
    /// Response phase in degrees.
    pub phase_deg: Scalar,
}

impl BodePoint {
    /// Derives the dataset row for a complex response at `frequency_hz`.
    #[must_use]
    pub fn from_response(frequency_hz: Scalar, response: CScalar) -> Self {
        Self {
            frequency_hz,
            magnitude_db: magnitude_db(response),
            phase_deg: phase_deg(response),
        }
    }

    /// Linear magnitude reconstructed from the stored dB value.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        10f64.powf(self.magnitude_db / 20.0)
    }
}

/// Bounds and sample count of a geometric frequency grid.
///
/// `points` samples span `[f_start_hz, f_stop_hz]` inclusive, each a fixed
/// ratio above the previous.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPlan {
    f_start_hz: Scalar,
    f_stop_hz: Scalar,
    points: usize,
}

impl SweepPlan {
    /// Creates a plan after checking the bounds are usable.
    ///
    /// Requires finite `0 < f_start_hz < f_stop_hz` and `points >= 2`.
    pub fn new(
        f_start_hz: Scalar,
        f_stop_hz: Scalar,
        points: usize,
    ) -> Result<Self, LadderBodeError> {
        if !f_start_hz.is_finite() || f_start_hz <= 0.0 {
            return Err(LadderBodeError::InvalidSweep(format!(
                "f_start_hz must be finite and > 0, got {f_start_hz}"
            )));
        }
        if !f_stop_hz.is_finite() || f_stop_hz <= f_start_hz {
            return Err(LadderBodeError::InvalidSweep(format!(
                "f_stop_hz must be finite and greater than f_start_hz, got {f_stop_hz}"
            )));
        }
        if points < 2 {
            return Err(LadderBodeError::InvalidSweep(format!(
                "points must be >= 2, got {points}"
            )));
        }
        Ok(Self {
            f_start_hz,
            f_stop_hz,
            points,
        })
    }

    /// Start frequency in hertz.
    #[must_use]
    pub fn f_start_hz(&self) -> Scalar {
        self.f_start_hz
    }

    /// Stop frequency in hertz.
    #[must_use]
    pub fn f_stop_hz(&self) -> Scalar {
        self.f_stop_hz
    }

    /// Number of samples, both endpoints included.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Ratio between consecutive samples:
    /// `(f_stop/f_start)^(1/(points-1))`.
    #[must_use]
    pub fn step_ratio(&self) -> Scalar {
        (self.f_stop_hz / self.f_start_hz).powf(1.0 / (self.points - 1) as Scalar)
    }

    /// The `index`-th sample frequency, `f_start · step_ratio^index`.
    ///
    /// Meaningful for `index < points`; larger indices extrapolate past the
    /// stop bound.
    #[must_use]
    pub fn frequency(&self, index: usize) -> Scalar {
        self.f_start_hz * self.step_ratio().powi(index as i32)
    }

    /// Lazily yields every sample frequency in increasing order.
    #[must_use]
    pub fn frequencies(&self) -> impl Iterator<Item = Scalar> {
        let plan = *self;
        (0..plan.points).map(move |i| plan.frequency(i))
    }

    /// Sweeps a response closure across the grid.
    ///
    /// Each sample evaluates `response(j·2π·f)` and converts the result to
    /// magnitude and phase. The iterator is lazy and finite; building it
    /// again restarts the sweep from scratch.
    #[must_use]
    pub fn bode<F>(&self, response: F) -> BodeSweep<F>
    where
        F: Fn(CScalar) -> CScalar,
    {
        BodeSweep {
            plan: *self,
            response,
            index: 0,
        }
    }
}

/// Lazy iterator over the Bode points of one sweep.
#[derive(Debug, Clone)]
pub struct BodeSweep<F> {
    plan: SweepPlan,
    response: F,
    index: usize,
}

impl<F> Iterator for BodeSweep<F>
where
    F: Fn(CScalar) -> CScalar,
{
    type Item = BodePoint;

    fn next(&mut self) -> Option<BodePoint> {
        if self.index >= self.plan.points() {
            return None;
        }
        let hz = self.plan.frequency(self.index);
        self.index += 1;
        let response = (self.response)(complex_frequency(hz));
        Some(BodePoint::from_response(hz, response))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.points() - self.index;
        (remaining, Some(remaining))
    }
}

impl<F> ExactSizeIterator for BodeSweep<F> where F: Fn(CScalar) -> CScalar {}
