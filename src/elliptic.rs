//! The specific 7th-order elliptic low-pass filter this crate evaluates.
//!
//! [`SeventhOrderElliptic`] holds the component-value set for one filter
//! instance: a resistively sourced ladder of three series LC resonators and
//! four shunt capacitors, terminated in a load resistor bypassed by a final
//! capacitor. The topology is fixed; the values are plain configuration, so
//! alternate instances (or synthetic values for testing) drop in without
//! touching the evaluator.

use crate::errors::LadderBodeError;
use crate::ladder::{Branch, LadderNetwork};
use crate::math::{CScalar, Scalar};

/// Component values for one 7th-order elliptic low-pass instance.
///
/// All values are plain SI units: farads, henries, ohms, volts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeventhOrderElliptic {
    /// First resonator capacitance in farads (paired with `l1`).
    pub c1: Scalar,
    /// Second resonator capacitance in farads (paired with `l2`).
    pub c2: Scalar,
    /// Third resonator capacitance in farads (paired with `l3`).
    pub c3: Scalar,
    /// Source-side shunt capacitance in farads.
    pub c4: Scalar,
    /// Middle shunt capacitance in farads.
    pub c5: Scalar,
    /// Load-side shunt capacitance in farads.
    pub c6: Scalar,
    /// Load bypass capacitance in farads (across `r2`).
    pub c7: Scalar,
    /// First resonator inductance in henries.
    pub l1: Scalar,
    /// Second resonator inductance in henries.
    pub l2: Scalar,
    /// Third resonator inductance in henries.
    pub l3: Scalar,
    /// Source resistance in ohms.
    pub r1: Scalar,
    /// Load resistance in ohms.
    pub r2: Scalar,
    /// Assumed load voltage amplitude in volts seeding the divider walk.
    pub source_amplitude: Scalar,
}

impl SeventhOrderElliptic {
    /// Component values of the reference instance, a reconstruction filter
    /// for a direct digital synthesizer output stage.
    #[must_use]
    pub fn dds_reference() -> Self {
        Self {
            c1: 1.0e-12,
            c2: 5.6e-12,
            c3: 4.7e-12,
            c4: 22.0e-12,
            c5: 33.0e-12,
            c6: 22.0e-12,
            c7: 22.0e-12,
            l1: 470.0e-9,
            l2: 390.0e-9,
            l3: 390.0e-9,
            r1: 200.0,
            r2: 200.0,
            source_amplitude: 2.0,
        }
    }

    /// Checks that every component value is finite and strictly positive.
    pub fn validate(&self) -> Result<(), LadderBodeError> {
        let fields = [
            ("c1", self.c1),
            ("c2", self.c2),
            ("c3", self.c3),
            ("c4", self.c4),
            ("c5", self.c5),
            ("c6", self.c6),
            ("c7", self.c7),
            ("l1", self.l1),
            ("l2", self.l2),
            ("l3", self.l3),
            ("r1", self.r1),
            ("r2", self.r2),
            ("source_amplitude", self.source_amplitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LadderBodeError::Component(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Builds the evaluation ladder for this instance.
    ///
    /// Outward from the load: R2 bypassed by C7, then alternating series
    /// resonators (L3C3, L2C2, L1C1) and shunt capacitors (C6, C5, C4),
    /// closed by the shunt source resistance R1.
    #[must_use]
    pub fn ladder(&self) -> LadderNetwork {
        let mut ladder = LadderNetwork::new(
            Branch::ParallelRc {
                resistance: self.r2,
                capacitance: self.c7,
            },
            self.source_amplitude,
        );
        ladder.add_series(Branch::ParallelLc {
            inductance: self.l3,
            capacitance: self.c3,
        });
        ladder.add_parallel(Branch::Capacitor(self.c6));
        ladder.add_series(Branch::ParallelLc {
            inductance: self.l2,
            capacitance: self.c2,
        });
        ladder.add_parallel(Branch::Capacitor(self.c5));
        ladder.add_series(Branch::ParallelLc {
            inductance: self.l1,
            capacitance: self.c1,
        });
        ladder.add_parallel(Branch::Capacitor(self.c4));
        ladder.add_parallel(Branch::Resistor(self.r1));
        ladder
    }

    /// Evaluates the transfer function at complex frequency `s`.
    ///
    /// Rebuilds the ladder on every call; sweeps should build it once via
    /// [`ladder`](Self::ladder) and evaluate that.
    #[must_use]
    pub fn transfer_function(&self, s: CScalar) -> CScalar {
        self.ladder().transfer_function(s)
    }
}
