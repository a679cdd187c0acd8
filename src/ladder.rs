//! Data-driven ladder-network evaluation.
//!
//! A [`LadderNetwork`] is described outward from its load branch as an
//! ordered list of [`LadderStep`]s. Evaluating it at a complex frequency is a
//! fold over those steps carrying two values: the equivalent impedance seen
//! looking into the ladder so far, and the node voltage referenced to the
//! assumed load voltage. Series steps scale the voltage by the divider ratio
//! they create; parallel steps change only the impedance. The transfer
//! function is the load voltage over the final (source-side) voltage.

use crate::impedance;
use crate::math::{CScalar, Scalar};

/// One passive branch of a ladder.
///
/// Composite variants cover the branch shapes the evaluator needs as single
/// steps: a parallel LC resonator inserted in series, and a load resistor
/// bypassed by a capacitor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Branch {
    /// Ideal resistor, resistance in ohms.
    Resistor(Scalar),
    /// Ideal capacitor, capacitance in farads.
    Capacitor(Scalar),
    /// Ideal inductor, inductance in henries.
    Inductor(Scalar),
    /// Inductor and capacitor in parallel (a resonant tank).
    ParallelLc {
        /// Inductance in henries.
        inductance: Scalar,
        /// Capacitance in farads.
        capacitance: Scalar,
    },
    /// Resistor and capacitor in parallel.
    ParallelRc {
        /// Resistance in ohms.
        resistance: Scalar,
        /// Capacitance in farads.
        capacitance: Scalar,
    },
}

impl Branch {
    /// Evaluates the branch impedance at complex frequency `s`.
    #[must_use]
    pub fn impedance(&self, s: CScalar) -> CScalar {
        match *self {
            Self::Resistor(resistance) => impedance::resistor(resistance),
            Self::Capacitor(capacitance) => impedance::capacitor(s, capacitance),
            Self::Inductor(inductance) => impedance::inductor(s, inductance),
            Self::ParallelLc {
                inductance,
                capacitance,
            } => impedance::parallel(
                impedance::inductor(s, inductance),
                impedance::capacitor(s, capacitance),
            ),
            Self::ParallelRc {
                resistance,
                capacitance,
            } => impedance::parallel(
                impedance::resistor(resistance),
                impedance::capacitor(s, capacitance),
            ),
        }
    }
}

/// One construction step applied while building a ladder outward from its
/// load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LadderStep {
    /// Inserts the branch in series with everything built so far.
    Series(Branch),
    /// Shunts the branch across the node built so far.
    Parallel(Branch),
}

impl LadderStep {
    /// Advances the fold state `(impedance, voltage)` across this step.
    fn apply(&self, s: CScalar, z: CScalar, v: CScalar) -> (CScalar, CScalar) {
        match *self {
            Self::Series(branch) => {
                let combined = impedance::series(z, branch.impedance(s));
                (combined, v * (combined / z))
            }
            Self::Parallel(branch) => (impedance::parallel(z, branch.impedance(s)), v),
        }
    }
}

/// Equivalent impedance and node voltage after one ladder step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderStage {
    /// Impedance seen looking into the ladder after this step.
    pub impedance: CScalar,
    /// Node voltage after this step, referenced to the assumed load voltage.
    pub voltage: CScalar,
}

/// A ladder network described outward from its load branch.
///
/// `source_amplitude` seeds the divider walk as the assumed load voltage; it
/// cancels in [`transfer_function`](Self::transfer_function), which returns
/// the dimensionless gain.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderNetwork {
    load: Branch,
    source_amplitude: Scalar,
    steps: Vec<LadderStep>,
}

impl LadderNetwork {
    /// Creates a ladder consisting of only its load branch.
    #[must_use]
    pub fn new(load: Branch, source_amplitude: Scalar) -> Self {
        Self {
            load,
            source_amplitude,
            steps: Vec::new(),
        }
    }

    /// Appends a branch in series with the ladder built so far.
    pub fn add_series(&mut self, branch: Branch) {
        self.steps.push(LadderStep::Series(branch));
    }

    /// Shunts a branch across the node built so far.
    pub fn add_parallel(&mut self, branch: Branch) {
        self.steps.push(LadderStep::Parallel(branch));
    }

    /// Returns the load branch.
    #[must_use]
    pub fn load(&self) -> Branch {
        self.load
    }

    /// Returns the amplitude seeding the divider walk.
    #[must_use]
    pub fn source_amplitude(&self) -> Scalar {
        self.source_amplitude
    }

    /// Returns the construction steps beyond the load, in application order.
    #[must_use]
    pub fn steps(&self) -> &[LadderStep] {
        &self.steps
    }

    /// Returns the number of steps beyond the load.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true when the ladder is only its load branch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn fold(&self, s: CScalar) -> (CScalar, CScalar) {
        let mut z = self.load.impedance(s);
        let mut v = CScalar::new(self.source_amplitude, 0.0);
        for step in &self.steps {
            (z, v) = step.apply(s, z, v);
        }
        (z, v)
    }

    /// Computes the transfer function `H(s) = V_load / V_source`.
    ///
    /// Pure in `(s, component values)`: identical inputs give bit-identical
    /// results. Poles and null divisions propagate as non-finite values.
    #[must_use]
    pub fn transfer_function(&self, s: CScalar) -> CScalar {
        let (_, v_source) = self.fold(s);
        CScalar::new(self.source_amplitude, 0.0) / v_source
    }

    /// Computes the equivalent impedance seen from the source side.
    #[must_use]
    pub fn input_impedance(&self, s: CScalar) -> CScalar {
        self.fold(s).0
    }

    /// Traces the fold stage by stage.
    ///
    /// The first entry is the load stage; each following entry is the state
    /// after one step, so the trace holds `len() + 1` stages.
    #[must_use]
    pub fn stages(&self, s: CScalar) -> Vec<LadderStage> {
        let mut z = self.load.impedance(s);
        let mut v = CScalar::new(self.source_amplitude, 0.0);
        let mut trace = Vec::with_capacity(self.steps.len() + 1);
        trace.push(LadderStage {
            impedance: z,
            voltage: v,
        });
        for step in &self.steps {
            (z, v) = step.apply(s, z, v);
            trace.push(LadderStage {
                impedance: z,
                voltage: v,
            });
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::complex_frequency;

    #[test]
    fn resistive_divider_matches_closed_form() {
        let mut ladder = LadderNetwork::new(Branch::Resistor(200.0), 2.0);
        ladder.add_series(Branch::Resistor(200.0));
        let h = ladder.transfer_function(complex_frequency(1.0e3));
        assert_relative_eq!(h.re, 0.5, max_relative = 1.0e-12);
        assert_relative_eq!(h.im, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn gain_is_independent_of_seed_amplitude() {
        let s = complex_frequency(5.0e6);
        let mut unit = LadderNetwork::new(Branch::Resistor(75.0), 1.0);
        unit.add_series(Branch::Capacitor(10.0e-12));
        let mut scaled = LadderNetwork::new(Branch::Resistor(75.0), 2.0);
        scaled.add_series(Branch::Capacitor(10.0e-12));
        let a = unit.transfer_function(s);
        let b = scaled.transfer_function(s);
        assert_relative_eq!(a.re, b.re, max_relative = 1.0e-12);
        assert_relative_eq!(a.im, b.im, max_relative = 1.0e-12);
    }

    #[test]
    fn parallel_step_leaves_node_voltage_unchanged() {
        let s = complex_frequency(1.0e6);
        let mut ladder = LadderNetwork::new(Branch::Resistor(200.0), 2.0);
        ladder.add_parallel(Branch::Capacitor(22.0e-12));
        let trace = ladder.stages(s);
        assert_eq!(trace.len(), 2);
        assert_relative_eq!(trace[1].voltage.re, trace[0].voltage.re);
        assert_relative_eq!(trace[1].voltage.im, trace[0].voltage.im);
        assert!(trace[1].impedance != trace[0].impedance);
    }

    #[test]
    fn series_step_scales_voltage_by_divider_ratio() {
        let s = complex_frequency(2.0e6);
        let mut ladder = LadderNetwork::new(Branch::Resistor(100.0), 1.0);
        ladder.add_series(Branch::Inductor(470.0e-9));
        let trace = ladder.stages(s);
        let expected = trace[0].voltage * (trace[1].impedance / trace[0].impedance);
        assert_relative_eq!(trace[1].voltage.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(trace[1].voltage.im, expected.im, max_relative = 1.0e-12);
    }

    #[test]
    fn stage_trace_covers_load_and_every_step() {
        let mut ladder = LadderNetwork::new(
            Branch::ParallelRc {
                resistance: 200.0,
                capacitance: 22.0e-12,
            },
            2.0,
        );
        ladder.add_series(Branch::ParallelLc {
            inductance: 390.0e-9,
            capacitance: 4.7e-12,
        });
        ladder.add_parallel(Branch::Capacitor(22.0e-12));
        ladder.add_parallel(Branch::Resistor(200.0));
        assert_eq!(ladder.len(), 3);
        assert!(!ladder.is_empty());
        let trace = ladder.stages(complex_frequency(1.0e7));
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn input_impedance_matches_hand_combination() {
        let s = complex_frequency(3.0e6);
        let mut ladder = LadderNetwork::new(Branch::Resistor(50.0), 1.0);
        ladder.add_series(Branch::Inductor(1.0e-6));
        ladder.add_parallel(Branch::Capacitor(100.0e-12));
        let z = ladder.input_impedance(s);
        let expected = impedance::parallel(
            impedance::series(impedance::resistor(50.0), impedance::inductor(s, 1.0e-6)),
            impedance::capacitor(s, 100.0e-12),
        );
        assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
    }

    #[test]
    fn composite_branches_match_explicit_combinations() {
        let s = complex_frequency(8.0e6);
        let lc = Branch::ParallelLc {
            inductance: 390.0e-9,
            capacitance: 5.6e-12,
        };
        let expected_lc = impedance::parallel(
            impedance::inductor(s, 390.0e-9),
            impedance::capacitor(s, 5.6e-12),
        );
        assert_relative_eq!(lc.impedance(s).re, expected_lc.re, max_relative = 1.0e-12);
        assert_relative_eq!(lc.impedance(s).im, expected_lc.im, max_relative = 1.0e-12);

        let rc = Branch::ParallelRc {
            resistance: 200.0,
            capacitance: 22.0e-12,
        };
        let expected_rc = impedance::parallel(
            impedance::resistor(200.0),
            impedance::capacitor(s, 22.0e-12),
        );
        assert_relative_eq!(rc.impedance(s).re, expected_rc.re, max_relative = 1.0e-12);
        assert_relative_eq!(rc.impedance(s).im, expected_rc.im, max_relative = 1.0e-12);
    }

    #[test]
    fn evaluation_is_bit_identical_across_calls() {
        let s = complex_frequency(4.2e7);
        let mut ladder = LadderNetwork::new(
            Branch::ParallelRc {
                resistance: 200.0,
                capacitance: 22.0e-12,
            },
            2.0,
        );
        ladder.add_series(Branch::ParallelLc {
            inductance: 390.0e-9,
            capacitance: 4.7e-12,
        });
        ladder.add_parallel(Branch::Capacitor(22.0e-12));
        let first = ladder.transfer_function(s);
        let second = ladder.transfer_function(s);
        assert_eq!(first, second);
    }
}
