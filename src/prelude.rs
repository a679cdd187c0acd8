//! Convenience re-exports for evaluating ladder filters.

pub use crate::dataset::{write_bode_csv, write_bode_text};
pub use crate::elliptic::SeventhOrderElliptic;
pub use crate::errors::LadderBodeError;
pub use crate::impedance::{capacitor, inductor, parallel, resistor, series};
pub use crate::ladder::{Branch, LadderNetwork, LadderStage, LadderStep};
pub use crate::math::{angular_frequency, complex_frequency, CScalar, Scalar};
pub use crate::sweep::{magnitude_db, phase_deg, BodePoint, BodeSweep, SweepPlan};
