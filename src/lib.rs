#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Scalar and complex-frequency primitives.
pub mod math;
/// Impedance algebra for lumped elements.
pub mod impedance;
/// Ladder-network construction and evaluation.
pub mod ladder;
/// The 7th-order elliptic low-pass filter instance.
pub mod elliptic;
/// Logarithmic frequency sweeps and Bode conversion.
pub mod sweep;
/// Writers for swept Bode datasets.
pub mod dataset;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
