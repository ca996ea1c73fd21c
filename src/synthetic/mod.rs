//! Synthetic data for exercising the helpers.
//!
//! Generation is deterministic given the configuration (including its seed).

pub mod lightcurve;

pub use lightcurve::*;
