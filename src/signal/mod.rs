//! Time-series helpers for light curves.
//!
//! - running-median outlier clipping
//! - phase folding on a known period
//! - smooth time grids over an observation window

pub mod clip;
pub mod fold;

pub use clip::*;
pub use fold::*;
