//! Model-comparison statistics.
//!
//! Responsibilities:
//!
//! - information criteria (BIC, corrected AIC) and the ΔBIC Bayes factor
//! - goodness of fit (reduced chi-square, R²)

pub mod goodness;
pub mod information;

pub use goodness::*;
pub use information::*;
