//! `titania` library crate.
//!
//! Small, independent numerical helpers for exoplanet light-curve analysis:
//!
//! - model comparison: BIC, corrected AIC, ΔBIC Bayes factor, reduced χ², R²
//! - light curves: running-median outlier clipping, phase folding
//! - transits: trapezoid signal-to-noise
//! - spectra: resolving power, degrading a spectrum to a coarser grid
//!
//! Every function is stateless. Diagnostics go through the `log` facade.

pub mod domain;
pub mod error;
pub mod math;
pub mod signal;
pub mod spectral;
pub mod stats;
pub mod synthetic;
pub mod transit;

pub use domain::{ClipOptions, ClipResult, Spectrum, TransitParams};
pub use error::TitaniaError;
pub use signal::{clip_outliers, phase_fold, phase_of, time_grid};
pub use spectral::{convolving_spectrum, resolution_calculator};
pub use stats::{aic, aic_checked, bf_from_bic, bic, r_squared, red_chisquare};
pub use transit::transit_snr;
