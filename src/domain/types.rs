//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed around in-memory between the helpers
//! - stored alongside analysis results (JSON, notebooks, etc.)
//! - reloaded later to reproduce a clipping or SNR calculation

use serde::{Deserialize, Serialize};

/// Default clip threshold, in units of the mean absolute deviation.
pub const DEFAULT_CLIP: f64 = 5.0;

/// Default running-median window width (must be odd).
pub const DEFAULT_WIDTH: usize = 15;

/// Options for running-median outlier clipping.
///
/// Missing fields deserialize to their defaults, so a stored `{"clip": 3.0}`
/// reproduces `clip = 3.0, width = 15, verbose = true`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipOptions {
    /// Cut-off in multiples of the mean absolute deviation from the running median.
    pub clip: f64,
    /// Number of samples in the running-median window. Must be odd.
    pub width: usize,
    /// Log a one-line rejection summary at `info` level.
    pub verbose: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            clip: DEFAULT_CLIP,
            width: DEFAULT_WIDTH,
            verbose: true,
        }
    }
}

/// Output of [`crate::signal::clip_outliers`].
///
/// `x`, `y` (and `yerr`, when supplied) hold the kept samples in their
/// original order. `rejected` is index-aligned with the *input* series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yerr: Option<Vec<f64>>,
    /// `true` where the input sample was rejected.
    pub rejected: Vec<bool>,
}

impl ClipResult {
    /// Number of rejected samples.
    pub fn n_rejected(&self) -> usize {
        self.rejected.iter().filter(|&&r| r).count()
    }

    /// Number of kept samples.
    pub fn n_kept(&self) -> usize {
        self.x.len()
    }

    /// Indices (into the input series) of the kept samples.
    pub fn kept_indices(&self) -> Vec<usize> {
        self.rejected
            .iter()
            .enumerate()
            .filter(|&(_, &r)| !r)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A sampled spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub wavelength: Vec<f64>,
    pub flux: Vec<f64>,
}

/// Inputs to the trapezoid transit signal-to-noise estimate.
///
/// Units only need to be consistent: depth and `sigma` in the same flux unit
/// (typically ppm), `t14`/`t23` in the time unit `sigma` is normalised to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitParams {
    /// Transit depth.
    pub depth: f64,
    /// Noise per unit of time.
    pub sigma: f64,
    /// Total transit duration (first to fourth contact).
    pub t14: f64,
    /// Flat-bottom duration (second to third contact). `None` treats the
    /// transit as box-shaped over `t14`.
    pub t23: Option<f64>,
    /// Number of transits observed.
    pub n_transits: u32,
}

impl Default for TransitParams {
    fn default() -> Self {
        Self {
            depth: 0.0,
            sigma: 1.0,
            t14: 0.0,
            t23: None,
            n_transits: 1,
        }
    }
}

impl TransitParams {
    /// Signal-to-noise ratio for these parameters.
    pub fn snr(&self) -> f64 {
        crate::transit::transit_snr(self.depth, self.sigma, self.t14, self.t23, self.n_transits)
    }
}
