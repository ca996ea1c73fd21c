//! Seeded synthetic transit light curves.
//!
//! A light curve is a symmetric trapezoid transit on a flat, normalised
//! continuum, plus white noise and optional positive spikes (cosmic-ray-like
//! outliers). The same configuration always produces the same samples.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::error::TitaniaError;
use crate::signal::phase_of;

/// Generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticLightCurve {
    pub n_points: usize,
    /// Time of the first sample.
    pub start: f64,
    /// Sampling interval.
    pub cadence: f64,
    /// Mid-transit reference epoch.
    pub t0: f64,
    pub period: f64,
    /// Fractional transit depth.
    pub depth: f64,
    pub t14: f64,
    pub t23: f64,
    /// White-noise standard deviation (also reported as the per-point error).
    pub noise_sigma: f64,
    /// Probability that a sample receives a spike.
    pub outlier_fraction: f64,
    /// Height of an injected spike.
    pub outlier_amplitude: f64,
    pub seed: u64,
}

impl Default for SyntheticLightCurve {
    fn default() -> Self {
        Self {
            n_points: 2000,
            start: 0.0,
            cadence: 2.0 / 1440.0,
            t0: 1.0,
            period: 2.5,
            depth: 0.01,
            t14: 0.12,
            t23: 0.08,
            noise_sigma: 5e-4,
            outlier_fraction: 0.0,
            outlier_amplitude: 0.02,
            seed: 0,
        }
    }
}

/// A generated light curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCurve {
    pub time: Vec<f64>,
    pub flux: Vec<f64>,
    pub flux_err: Vec<f64>,
    /// Noise-free model flux at each sample.
    pub model: Vec<f64>,
    /// Indices of the samples that received a spike.
    pub outliers: Vec<usize>,
}

impl SyntheticLightCurve {
    pub fn generate(&self) -> Result<LightCurve, TitaniaError> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let normal = Normal::new(0.0, self.noise_sigma)
            .map_err(|e| TitaniaError::InvalidSetting(format!("Noise distribution error: {e}")))?;

        let time: Vec<f64> = (0..self.n_points)
            .map(|i| self.start + self.cadence * i as f64)
            .collect();
        let model = trapezoid_model(&time, self.t0, self.period, self.depth, self.t14, self.t23);

        let mut flux = Vec::with_capacity(self.n_points);
        let mut outliers = Vec::new();
        for (i, &m) in model.iter().enumerate() {
            let mut f = m + normal.sample(&mut rng);
            if self.outlier_fraction > 0.0 && rng.gen_range(0.0..1.0) < self.outlier_fraction {
                f += self.outlier_amplitude;
                outliers.push(i);
            }
            flux.push(f);
        }

        Ok(LightCurve {
            time,
            flux,
            flux_err: vec![self.noise_sigma; self.n_points],
            model,
            outliers,
        })
    }

    fn validate(&self) -> Result<(), TitaniaError> {
        if self.n_points == 0 {
            return Err(TitaniaError::InvalidSetting("n_points must be > 0.".into()));
        }
        if !(self.cadence.is_finite() && self.cadence > 0.0) {
            return Err(TitaniaError::InvalidSetting("cadence must be finite and > 0.".into()));
        }
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(TitaniaError::InvalidSetting("period must be finite and > 0.".into()));
        }
        if !(self.noise_sigma.is_finite() && self.noise_sigma >= 0.0) {
            return Err(TitaniaError::InvalidSetting("noise_sigma must be finite and >= 0.".into()));
        }
        if !(self.t23 >= 0.0 && self.t14 >= self.t23 && self.t14 < self.period) {
            return Err(TitaniaError::InvalidSetting(format!(
                "Transit durations must satisfy 0 <= t23 <= t14 < period (t23={}, t14={}, period={}).",
                self.t23, self.t14, self.period
            )));
        }
        if !(0.0..1.0).contains(&self.outlier_fraction) {
            return Err(TitaniaError::InvalidSetting("outlier_fraction must be in [0, 1).".into()));
        }
        Ok(())
    }
}

/// Normalised flux of a symmetric trapezoid transit.
///
/// Full depth within `t23/2` of mid-transit, linear ingress/egress out to
/// `t14/2`, and `1.0` elsewhere.
pub fn trapezoid_model(t: &[f64], t0: f64, period: f64, depth: f64, t14: f64, t23: f64) -> Vec<f64> {
    let half14 = 0.5 * t14;
    let half23 = 0.5 * t23;
    t.iter()
        .map(|&ti| {
            let dt = (phase_of(ti, period, t0) * period).abs();
            if dt <= half23 {
                1.0 - depth
            } else if dt < half14 {
                1.0 - depth * (half14 - dt) / (half14 - half23)
            } else {
                1.0
            }
        })
        .collect()
}
