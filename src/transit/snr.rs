//! Signal-to-noise ratio of a trapezoidal transit (Kipping 2023,
//! <https://arxiv.org/abs/2305.06790>).
//!
//! With `σ_n = σ / sqrt(n)` the noise of `n` stacked transits:
//!
//! - box-shaped transit (`t23` unknown): `SNR = D / σ_n · sqrt(T14)`
//! - trapezoid: `SNR = D / σ_n · sqrt((T14 + 2·T23) / 3)`

/// Transit signal-to-noise ratio.
///
/// - `depth`: transit depth (e.g. ppm)
/// - `sigma`: noise per unit of time, in the depth's unit
/// - `t14`: total transit duration
/// - `t23`: flat-bottom duration, if known
/// - `n_transits`: number of transits observed
pub fn transit_snr(depth: f64, sigma: f64, t14: f64, t23: Option<f64>, n_transits: u32) -> f64 {
    let noise = sigma / f64::from(n_transits).sqrt();
    let effective_duration = match t23 {
        None => t14,
        Some(t23) => (t14 + 2.0 * t23) / 3.0,
    };
    depth / noise * effective_duration.sqrt()
}
