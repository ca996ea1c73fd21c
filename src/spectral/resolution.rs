//! Resolving power of a sampled wavelength grid.

use crate::error::TitaniaError;
use crate::math::median_mut;

/// Minimum grid length reported when no interior pair exists.
const MIN_SAMPLES: usize = 3;

/// Median resolving power of a monotonically increasing wavelength grid.
///
/// For each pair of neighbouring samples (excluding the last pair) the local
/// estimate is `(λ[i+1] + λ[i]) / (λ[i+1] - λ[i]) / 2`, i.e. the pair's mean
/// wavelength over its spacing.
pub fn resolution_calculator(wavelength: &[f64]) -> Result<f64, TitaniaError> {
    // The last sample only closes the final pair, which is left out.
    let interior = wavelength.split_last().map_or(&[][..], |(_, rest)| rest);
    let mut r_grid: Vec<f64> = interior
        .windows(2)
        .map(|w| (w[1] + w[0]) / (w[1] - w[0]) / 2.0)
        .collect();

    let Some(r) = median_mut(&mut r_grid) else {
        return Err(TitaniaError::TooFewPoints {
            got: wavelength.len(),
            min: MIN_SAMPLES,
        });
    };
    log::debug!(target: "titania::spectral", "resolving power R={r:.3} over {} samples", wavelength.len());
    Ok(r)
}
