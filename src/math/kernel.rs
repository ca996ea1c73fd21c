//! Discrete 1-D Gaussian kernel.
//!
//! The kernel is sampled at integer offsets from its centre and normalised to
//! unit sum. Its length is `8σ` rounded up to the next odd integer, so it
//! always has a central tap and covers ±4σ.

use crate::error::TitaniaError;

/// Kernel half-extent in standard deviations (total size is twice this).
const TRUNCATE_SIGMAS: f64 = 4.0;

/// Build a normalised Gaussian kernel with standard deviation `sigma` (in samples).
pub fn gaussian_kernel(sigma: f64) -> Result<Vec<f64>, TitaniaError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(TitaniaError::InvalidKernelWidth(sigma));
    }

    let size = round_up_to_odd(2.0 * TRUNCATE_SIGMAS * sigma);
    let half = (size / 2) as f64;
    let two_var = 2.0 * sigma * sigma;

    let mut kernel: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64 - half;
            (-(x * x) / two_var).exp()
        })
        .collect();

    let total: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= total;
    }
    Ok(kernel)
}

fn round_up_to_odd(value: f64) -> usize {
    let i = value.ceil().max(1.0) as usize;
    if i % 2 == 0 { i + 1 } else { i }
}
