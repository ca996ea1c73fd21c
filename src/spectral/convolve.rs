//! Degrading a high-resolution spectrum to a coarser wavelength grid.
//!
//! The high-resolution flux is smoothed with a Gaussian whose standard
//! deviation (in high-resolution samples) is the ratio of the two grids'
//! resolving powers, then linearly interpolated onto the target grid.

use crate::domain::Spectrum;
use crate::error::TitaniaError;
use crate::math::{convolve_fft, gaussian_kernel, interp};
use crate::spectral::resolution_calculator;

/// Convolve `(high_res_wave, high_res_flux)` down to the resolution of
/// `wave_new` and resample it there.
pub fn convolving_spectrum(
    wave_new: &[f64],
    high_res_wave: &[f64],
    high_res_flux: &[f64],
) -> Result<Spectrum, TitaniaError> {
    TitaniaError::check_same_len(
        "high_res_wave",
        high_res_wave.len(),
        "high_res_flux",
        high_res_flux.len(),
    )?;

    let r_low = resolution_calculator(wave_new)?;
    let r_high = resolution_calculator(high_res_wave)?;
    let sigma = r_high / r_low;

    let kernel = gaussian_kernel(sigma)?;
    log::debug!(
        target: "titania::spectral",
        "R_high={r_high:.1}, R_low={r_low:.1}, sigma={sigma:.3}, kernel taps={}",
        kernel.len()
    );

    let smoothed = convolve_fft(high_res_flux, &kernel);
    let flux = interp(wave_new, high_res_wave, &smoothed)?;

    Ok(Spectrum {
        wavelength: wave_new.to_vec(),
        flux,
    })
}
