//! Running-median outlier clipping.
//!
//! For a flux series `y`:
//!
//! 1. smooth with a zero-padded running median of width `w`, applied to
//!    `y - 1` and shifted back by `+1`, so the zero padding sits at the
//!    continuum level of a normalised light curve instead of dragging the
//!    edges towards zero
//! 2. `dd_i = |median_i - y_i|`, `mad = mean(dd)`
//! 3. keep `i` when `dd_i < clip * mad`
//!
//! A sample lying exactly on its running median is never rejected, which
//! keeps a noiseless series intact (`mad == 0` would otherwise reject
//! everything).

use crate::domain::{ClipOptions, ClipResult};
use crate::error::TitaniaError;
use crate::math::{mean, medfilt};

/// Remove points more than `opts.clip` mean absolute deviations away from the
/// running median of `y`.
///
/// `x`, `y` and `yerr` (when given) are filtered together. The rejection mask
/// in the result is aligned with the input.
pub fn clip_outliers(
    x: &[f64],
    y: &[f64],
    yerr: Option<&[f64]>,
    opts: &ClipOptions,
) -> Result<ClipResult, TitaniaError> {
    TitaniaError::check_same_len("x", x.len(), "y", y.len())?;
    if let Some(yerr) = yerr {
        TitaniaError::check_same_len("y", y.len(), "yerr", yerr.len())?;
    }

    let shifted: Vec<f64> = y.iter().map(|v| v - 1.0).collect();
    let running = medfilt(&shifted, opts.width)?;

    let dd: Vec<f64> = running
        .iter()
        .zip(y)
        .map(|(m, v)| (m + 1.0 - v).abs())
        .collect();
    let mad = mean(&dd);
    let cutoff = opts.clip * mad;

    let rejected: Vec<bool> = dd.iter().map(|&d| !(d == 0.0 || d < cutoff)).collect();

    let keep = |values: &[f64]| -> Vec<f64> {
        values
            .iter()
            .zip(&rejected)
            .filter(|&(_, &r)| !r)
            .map(|(&v, _)| v)
            .collect()
    };

    let x_kept = keep(x);
    let y_kept = keep(y);
    let yerr_kept = yerr.map(keep);
    let result = ClipResult {
        x: x_kept,
        y: y_kept,
        yerr: yerr_kept,
        rejected,
    };

    if opts.verbose {
        log::info!(
            target: "titania::signal",
            "Rejected {} points more than {:.1} x MAD from the median",
            result.n_rejected(),
            opts.clip
        );
    }
    log::debug!(target: "titania::signal", "clip: mad={mad:.6e}, cutoff={cutoff:.6e}");

    Ok(result)
}
