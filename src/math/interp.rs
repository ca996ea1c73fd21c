//! Piecewise-linear interpolation.
//!
//! Semantics:
//! - `xp` must be increasing (not checked)
//! - queries left of `xp[0]` return `fp[0]`, right of the last knot return the last value
//! - a NaN query returns NaN

use crate::error::TitaniaError;

/// Interpolate `(xp, fp)` at every point of `x`.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Result<Vec<f64>, TitaniaError> {
    TitaniaError::check_same_len("xp", xp.len(), "fp", fp.len())?;
    if xp.is_empty() {
        return Err(TitaniaError::TooFewPoints { got: 0, min: 1 });
    }
    Ok(x.iter().map(|&xi| interp_one(xi, xp, fp)).collect())
}

fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // First knot strictly greater than x; x > xp[0] guarantees j >= 1.
    let j = xp.partition_point(|&v| v <= x);
    let (x0, x1) = (xp[j - 1], xp[j]);
    let (y0, y1) = (fp[j - 1], fp[j]);
    let slope = (y1 - y0) / (x1 - x0);
    y0 + slope * (x - x0)
}
