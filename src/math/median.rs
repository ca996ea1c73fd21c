//! Means, medians and the zero-padded running median.
//!
//! `medfilt` is the classic 1-D median filter: the window is centred on each
//! sample and samples falling outside the series are treated as `0.0`. The
//! output has the same length as the input.

use rayon::prelude::*;

use crate::error::TitaniaError;

/// Series length from which the running median fans out over rayon.
const PAR_THRESHOLD: usize = 4096;

/// Arithmetic mean. Empty input gives NaN.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of a slice (mean of the two middle values for an even count).
///
/// Returns `None` for empty input.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut buf = values.to_vec();
    median_mut(&mut buf)
}

/// Median that reorders `values` in place.
///
/// Ordering is IEEE total order, so NaNs sort to the ends instead of
/// scrambling the sort.
pub fn median_mut(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Zero-padded running median with an odd window `width`.
pub fn medfilt(values: &[f64], width: usize) -> Result<Vec<f64>, TitaniaError> {
    if width == 0 || width % 2 == 0 {
        return Err(TitaniaError::InvalidWindow(width));
    }
    let n = values.len();
    let half = width / 2;

    log::debug!(target: "titania::signal", "medfilt: n={n}, width={width}");

    let out: Vec<f64> = if n >= PAR_THRESHOLD {
        (0..n)
            .into_par_iter()
            .map_init(
                || Vec::with_capacity(width),
                |buf, i| window_median(values, i, half, buf),
            )
            .collect()
    } else {
        let mut buf = Vec::with_capacity(width);
        (0..n)
            .map(|i| window_median(values, i, half, &mut buf))
            .collect()
    };
    Ok(out)
}

/// Median of `values[i-half..=i+half]`, with out-of-range samples read as zero.
fn window_median(values: &[f64], i: usize, half: usize, buf: &mut Vec<f64>) -> f64 {
    buf.clear();
    let n = values.len() as isize;
    let centre = i as isize;
    for j in (centre - half as isize)..=(centre + half as isize) {
        if j < 0 || j >= n {
            buf.push(0.0);
        } else {
            buf.push(values[j as usize]);
        }
    }
    // The window length is odd, so the median is the middle order statistic.
    let mid = buf.len() / 2;
    let (_, m, _) = buf.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
    *m
}
