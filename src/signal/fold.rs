//! Orbital phase folding and smooth time grids.

/// Orbital phase of a single time stamp.
///
/// `((t - t0 + P/2) mod P - P/2) / P`, using a floored modulo so the result
/// lies in `[-0.5, 0.5)` for a positive period and the reference epoch maps
/// to phase 0.
pub fn phase_of(t: f64, period: f64, t0: f64) -> f64 {
    let half = 0.5 * period;
    (floored_mod(t - t0 + half, period) - half) / period
}

/// Phase-fold `t` on `period` around `t0`.
///
/// The phases are returned in the order of `t` (not sorted).
pub fn phase_fold(t: &[f64], period: f64, t0: f64) -> Vec<f64> {
    t.iter().map(|&ti| phase_of(ti, period, t0)).collect()
}

/// `n` equally spaced points spanning `[min(t), max(t)]`, e.g. for evaluating
/// a smooth model over an observation window.
pub fn time_grid(t: &[f64], n: usize) -> Vec<f64> {
    let Some(lo) = t.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let hi = t.iter().copied().fold(lo, f64::max);

    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n as f64 - 1.0);
            let mut out: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
            out[n - 1] = hi;
            out
        }
    }
}

/// Modulo whose result takes the sign of the divisor.
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_epoch_is_phase_zero() {
        for &(t0, p) in &[(0.0, 1.0), (2458000.123, 3.5), (-12.5, 0.7)] {
            assert_eq!(phase_of(t0, p, t0), 0.0);
        }
    }

    #[test]
    fn phases_stay_in_half_open_interval() {
        let t: Vec<f64> = (0..500).map(|i| -40.0 + i as f64 * 0.173).collect();
        for ph in phase_fold(&t, 2.3, 1.1) {
            assert!((-0.5..0.5).contains(&ph), "phase {ph}");
        }
    }

    #[test]
    fn fold_is_periodic_and_keeps_order() {
        let p = 1.75;
        let t0 = 10.0;
        let t = [10.2, 9.0, 13.9, 11.0];
        let a = phase_fold(&t, p, t0);
        let shifted: Vec<f64> = t.iter().map(|v| v + p).collect();
        let b = phase_fold(&shifted, p, t0);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
        // Half a period before t0 wraps to -0.5; a quarter after is +0.25.
        assert!((phase_of(t0 - 0.5 * p, p, t0) + 0.5).abs() < 1e-12);
        assert!((phase_of(t0 + 0.25 * p, p, t0) - 0.25).abs() < 1e-12);
        assert!((a[0] - 0.2 / p).abs() < 1e-12);
    }

    #[test]
    fn floored_mod_matches_sign_of_divisor() {
        assert_eq!(floored_mod(-1.0, 3.0), 2.0);
        assert_eq!(floored_mod(4.0, 3.0), 1.0);
        assert_eq!(floored_mod(1.0, -3.0), -2.0);
    }

    #[test]
    fn time_grid_spans_observations() {
        let t = [3.0, 1.0, 2.0, 5.0];
        let grid = time_grid(&t, 5);
        assert_eq!(grid, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(time_grid(&t, 1), vec![1.0]);
        assert!(time_grid(&t, 0).is_empty());
        assert!(time_grid(&[], 10).is_empty());
    }
}
