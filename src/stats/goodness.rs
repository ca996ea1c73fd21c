//! Goodness-of-fit statistics: reduced chi-square and R².
//!
//! Neither function guards its denominator. Zero errors, `len(data) <= npar`
//! or a constant `obs` series produce NaN/∞ exactly as the arithmetic does.
//!
//! Paired slices must have equal lengths; a mismatch is a caller bug and
//! panics in the vector arithmetic.

use nalgebra::DVector;

/// Reduced chi-square: `Σ((data - model) / error)² / (len(data) - npar)`.
///
/// - `≈ 1`: the model describes the data within the quoted errors
/// - `≪ 1`: errors overestimated, or the model overfits
/// - `≫ 1`: errors underestimated, or the model underfits
pub fn red_chisquare(data: &[f64], model: &[f64], error: &[f64], npar: usize) -> f64 {
    let data_v = DVector::from_column_slice(data);
    let model_v = DVector::from_column_slice(model);
    let error_v = DVector::from_column_slice(error);

    let normalized = (data_v - model_v).component_div(&error_v);
    let chi2 = normalized.norm_squared();
    chi2 / (data.len() as f64 - npar as f64)
}

/// Coefficient of determination `1 - SS_res / SS_tot` (best possible value 1.0).
pub fn r_squared(obs: &[f64], calc: &[f64]) -> f64 {
    let obs_v = DVector::from_column_slice(obs);
    let calc_v = DVector::from_column_slice(calc);

    let ss_res = (&obs_v - calc_v).norm_squared();
    let mean = obs_v.sum() / obs.len() as f64;
    let ss_tot = obs_v.add_scalar(-mean).norm_squared();
    1.0 - ss_res / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_chisquare_zero_for_perfect_model() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let err = [0.1, 0.2, 0.1, 0.3];
        assert_eq!(red_chisquare(&data, &data, &err, 1), 0.0);
    }

    #[test]
    fn red_chisquare_matches_hand_computation() {
        let data = [1.0, 2.0, 3.0];
        let model = [0.0, 2.0, 5.0];
        let err = [1.0, 1.0, 2.0];
        // (1 + 0 + 1) / (3 - 1)
        assert!((red_chisquare(&data, &model, &err, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn red_chisquare_zero_dof_is_infinite() {
        let v = red_chisquare(&[1.0, 2.0], &[0.0, 0.0], &[1.0, 1.0], 2);
        assert!(v.is_infinite());
    }

    #[test]
    fn r_squared_is_one_for_identical_series() {
        let obs = [0.3, 1.2, -0.7, 2.2];
        assert!((r_squared(&obs, &obs) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn r_squared_of_mean_model_is_zero() {
        let obs = [1.0, 2.0, 3.0, 6.0];
        let calc = [3.0; 4];
        assert!(r_squared(&obs, &calc).abs() < 1e-12);
    }

    #[test]
    fn r_squared_constant_obs_is_not_finite() {
        let v = r_squared(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(!v.is_finite());
    }
}
