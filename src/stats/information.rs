//! Information criteria and the Bayes-factor approximation.
//!
//! - BIC = -2 ln L + k ln(n)
//! - AICc = -2 ln L + 2k + 2k(k+1)/(n-k-1)
//! - BF ≈ exp(-ΔBIC / 2)
//!
//! Lower BIC/AIC is preferred. The AICc correction term blows up when
//! `n - k - 1 == 0`; [`aic`] records such a fit as `0.0` and logs a warning,
//! [`aic_checked`] reports it as an error instead.

use crate::error::TitaniaError;

/// Bayesian information criterion for a fit with maximised log-likelihood
/// `log_like`, `n` observations and `k` free parameters.
pub fn bic(log_like: f64, n: usize, k: usize) -> f64 {
    -2.0 * log_like + k as f64 * (n as f64).ln()
}

/// Raw AICc, non-finite when the correction denominator vanishes.
fn aic_value(log_like: f64, n: usize, k: usize) -> f64 {
    let k_f = k as f64;
    -2.0 * log_like + 2.0 * k_f + 2.0 * k_f * (k_f + 1.0) / (n as f64 - k_f - 1.0)
}

/// Small-sample corrected Akaike information criterion, without any fallback.
///
/// Returns [`TitaniaError::NonFiniteStatistic`] when the value is NaN or ±∞.
pub fn aic_checked(log_like: f64, n: usize, k: usize) -> Result<f64, TitaniaError> {
    let value = aic_value(log_like, n, k);
    if !value.is_finite() {
        return Err(TitaniaError::NonFiniteStatistic { name: "AIC", value });
    }
    Ok(value)
}

/// Small-sample corrected Akaike information criterion.
///
/// A non-finite result is recorded as `0.0` and a warning is logged on the
/// `titania::stats` target. Use [`aic_checked`] to tell the two apart.
pub fn aic(log_like: f64, n: usize, k: usize) -> f64 {
    let value = aic_value(log_like, n, k);
    if value.is_finite() {
        value
    } else {
        non_finite_aic_fallback(log_like, n, k, value)
    }
}

fn non_finite_aic_fallback(log_like: f64, n: usize, k: usize, value: f64) -> f64 {
    log::warn!(
        target: "titania::stats",
        "AIC was NAN. Recording zero, but you should examine your fit. \
         (log_like={log_like}, n={n}, k={k}, value={value})"
    );
    0.0
}

/// Approximate Bayes factor from a BIC difference.
pub fn bf_from_bic(del_bic: f64) -> f64 {
    (-del_bic / 2.0).exp()
}
