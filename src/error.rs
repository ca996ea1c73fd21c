//! Error type for structural input faults.
//!
//! Numeric edge cases (zero errors, constant observations, `n == k + 1` in the
//! AIC correction) are *not* errors: they surface as IEEE NaN/∞ just like the
//! underlying arithmetic produces them. `TitaniaError` only covers inputs that
//! cannot be processed at all (mismatched paired series, a median window that
//! has no centre, a wavelength grid too short to difference).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TitaniaError {
    /// Paired series (`x`/`y`/`yerr`, wavelength/flux) differ in length.
    #[error("Length mismatch: {left_name} has {left} samples but {right_name} has {right}.")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// Too few samples for the requested computation.
    #[error("Too few points: got {got}, need at least {min}.")]
    TooFewPoints { got: usize, min: usize },

    /// Running-median windows must be odd (and non-zero) so they have a centre.
    #[error("Median window width must be a positive odd integer, got {0}.")]
    InvalidWindow(usize),

    /// Gaussian kernel width must be finite and positive.
    #[error("Invalid Gaussian kernel width: sigma={0}.")]
    InvalidKernelWidth(f64),

    /// A statistic evaluated to NaN or ±∞.
    #[error("{name} is not finite ({value}).")]
    NonFiniteStatistic { name: &'static str, value: f64 },

    /// Invalid generator/option setting.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl TitaniaError {
    pub(crate) fn check_same_len(
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    ) -> Result<(), TitaniaError> {
        if left != right {
            return Err(TitaniaError::LengthMismatch {
                left_name,
                left,
                right_name,
                right,
            });
        }
        Ok(())
    }
}
