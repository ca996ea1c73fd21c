//! Spectral resolution helpers.
//!
//! - estimate the resolving power of a wavelength grid
//! - degrade a spectrum to a lower resolution (Gaussian convolution + resampling)

pub mod convolve;
pub mod resolution;

pub use convolve::*;
pub use resolution::*;
