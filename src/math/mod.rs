//! Numerical primitives: running median, interpolation, Gaussian kernel and FFT convolution.

pub mod fft;
pub mod interp;
pub mod kernel;
pub mod median;

pub use fft::*;
pub use interp::*;
pub use kernel::*;
pub use median::*;
