//! FFT-based convolution.
//!
//! `convolve_fft` matches the contract the spectral code relies on:
//!
//! - linear (not circular) convolution; samples beyond the edges are zero
//! - the output is cropped to the signal length, aligned on the kernel centre
//! - NaN samples are interpolated over: they are zeroed and the result is
//!   divided by the convolved validity mask, so a NaN only borrows from its
//!   valid neighbours
//!
//! The kernel is expected to be odd-length and normalised (see
//! [`crate::math::gaussian_kernel`]).

use num_complex::Complex;
use rustfft::FftPlanner;

/// Convolve `signal` with `kernel`, returning a series of `signal.len()` samples.
pub fn convolve_fft(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    if n == 0 || kernel.is_empty() {
        return signal.to_vec();
    }
    let offset = kernel.len() / 2;

    let has_nan = signal.iter().any(|v| v.is_nan());
    let zeroed: Vec<f64> = signal
        .iter()
        .map(|&v| if v.is_nan() { 0.0 } else { v })
        .collect();

    let full = fft_convolve_full(&zeroed, kernel);
    let mut out: Vec<f64> = full[offset..offset + n].to_vec();

    if has_nan {
        // Padding counts as valid (weight 1), so the weight is 1 minus the
        // kernel mass that lands on NaN samples.
        let nan_mask: Vec<f64> = signal
            .iter()
            .map(|v| if v.is_nan() { 1.0 } else { 0.0 })
            .collect();
        let lost = fft_convolve_full(&nan_mask, kernel);
        for (i, v) in out.iter_mut().enumerate() {
            let weight = 1.0 - lost[offset + i];
            *v = if weight > f64::EPSILON { *v / weight } else { f64::NAN };
        }
    }

    out
}

/// Full linear convolution (`a.len() + b.len() - 1` samples) via zero-padded FFTs.
pub fn fft_convolve_full(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let len = a.len() + b.len() - 1;
    let size = len.next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let fft_forward = planner.plan_fft_forward(size);
    let fft_inverse = planner.plan_fft_inverse(size);

    let mut a_fft = padded_complex(a, size);
    let mut b_fft = padded_complex(b, size);
    fft_forward.process(&mut a_fft);
    fft_forward.process(&mut b_fft);

    let mut product: Vec<Complex<f64>> = a_fft
        .iter()
        .zip(b_fft.iter())
        .map(|(x, y)| x * y)
        .collect();
    fft_inverse.process(&mut product);

    // rustfft leaves the inverse unnormalised.
    let scale = 1.0 / size as f64;
    product[..len].iter().map(|c| c.re * scale).collect()
}

fn padded_complex(values: &[f64], size: usize) -> Vec<Complex<f64>> {
    let mut buf: Vec<Complex<f64>> = values.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buf.resize(size, Complex::new(0.0, 0.0));
    buf
}
