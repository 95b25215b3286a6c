//! Spatially correlated noise synthesis.
//!
//! White standard-normal noise is passed through a separable Gaussian
//! filter with wrap-around boundaries. The filter width tracks the
//! current correlation length: `sigma = xi * XI_TO_SIGMA`.

use rand::Rng;
use rand_distr::StandardNormal;

use quench_core::constants::{KERNEL_TRUNCATE, NOISE_AMPLITUDE, XI_TO_SIGMA};

/// Correlated-noise generator. Holds scratch buffers so per-tick
/// generation does not allocate.
pub struct CorrelatedNoise {
    size: usize,
    white: Vec<f64>,
    scratch: Vec<f64>,
    smoothed: Vec<f64>,
    kernel: Vec<f64>,
}

impl CorrelatedNoise {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            white: vec![0.0; size * size],
            scratch: vec![0.0; size * size],
            smoothed: vec![0.0; size * size],
            kernel: Vec::new(),
        }
    }

    /// Generate a fresh correlated-noise grid for correlation length `xi`.
    ///
    /// The returned slice is row-major, `size * size` long, already scaled
    /// by `NOISE_AMPLITUDE`, and valid until the next call.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, xi: f64) -> &[f64] {
        for cell in &mut self.white {
            *cell = rng.sample::<f64, _>(StandardNormal);
        }

        let sigma = xi * XI_TO_SIGMA;
        let radius = kernel_radius(sigma);
        if radius == 0 {
            // Degenerate width: the filter is the identity.
            for (out, &w) in self.smoothed.iter_mut().zip(&self.white) {
                *out = w * NOISE_AMPLITUDE;
            }
            return &self.smoothed;
        }

        build_kernel(sigma, radius, &mut self.kernel);
        convolve_rows(self.size, &self.white, &self.kernel, &mut self.scratch);
        convolve_cols(self.size, &self.scratch, &self.kernel, &mut self.smoothed);

        for cell in &mut self.smoothed {
            *cell *= NOISE_AMPLITUDE;
        }
        &self.smoothed
    }
}

/// Truncation radius in cells for a Gaussian of width `sigma`.
pub fn kernel_radius(sigma: f64) -> usize {
    if sigma <= 0.0 {
        return 0;
    }
    (KERNEL_TRUNCATE * sigma + 0.5) as usize
}

/// Fill `kernel` with a normalized Gaussian of width `sigma` spanning
/// `[-radius, radius]`.
pub fn build_kernel(sigma: f64, radius: usize, kernel: &mut Vec<f64>) {
    kernel.clear();
    let denom = 2.0 * sigma * sigma;
    let mut sum = 0.0;
    for k in -(radius as isize)..=(radius as isize) {
        let x = k as f64;
        let w = (-x * x / denom).exp();
        kernel.push(w);
        sum += w;
    }
    for w in kernel.iter_mut() {
        *w /= sum;
    }
}

/// 1D convolution along each row with wrap-around indexing.
fn convolve_rows(size: usize, input: &[f64], kernel: &[f64], output: &mut [f64]) {
    let radius = (kernel.len() / 2) as isize;
    let n = size as isize;
    for row in 0..size {
        let base = row * size;
        for col in 0..size {
            let mut acc = 0.0;
            for (i, &w) in kernel.iter().enumerate() {
                let offset = i as isize - radius;
                let c = (col as isize + offset).rem_euclid(n) as usize;
                acc += w * input[base + c];
            }
            output[base + col] = acc;
        }
    }
}

/// 1D convolution along each column with wrap-around indexing.
fn convolve_cols(size: usize, input: &[f64], kernel: &[f64], output: &mut [f64]) {
    let radius = (kernel.len() / 2) as isize;
    let n = size as isize;
    for col in 0..size {
        for row in 0..size {
            let mut acc = 0.0;
            for (i, &w) in kernel.iter().enumerate() {
                let offset = i as isize - radius;
                let r = (row as isize + offset).rem_euclid(n) as usize;
                acc += w * input[r * size + col];
            }
            output[row * size + col] = acc;
        }
    }
}
