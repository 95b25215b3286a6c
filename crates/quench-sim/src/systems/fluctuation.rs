//! Pre-transition field update: damped fluctuations.
//!
//! The field has no restoring structure yet; it is exponentially damped
//! and continuously re-excited by correlated noise.

use quench_core::constants::{FLUCTUATION_DAMPING, FLUCTUATION_NOISE_GAIN};
use quench_core::field::ScalarField;

/// `field = field * damping + noise * gain`, elementwise.
pub fn run(field: &mut ScalarField, noise: &[f64]) {
    for (cell, &n) in field.as_mut_slice().iter_mut().zip(noise) {
        *cell = *cell * FLUCTUATION_DAMPING + n * FLUCTUATION_NOISE_GAIN;
    }
}
