//! Post-transition field update: reaction-diffusion relaxation.
//!
//! Diffusion spreads structure, the cubic term caps its amplitude, and a
//! small residual noise keeps the pattern alive. Runs from the transition
//! tick onward.

use quench_core::constants::{RELAXATION_CUBIC, RELAXATION_DIFFUSION, RELAXATION_NOISE_GAIN};
use quench_core::field::ScalarField;

/// `field += diffusion * laplacian - cubic * field^3 + noise * gain`.
///
/// The Laplacian is evaluated on the pre-update field via `lap_buffer`,
/// which is resized as needed and reused across ticks.
pub fn run(field: &mut ScalarField, noise: &[f64], lap_buffer: &mut Vec<f64>) {
    let size = field.size();
    lap_buffer.clear();
    lap_buffer.resize(size * size, 0.0);

    for row in 0..size {
        for col in 0..size {
            lap_buffer[row * size + col] = field.laplacian_at(row, col);
        }
    }

    for ((cell, &lap), &n) in field
        .as_mut_slice()
        .iter_mut()
        .zip(lap_buffer.iter())
        .zip(noise)
    {
        let f = *cell;
        *cell = f + RELAXATION_DIFFUSION * lap - RELAXATION_CUBIC * f * f * f
            + n * RELAXATION_NOISE_GAIN;
    }
}
