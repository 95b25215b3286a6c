//! Initial field construction.

use rand::Rng;
use rand_distr::StandardNormal;

use quench_core::constants::INITIAL_AMPLITUDE;
use quench_core::field::ScalarField;

/// Build the initial field: small-amplitude white noise from the seeded RNG.
pub fn initial_field<R: Rng>(size: usize, rng: &mut R) -> ScalarField {
    let mut field = ScalarField::zeros(size);
    for cell in field.as_mut_slice() {
        *cell = rng.sample::<f64, _>(StandardNormal) * INITIAL_AMPLITUDE;
    }
    field
}
