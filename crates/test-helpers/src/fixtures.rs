// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use ark_ff::UniformRand;
use polystore_polynomial::{Fr, Polynomial};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Polynomial with the given small coefficients.
pub fn poly_of(values: &[u64]) -> Polynomial<Fr> {
    Polynomial::from_u64s(values)
}

pub fn create_rng_from_u64(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Polynomial of `len` uniformly random elements.
pub fn random_polynomial(rng: &mut ChaCha20Rng, len: usize) -> Polynomial<Fr> {
    (0..len).map(|_| Fr::rand(rng)).collect()
}
