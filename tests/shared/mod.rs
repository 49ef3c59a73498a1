/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Not every test file uses every helper.
#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use smallmat::Matrix;

/// Show library logs for failing tests. (`RUST_LOG=trace cargo test`)
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}

/// Seeded, so that failures are reproducible.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// A random matrix that is far from singular.
///
/// It is a strictly diagonally dominant matrix with its rows shuffled,
/// so that inversion has to exchange rows.
pub fn well_conditioned<const N: usize>(rng: &mut StdRng) -> Matrix<f64, N> {
    let dominant = Matrix::<f64, N>::from_fn(|r, c| {
        let x = rng.gen_range(-1.0..1.0);
        match r == c {
            true => x + if rng.gen::<bool>() { 1.0 } else { -1.0 } * (N as f64 + 1.0),
            false => x,
        }
    });
    let mut rows = dominant.into_rows();
    rows.shuffle(rng);
    Matrix::from_rows(rows)
}

/// A random matrix of small integers, stored as floats.
pub fn integer_valued<const N: usize>(rng: &mut StdRng) -> Matrix<f64, N> {
    Matrix::from_fn(|_, _| rng.gen_range(-9..=9) as f64)
}
