/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate smallmat_assert_close;

use pretty_assertions::assert_eq;

use smallmat::{Matrix, M44, Storage, SingularMatrixError};
use smallmat::{inv, inv_in_place, solve, det, det_cofactor, Vector};
use smallmat::row_ops::{exchange_rows, scale_row};

mod shared;

const TRIALS: usize = 20;

fn check_inverse_properties<const N: usize>() {
    let mut rng = shared::rng();
    for _ in 0..TRIALS {
        let m = shared::well_conditioned::<N>(&mut rng);
        let minv = inv(&m).unwrap();

        let eye = Matrix::<f64, N>::eye();
        let left = &minv * &m;
        let right = &m * &minv;
        let twice = inv(&minv).unwrap();
        assert_close!(abs=1e-12, left.as_flat(), eye.as_flat());
        assert_close!(abs=1e-12, right.as_flat(), eye.as_flat());
        assert_close!(rel=1e-12, abs=1e-12, twice.as_flat(), m.as_flat());
    }
}

#[test]
fn inverse_properties() {
    shared::init_logger();
    check_inverse_properties::<1>();
    check_inverse_properties::<2>();
    check_inverse_properties::<3>();
    check_inverse_properties::<4>();
}

fn check_identity_and_zero<const N: usize>() {
    assert_eq!(inv(&Matrix::<f64, N>::eye()), Ok(Matrix::eye()));
    assert_eq!(inv(&Matrix::<f32, N>::eye()), Ok(Matrix::eye()));
    assert_eq!(inv(&Matrix::<f64, N>::zero()), Err(SingularMatrixError { column: 0 }));
    assert_eq!(inv(&Matrix::<f32, N>::zero()), Err(SingularMatrixError { column: 0 }));

    assert_eq!(det(&Matrix::<f64, N>::eye()), 1.0);
    assert_eq!(det(&Matrix::<f64, N>::zero()), 0.0);
}

#[test]
fn identity_and_zero() {
    shared::init_logger();
    check_identity_and_zero::<1>();
    check_identity_and_zero::<2>();
    check_identity_and_zero::<3>();
    check_identity_and_zero::<4>();
}

fn check_det_properties<const N: usize>() {
    let mut rng = shared::rng();
    for _ in 0..TRIALS {
        let m = shared::integer_valued::<N>(&mut rng);
        // integers this small are exact in floating point
        assert_eq!(det_cofactor(&m), det_cofactor(&m.map(|x| x as i64)) as f64);
        assert_close!(rel=1e-9, abs=1e-9, det(&m), det_cofactor(&m));

        let k = 1.5f64;
        assert_close!(rel=1e-9, abs=1e-9, det(&(m * k)), k.powi(N as i32) * det(&m));
    }
}

#[test]
fn det_properties() {
    check_det_properties::<1>();
    check_det_properties::<2>();
    check_det_properties::<3>();
    check_det_properties::<4>();
}

#[test]
fn scenario_diagonal() {
    let m = M44::<f64>::from_diag([2.0, 2.0, 2.0, 2.0]);
    assert_eq!(inv(&m).unwrap(), M44::from_diag([0.5, 0.5, 0.5, 0.5]));
}

#[test]
fn scenario_interleaved_blocks() {
    let m = M44::<f64>::from_rows([
        [1.0,  0.0, 5.0,  0.0],
        [0.0,  2.0, 0.0, 11.0],
        [7.0,  0.0, 3.0,  0.0],
        [0.0, 13.0, 0.0,  4.0],
    ]);
    let minv = inv(&m).unwrap();
    assert_close!(abs=0.01, minv[(0, 0)], -0.09375);
    assert_close!(abs=0.01, minv[(0, 2)], 0.15625);
    assert_close!(abs=0.01, minv[(1, 1)], -0.0296);
    assert_close!(abs=0.01, minv[(3, 3)], -0.01481);

    let m = m.map(|x| x as f32);
    let minv = inv(&m).unwrap();
    assert_close!(abs=0.01, minv[(0, 0)], -0.09375);
    assert_close!(abs=0.01, minv[(3, 3)], -0.01481);
}

#[test]
fn scenario_exchange_twice() {
    let original = Storage::<i32, 4>::from_rows([
        [ 1,  2,  3,  4],
        [ 5,  6,  7,  8],
        [ 9, 10, 11, 12],
        [13, 14, 15, 16],
    ]);
    let mut m = original;
    exchange_rows(&mut m, 0, 3);
    assert_ne!(m, original);
    exchange_rows(&mut m, 0, 3);
    assert_eq!(m, original);
}

#[test]
fn scale_row_round_trip() {
    let mut rng = shared::rng();
    let original = shared::well_conditioned::<4>(&mut rng).into_storage();
    let mut m = original;
    for &k in &[3.0, -0.1, 1e5] {
        scale_row(&mut m, 2, k);
        scale_row(&mut m, 2, 1.0 / k);
        assert_close!(rel=1e-14, m.row(2), original.row(2));
    }
}

#[test]
fn in_place_matches_allocating() {
    let mut rng = shared::rng();
    let m = shared::well_conditioned::<3>(&mut rng);
    let mut m2 = m;
    inv_in_place(&mut m2).unwrap();
    assert_eq!(m2, inv(&m).unwrap());
}

fn check_solve<const N: usize>() {
    let mut rng = shared::rng();
    for _ in 0..TRIALS {
        let m = shared::well_conditioned::<N>(&mut rng);
        let b = Vector::<f64, N>::from_fn(|i| i as f64 - 1.0);
        let x = solve(&m, &b).unwrap();
        assert_close!(abs=1e-12, (&m * &x).into_array(), b.into_array());
    }
    assert!(solve(&Matrix::<f64, N>::zero(), &Vector::zero()).is_err());
}

#[test]
fn solve_properties() {
    check_solve::<1>();
    check_solve::<2>();
    check_solve::<3>();
    check_solve::<4>();
}
