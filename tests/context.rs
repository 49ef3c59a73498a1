/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use pretty_assertions::assert_eq;

use smallmat::{Context, InverseSettings, Matrix, Vector};
use smallmat::{inv, inv_with, inv_in_place, solve, det};

mod shared;

fn check_context_agrees<const N: usize>() {
    let mut rng = shared::rng();
    let mut ctx = Context::<f64, N>::new();
    for _ in 0..20 {
        let m = shared::well_conditioned::<N>(&mut rng);

        let expected = inv(&m).unwrap();
        let actual = ctx.inv(&m).unwrap();
        assert_eq!(actual.as_flat(), expected.as_flat());

        let mut in_place = m;
        ctx.inv_in_place(&mut in_place).unwrap();
        let mut expected_in_place = m;
        inv_in_place(&mut expected_in_place).unwrap();
        assert_eq!(in_place.as_flat(), expected_in_place.as_flat());

        let b = Vector::<f64, N>::from_fn(|i| (i * i) as f64);
        assert_eq!(ctx.solve(&m, &b), solve(&m, &b));
        assert_eq!(ctx.det(&m).to_bits(), det(&m).to_bits());
    }

    assert!(ctx.inv(&Matrix::<f64, N>::zero()).is_err());
}

#[test]
fn context_agrees_bitwise() {
    shared::init_logger();
    check_context_agrees::<1>();
    check_context_agrees::<2>();
    check_context_agrees::<3>();
    check_context_agrees::<4>();
}

#[test]
fn f32_context() {
    let mut rng = shared::rng();
    let mut ctx = Context::<f32, 4>::default();
    let m = shared::well_conditioned::<4>(&mut rng).map(|x| x as f32);
    assert_eq!(ctx.inv(&m), inv(&m));
}

#[test]
fn relative_settings() {
    shared::init_logger();
    let settings = InverseSettings::relative(1e-10);
    let mut ctx = Context::<f64, 3>::with_settings(settings);

    let near_singular = Matrix::<f64, 3>::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0 + 1e-12],
    ]);
    assert!(inv(&near_singular).is_ok());
    assert!(ctx.inv(&near_singular).is_err());
    assert_eq!(ctx.inv(&near_singular), inv_with(&near_singular, &settings));

    let mut m = near_singular;
    assert!(ctx.inv_in_place(&mut m).is_err());
    assert_eq!(m.as_flat(), near_singular.as_flat());
}
