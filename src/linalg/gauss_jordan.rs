/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gauss-Jordan elimination with partial pivoting.
//!
//! Every entry point here funnels into `reduce`, which reduces a working
//! copy of the input to the identity while applying the very same row
//! operations to an accumulator. Start the accumulator at the identity and
//! it ends as the inverse; start it at `b` and it ends as the solution
//! of `M x = b`.

use crate::row_ops::{Rows, exchange_rows, scale_row, add_scaled_row};
use crate::settings::InverseSettings;
use crate::SingularMatrixError;

use smallmat_array_types::{Storage, Field, Matrix, Vector};

/// Invert a matrix.
///
/// The result maps back from `Dst` to `Src`. The input is never modified.
///
/// Only an exactly zero pivot is considered singular; see `inv_with` for
/// a tolerance. A tiny but nonzero pivot (e.g. a subnormal) is accepted,
/// and its reciprocal may overflow, leaving infinities or NaNs in the
/// result.
pub fn inv<X: Field, const N: usize, S, D>(m: &Matrix<X, N, S, D>) -> Result<Matrix<X, N, D, S>, SingularMatrixError>
{ inv_with(m, &InverseSettings::default()) }

pub fn inv_with<X: Field, const N: usize, S, D>(
    m: &Matrix<X, N, S, D>,
    settings: &InverseSettings,
) -> Result<Matrix<X, N, D, S>, SingularMatrixError> {
    let mut work = *m.storage();
    let mut acc = *m.storage();
    invert_into(m.storage(), &mut work, &mut acc, settings)?;
    Ok(Matrix::from_storage(acc))
}

/// Replace a matrix with its inverse.
///
/// Only available for operators on a single frame. If the matrix is
/// singular, it is left exactly as it was.
pub fn inv_in_place<X: Field, const N: usize, F>(m: &mut Matrix<X, N, F, F>) -> Result<(), SingularMatrixError>
{ inv_in_place_with(m, &InverseSettings::default()) }

pub fn inv_in_place_with<X: Field, const N: usize, F>(
    m: &mut Matrix<X, N, F, F>,
    settings: &InverseSettings,
) -> Result<(), SingularMatrixError> {
    let mut work = *m.storage();
    let mut acc = *m.storage();
    invert_into(m.storage(), &mut work, &mut acc, settings)?;
    *m.storage_mut() = acc;
    Ok(())
}

/// Solve `m * x == b` for `x`.
pub fn solve<X: Field, const N: usize, S, D>(
    m: &Matrix<X, N, S, D>,
    b: &Vector<X, N, D>,
) -> Result<Vector<X, N, S>, SingularMatrixError>
{ solve_with(m, b, &InverseSettings::default()) }

pub fn solve_with<X: Field, const N: usize, S, D>(
    m: &Matrix<X, N, S, D>,
    b: &Vector<X, N, D>,
    settings: &InverseSettings,
) -> Result<Vector<X, N, S>, SingularMatrixError> {
    let mut work = *m.storage();
    let mut rhs = *b.as_array();
    solve_into(m.storage(), &mut work, &mut rhs, settings)?;
    Ok(Vector::new(rhs))
}

// ---------------------------------------------------------------------------
// Shared with `Context`, so that both produce identical bits.

pub(crate) fn invert_into<X: Field, const N: usize>(
    input: &Storage<X, N>,
    work: &mut Storage<X, N>,
    acc: &mut Storage<X, N>,
    settings: &InverseSettings,
) -> Result<(), SingularMatrixError> {
    *work = *input;
    *acc = Storage::eye();
    let threshold = settings.singularity.threshold(input);
    reduce(work, acc, threshold)
}

pub(crate) fn solve_into<X: Field, const N: usize>(
    input: &Storage<X, N>,
    work: &mut Storage<X, N>,
    rhs: &mut [X; N],
    settings: &InverseSettings,
) -> Result<(), SingularMatrixError> {
    *work = *input;
    let threshold = settings.singularity.threshold(input);
    reduce(work, rhs, threshold)
}

/// Row index and magnitude of the largest `|work[r][c]|` for `r >= c`.
///
/// The first maximum wins, so the choice is deterministic.
pub(crate) fn select_pivot<X: Field, const N: usize>(work: &Storage<X, N>, c: usize) -> (usize, X) {
    let col = &work.as_cols()[c];
    let mut best = (c, col[c].abs());
    for r in c + 1..N {
        let magnitude = col[r].abs();
        if magnitude > best.1 {
            best = (r, magnitude);
        }
    }
    best
}

/// Reduce `work` to the identity, applying each row operation to `acc` too.
///
/// A pivot whose magnitude is `<= threshold` stops elimination with an
/// error. Both buffers are garbage in that case.
pub(crate) fn reduce<X, A, const N: usize>(
    work: &mut Storage<X, N>,
    acc: &mut A,
    threshold: X,
) -> Result<(), SingularMatrixError>
where
    X: Field,
    A: Rows<Scalar = X> + ?Sized,
{
    debug_assert_eq!(acc.num_rows(), N);

    for c in 0..N {
        let (p, magnitude) = select_pivot(work, c);
        if !(magnitude > threshold) {
            trace!("singular: best pivot in column {} is {:?} (threshold {:?})", c, magnitude, threshold);
            return Err(SingularMatrixError { column: c });
        }

        if p != c {
            trace!("pivot: exchanging rows {} and {}", c, p);
            exchange_rows(work, c, p);
            exchange_rows(acc, c, p);
        }

        // must be computed before row c changes
        let k = work.get(c, c).recip();
        if !k.is_finite() {
            trace!("pivot {:?} in column {} has no finite reciprocal", work.get(c, c), c);
        }
        scale_row(work, c, k);
        scale_row(acc, c, k);
        work.set(c, c, X::one());

        for r in 0..N {
            if r == c {
                continue;
            }
            let f = -work.get(r, c);
            add_scaled_row(work, r, c, f);
            add_scaled_row(acc, r, c, f);
        }
    }

    debug_assert!(
        !work.as_flat().iter().all(|x| x.is_finite()) || work.is_identity(),
        "(BUG) elimination did not reach the identity: {:?}", work,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SingularityTest;
    use smallmat_array_types::{M22, M33, M44, V3};

    #[test]
    fn test_inverse_2() {
        let actual = inv(&M22::<f64>::from_rows([[7., 2.], [-11., 4.]])).unwrap();
        let expected = [
            [ 2./25., -1./25.],
            [11./50.,  7./50.],
        ];
        assert_close!(abs=1e-12, actual.into_rows(), expected);
    }

    #[test]
    fn test_inverse_3() {
        let actual = inv(&M33::<f64>::from_rows([[1., 2., 4.], [5., 2., 1.], [3., 6., 3.]])).unwrap();
        let expected = [
            [ 0./1.,  1./4., -1./12.],
            [-1./6., -1./8., 19./72.],
            [ 1./3.,  0./1., -1./9. ],
        ];
        assert_close!(abs=1e-12, actual.into_rows(), expected);
    }

    #[test]
    fn diagonal() {
        let m = M44::<f64>::from_diag([2.0, 2.0, 2.0, 2.0]);
        assert_eq!(inv(&m).unwrap(), M44::from_diag([0.5, 0.5, 0.5, 0.5]));

        let m = M44::<f32>::from_diag([2.0, 2.0, 2.0, 2.0]);
        assert_eq!(inv(&m).unwrap(), M44::from_diag([0.5, 0.5, 0.5, 0.5]));
    }

    #[test]
    fn block_permutation() {
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

        // and the exact values
        assert_close!(rel=1e-12, minv[(0, 0)], -3.0 / 32.0);
        assert_close!(rel=1e-12, minv[(1, 1)], -4.0 / 135.0);
    }

    #[test]
    fn identity_is_exact() {
        assert!(inv(&M22::<f64>::eye()).unwrap().is_identity());
        assert!(inv(&M33::<f32>::eye()).unwrap().is_identity());
        assert!(inv(&M44::<f64>::eye()).unwrap().is_identity());
    }

    #[test]
    fn zero_is_singular() {
        assert_eq!(inv(&M22::<f64>::zero()), Err(SingularMatrixError { column: 0 }));
        assert_eq!(inv(&M33::<f32>::zero()), Err(SingularMatrixError { column: 0 }));
        assert_eq!(inv(&M44::<f64>::zero()), Err(SingularMatrixError { column: 0 }));
        assert!(inv(&smallmat_array_types::Matrix::<f64, 1>::zero()).is_err());
    }

    #[test]
    fn rank_deficient() {
        // third row is the sum of the first two
        let m = M33::<f64>::from_rows([
            [1.0, 2.0, 4.0],
            [0.0, 1.0, 8.0],
            [1.0, 3.0, 12.0],
        ]);
        assert_eq!(inv(&m), Err(SingularMatrixError { column: 2 }));
    }

    #[test]
    fn in_place() {
        let mut m = M33::<f64>::from_rows([[1., 2., 4.], [5., 2., 1.], [3., 6., 3.]]);
        let expected = inv(&m).unwrap();
        inv_in_place(&mut m).unwrap();
        assert_eq!(m, expected);
    }

    #[test]
    fn in_place_failure_is_untouched() {
        let original = M33::<f64>::from_rows([
            [2.0, 4.0, 6.0],
            [1.0, 2.0, 3.0],
            [0.5, 7.0, 1.0],
        ]);
        let mut m = original;
        assert!(inv_in_place(&mut m).is_err());
        assert_eq!(m.as_flat(), original.as_flat());
    }

    #[test]
    fn relative_test() {
        let m = M22::<f64>::from_rows([[1.0, 1.0], [1.0, 1.0 + 1e-13]]);
        assert!(inv(&m).is_ok());

        let settings = InverseSettings::relative(1e-9);
        assert_eq!(inv_with(&m, &settings), Err(SingularMatrixError { column: 1 }));

        let mut m2 = m;
        assert!(inv_in_place_with(&mut m2, &settings).is_err());
        assert_eq!(m2, m);

        // well-conditioned matrices are unaffected
        let m = M22::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(inv_with(&m, &settings).unwrap(), inv(&m).unwrap());
    }

    #[test]
    fn negative_tolerance_still_rejects_zero_pivots() {
        let m = M33::<f64>::from_rows([
            [1.0, 2.0, 4.0],
            [0.0, 1.0, 8.0],
            [1.0, 3.0, 12.0],
        ]);
        let settings = InverseSettings { singularity: SingularityTest::Relative { rel: -1.0 } };
        assert_eq!(inv_with(&m, &settings), Err(SingularMatrixError { column: 2 }));
        assert_eq!(inv_with(&m, &settings), inv(&m));
    }

    #[test]
    fn subnormal_pivot_is_accepted() {
        let m = M22::<f64>::from_diag([1e-310, 1.0]);
        let minv = inv(&m).unwrap();
        assert!(!minv[(0, 0)].is_finite());
        assert_eq!(minv[(1, 1)], 1.0);
    }

    #[test]
    fn solve_system() {
        let m = M33::<f64>::from_rows([[1., 2., 4.], [5., 2., 1.], [3., 6., 3.]]);
        let b = V3::new([1.0, -2.0, 0.5]);
        let x = solve(&m, &b).unwrap();
        assert_close!(abs=1e-12, (&m * &x).into_array(), b.into_array());
        assert_close!(abs=1e-12, x.into_array(), (&inv(&m).unwrap() * &b).into_array());

        assert!(solve(&M33::<f64>::zero(), &b).is_err());
    }
}
