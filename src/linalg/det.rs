/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::gauss_jordan::select_pivot;
use crate::row_ops::{exchange_rows, add_scaled_row};

use smallmat_array_types::{Storage, Field, Ring, Matrix};

/// Determinant, by elimination.
///
/// Uses the same pivot choice as inversion, but only eliminates below
/// the diagonal and never normalizes.
pub fn det<X: Field, const N: usize, S, D>(m: &Matrix<X, N, S, D>) -> X {
    let mut work = *m.storage();
    echelon_det(&mut work)
}

/// Determinant, by cofactor expansion along the first row.
///
/// Slower and less accurate than `det` for floats, but exact for integers.
pub fn det_cofactor<X: Ring, const N: usize, S, D>(m: &Matrix<X, N, S, D>) -> X {
    const INDICES: [usize; 4] = [0, 1, 2, 3];
    laplace(m.storage(), &INDICES[..N], &INDICES[..N])
}

// ---------------------------------------------------------------------------

pub(crate) fn echelon_det<X: Field, const N: usize>(work: &mut Storage<X, N>) -> X {
    let mut det = X::one();
    for c in 0..N {
        let (p, magnitude) = select_pivot(work, c);
        if magnitude.is_zero() {
            return X::zero();
        }
        if p != c {
            exchange_rows(work, c, p);
            det = -det;
        }

        let pivot = work.get(c, c);
        det = det * pivot;

        let k = pivot.recip();
        for r in c + 1..N {
            let f = -(work.get(r, c) * k);
            add_scaled_row(work, r, c, f);
        }
    }
    det
}

// Determinant of the minor made of the given rows and columns.
fn laplace<X: Ring, const N: usize>(m: &Storage<X, N>, rows: &[usize], cols: &[usize]) -> X {
    debug_assert_eq!(rows.len(), cols.len());
    match cols.len() {
        0 => X::one(),
        1 => m.get(rows[0], cols[0]),
        _ => {
            let mut total = X::zero();
            for (j, &c) in cols.iter().enumerate() {
                let mut minor_cols = [0; 4];
                let mut len = 0;
                for &other in cols.iter().filter(|&&other| other != c) {
                    minor_cols[len] = other;
                    len += 1;
                }

                let term = m.get(rows[0], c) * laplace(m, &rows[1..], &minor_cols[..len]);
                total = match j % 2 {
                    0 => total + term,
                    _ => total - term,
                };
            }
            total
        },
    }
}
