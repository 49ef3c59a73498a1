/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementary row operations, applied in place.
//!
//! None of these allocate. Every row index is bounds-checked, and an
//! index out of range is a panic.

use smallmat_array_types::{Storage, Semiring, check_index};
use num_traits::Zero;

/// A buffer that elementary row operations can act upon.
///
/// Implemented for square matrix storage and for `[X; N]`, which is
/// treated as a column vector with one scalar per row. This is what
/// lets elimination carry a right-hand side along with the matrix.
pub trait Rows {
    type Scalar: Copy;

    fn num_rows(&self) -> usize;

    /// Number of scalars in each row.
    fn row_len(&self) -> usize;

    /// Read the scalar at `(r, c)`. Indices are already checked.
    fn at(&self, r: usize, c: usize) -> Self::Scalar;

    fn at_mut(&mut self, r: usize, c: usize) -> &mut Self::Scalar;
}

impl<X: Copy, const N: usize> Rows for Storage<X, N> {
    type Scalar = X;

    #[inline(always)]
    fn num_rows(&self) -> usize { N }

    #[inline(always)]
    fn row_len(&self) -> usize { N }

    #[inline(always)]
    fn at(&self, r: usize, c: usize) -> X
    { self.as_cols()[c][r] }

    #[inline(always)]
    fn at_mut(&mut self, r: usize, c: usize) -> &mut X
    { &mut self.as_cols_mut()[c][r] }
}

impl<X: Copy, const N: usize> Rows for [X; N] {
    type Scalar = X;

    #[inline(always)]
    fn num_rows(&self) -> usize { N }

    #[inline(always)]
    fn row_len(&self) -> usize { 1 }

    #[inline(always)]
    fn at(&self, r: usize, _: usize) -> X
    { self[r] }

    #[inline(always)]
    fn at_mut(&mut self, r: usize, _: usize) -> &mut X
    { &mut self[r] }
}

/// Swap rows `i` and `j`.
///
/// # Panics
///
/// Panics if either index is out of range.
pub fn exchange_rows<B: Rows + ?Sized>(buf: &mut B, i: usize, j: usize) {
    check_index("row", i, buf.num_rows());
    check_index("row", j, buf.num_rows());
    if i == j {
        return;
    }
    for c in 0..buf.row_len() {
        let tmp = buf.at(i, c);
        *buf.at_mut(i, c) = buf.at(j, c);
        *buf.at_mut(j, c) = tmp;
    }
}

/// Multiply row `i` by `k`.
///
/// # Panics
///
/// Panics if `i` is out of range.
pub fn scale_row<B: Rows + ?Sized>(buf: &mut B, i: usize, k: B::Scalar)
where B::Scalar: Semiring,
{
    check_index("row", i, buf.num_rows());
    for c in 0..buf.row_len() {
        *buf.at_mut(i, c) = buf.at(i, c) * k;
    }
}

/// Add `k` times row `src` onto row `dst`.
///
/// A zero `k` leaves the buffer untouched. When `dst == src`, the row is
/// multiplied by `1 + k`.
///
/// # Panics
///
/// Panics if either index is out of range.
pub fn add_scaled_row<B: Rows + ?Sized>(buf: &mut B, dst: usize, src: usize, k: B::Scalar)
where B::Scalar: Semiring,
{
    check_index("row", dst, buf.num_rows());
    check_index("row", src, buf.num_rows());
    if k.is_zero() {
        return;
    }
    for c in 0..buf.row_len() {
        let x = buf.at(src, c);
        *buf.at_mut(dst, c) = buf.at(dst, c) + k * x;
    }
}
