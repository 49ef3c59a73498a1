/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Inherent API of `Matrix`.
//!
//! Rows and columns follow the usual mathematical convention (`get(r, c)`),
//! independent of the column-major storage order.

use crate::storage::Storage;
use crate::traits::Semiring;
use crate::types::*;

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X, const N: usize, S, D> Matrix<X, N, S, D> {
    /// Wrap an array of columns.
    #[inline(always)]
    pub fn from_cols(cols: [[X; N]; N]) -> Self
    { Self::from_storage(Storage::from_cols(cols)) }

    #[inline(always)]
    pub fn storage(&self) -> &Storage<X, N>
    { &self.storage }

    #[inline(always)]
    pub fn storage_mut(&mut self) -> &mut Storage<X, N>
    { &mut self.storage }

    #[inline(always)]
    pub fn into_storage(self) -> Storage<X, N>
    { self.storage }

    /// Borrow the columns.
    #[inline(always)]
    pub fn as_cols(&self) -> &[[X; N]; N]
    { self.storage.as_cols() }

    #[inline(always)]
    pub fn into_cols(self) -> [[X; N]; N]
    { self.storage.into_cols() }

    /// Read-only view of the raw buffer for handing to a rendering API.
    ///
    /// Column-major, native endianness, `N * N` elements, no copy.
    #[inline(always)]
    pub fn as_flat(&self) -> &[X]
    { self.storage.as_flat() }

    /// Reinterpret the matrix as a map between different frames.
    ///
    /// This is the one explicit escape hatch from frame checking.
    #[inline(always)]
    pub fn retag<S2, D2>(self) -> Matrix<X, N, S2, D2>
    { Matrix { storage: self.storage, frames: PhantomData } }
}

impl<X: Copy, const N: usize, S, D> Matrix<X, N, S, D> {
    /// Construct a matrix from a function on `(row, col)` indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Self::from_storage(Storage::from_fn(f)) }

    /// Construct a matrix from an array of rows.
    ///
    /// This is usually the most readable way to write down a literal.
    #[inline(always)]
    pub fn from_rows(rows: [[X; N]; N]) -> Self
    { Self::from_storage(Storage::from_rows(rows)) }

    /// Construct a matrix from `N * N` column-major scalars.
    ///
    /// # Panics
    ///
    /// Panics if `flat.len() != N * N`.
    #[inline(always)]
    pub fn from_col_major_slice(flat: &[X]) -> Self
    { Self::from_storage(Storage::from_col_major_slice(flat)) }

    #[inline(always)]
    pub fn into_rows(self) -> [[X; N]; N]
    { self.storage.into_rows() }

    /// Bounds-checked element read.
    ///
    /// # Panics
    ///
    /// Panics if `r >= N` or `c >= N`.
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> X
    { self.storage.get(r, c) }

    /// Bounds-checked element write.
    ///
    /// # Panics
    ///
    /// Panics if `r >= N` or `c >= N`.
    #[inline(always)]
    pub fn set(&mut self, r: usize, c: usize, x: X)
    { self.storage.set(r, c, x) }

    /// Copy out row `r`.
    ///
    /// A row has as many elements as the source frame has components,
    /// but is not a vector in either frame, so it is left untagged.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<X, N>
    { Vector::new(self.storage.row(r)) }

    /// Copy out column `c`; it is the image of basis vector `c`, in `Dst`.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<X, N, D>
    { Vector::new(self.storage.col(c)) }

    /// Matrix transpose.
    ///
    /// The result is tagged as the reverse map, which is exactly right
    /// for rotations and other orthonormal transforms.
    #[inline]
    pub fn t(&self) -> Matrix<X, N, D, S>
    { Matrix::from_storage(self.storage.transpose()) }

    /// Map each scalar element.
    #[inline]
    pub fn map<B: Copy, F>(&self, f: F) -> Matrix<B, N, S, D>
    where F: FnMut(X) -> B,
    { Matrix::from_storage(self.storage.map(f)) }
}

impl<X: Semiring, const N: usize, S, D> Matrix<X, N, S, D> {
    /// The zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::from_storage(Storage::zero()) }

    /// The identity matrix.
    ///
    /// With distinct frames, this says that the two frames coincide.
    #[inline(always)]
    pub fn eye() -> Self
    { Self::from_storage(Storage::eye()) }

    /// Construct a diagonal matrix.
    #[inline]
    pub fn from_diag(diag: [X; N]) -> Self
    { Self::from_fn(|r, c| if r == c { diag[r] } else { X::zero() }) }

    /// Exact comparison against the identity.
    #[inline]
    pub fn is_identity(&self) -> bool
    { self.storage.is_identity() }
}

// Per-size constructors from flat arrays, so that the length is checked
// by the type system.
gen_each!{
    @{n_nn}
    impl_from_col_major!({$n:tt $nn:tt}) => {
        impl<X: Copy, S, D> Matrix<X, $n, S, D> {
            /// Construct a matrix from column-major scalars,
            /// in the order a rendering API would upload them.
            #[inline]
            pub fn from_col_major(flat: [X; $nn]) -> Self
            { Self::from_col_major_slice(&flat) }
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<X, const N: usize, S, D> Index<(usize, usize)> for Matrix<X, N, S, D> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &X
    { self.storage.get_ref(r, c) }
}

impl<X, const N: usize, S, D> IndexMut<(usize, usize)> for Matrix<X, N, S, D> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut X
    { self.storage.get_mut(r, c) }
}
