/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Untagged square scalar buffers.

use crate::traits::Semiring;

use slice_of_array::prelude::*;

/// `N * N` scalars in column-major order.
///
/// This is the buffer that row operations act upon; `Matrix` is a
/// `Storage` plus frame tags. `1 <= N <= 4` is checked at compile time
/// (instantiating any other size fails to build).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Storage<X, const N: usize> {
    // cols[c][r] is the element in row r, column c
    cols: [[X; N]; N],
}

impl<X, const N: usize> Storage<X, N> {
    const DIM_IS_SUPPORTED: () = assert!(1 <= N && N <= 4, "only dimensions 1 through 4 are supported");

    /// Number of rows (and of columns).
    pub const DIM: usize = N;

    /// Wrap an array of columns.
    #[inline(always)]
    pub fn from_cols(cols: [[X; N]; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIM_IS_SUPPORTED;
        Storage { cols }
    }

    #[inline(always)]
    pub fn as_cols(&self) -> &[[X; N]; N]
    { &self.cols }

    #[inline(always)]
    pub fn as_cols_mut(&mut self) -> &mut [[X; N]; N]
    { &mut self.cols }

    #[inline(always)]
    pub fn into_cols(self) -> [[X; N]; N]
    { self.cols }

    /// The raw buffer, column-major, in native endianness.
    #[inline(always)]
    pub fn as_flat(&self) -> &[X]
    { self.cols[..].flat() }
}

impl<X: Copy, const N: usize> Storage<X, N> {
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Self::from_cols(std::array::from_fn(|c| std::array::from_fn(|r| f(r, c)))) }

    #[inline]
    pub fn from_rows(rows: [[X; N]; N]) -> Self
    { Self::from_fn(|r, c| rows[r][c]) }

    /// Build from `N * N` scalars in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `flat.len() != N * N`.
    pub fn from_col_major_slice(flat: &[X]) -> Self {
        assert_eq!(
            flat.len(), N * N,
            "expected {} scalars for a {}x{} matrix, got {}", N * N, N, N, flat.len(),
        );
        let cols: &[[X; N]] = flat.nest();
        Self::from_fn(|r, c| cols[c][r])
    }

    #[inline]
    pub fn into_rows(self) -> [[X; N]; N]
    { std::array::from_fn(|r| std::array::from_fn(|c| self.cols[c][r])) }

    #[inline]
    pub fn row(&self, r: usize) -> [X; N] {
        check_index("row", r, N);
        std::array::from_fn(|c| self.cols[c][r])
    }

    #[inline]
    pub fn col(&self, c: usize) -> [X; N] {
        check_index("column", c, N);
        self.cols[c]
    }

    /// Bounds-checked element read.
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> X
    { *self.get_ref(r, c) }

    /// Bounds-checked element write.
    #[inline(always)]
    pub fn set(&mut self, r: usize, c: usize, x: X)
    { *self.get_mut(r, c) = x; }

    #[inline(always)]
    pub fn transpose(&self) -> Self
    { Self::from_cols(self.into_rows()) }

    #[inline]
    pub fn map<B: Copy, F>(&self, mut f: F) -> Storage<B, N>
    where F: FnMut(X) -> B,
    { Storage::from_fn(|r, c| f(self.cols[c][r])) }
}

impl<X, const N: usize> Storage<X, N> {
    #[inline(always)]
    pub fn get_ref(&self, r: usize, c: usize) -> &X {
        check_index("row", r, N);
        check_index("column", c, N);
        &self.cols[c][r]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, r: usize, c: usize) -> &mut X {
        check_index("row", r, N);
        check_index("column", c, N);
        &mut self.cols[c][r]
    }
}

impl<X: Semiring, const N: usize> Storage<X, N> {
    #[inline]
    pub fn zero() -> Self
    { Self::from_cols([[X::zero(); N]; N]) }

    #[inline]
    pub fn eye() -> Self
    { Self::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

    /// Exact comparison against the identity.
    pub fn is_identity(&self) -> bool {
        (0..N).all(|c| (0..N).all(|r| {
            let x = self.cols[c][r];
            match r == c {
                true => x.is_one(),
                false => x.is_zero(),
            }
        }))
    }
}

/// Panic unless `index < dim`.
///
/// Out-of-range indices are programmer errors, and are never reported
/// through `Result`.
#[inline(always)]
#[track_caller]
pub fn check_index(what: &str, index: usize, dim: usize) {
    if index >= dim {
        index_out_of_range(what, index, dim);
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_range(what: &str, index: usize, dim: usize) -> ! {
    panic!("{} index out of range: {} (dimension is {})", what, index, dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_column_major() {
        let s = Storage::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(s.as_flat(), &[1, 4, 7, 2, 5, 8, 3, 6, 9]);
        assert_eq!(s.get(0, 2), 3);
        assert_eq!(s.row(1), [4, 5, 6]);
        assert_eq!(s.col(1), [2, 5, 8]);
        assert_eq!(Storage::from_col_major_slice(s.as_flat()), s);
        assert_eq!(s.transpose().into_rows(), s.into_cols());
    }

    #[test]
    fn eye_and_zero() {
        assert!(Storage::<f64, 4>::eye().is_identity());
        assert!(!Storage::<f64, 4>::zero().is_identity());
        assert!(Storage::<i32, 1>::eye().is_identity());
        assert_eq!(Storage::<i32, 2>::eye().into_rows(), [[1, 0], [0, 1]]);
    }

    #[test]
    #[should_panic(expected = "row index out of range")]
    fn get_out_of_range() {
        Storage::<f32, 2>::eye().get(2, 0);
    }

    #[test]
    #[should_panic(expected = "column index out of range")]
    fn set_out_of_range() {
        Storage::<f32, 3>::eye().set(0, 3, 1.0);
    }

    #[test]
    #[should_panic(expected = "expected 16 scalars")]
    fn wrong_flat_length() {
        Storage::<f32, 4>::from_col_major_slice(&[0.0; 9]);
    }
}
