/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::frame::{Untagged, Marker, MapMarker};
use crate::storage::Storage;

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::fmt;

// ---------------------------------------------------------------------------

/// An `N`-dimensional vector in coordinate frame `F`.
pub struct Vector<X, const N: usize, F = Untagged> {
    pub(crate) data: [X; N],
    pub(crate) frame: Marker<F>,
}

/// A 2-dimensional vector.
pub type V2<X = f64, F = Untagged> = Vector<X, 2, F>;
/// A 3-dimensional vector.
pub type V3<X = f64, F = Untagged> = Vector<X, 3, F>;
/// A 4-dimensional vector.
pub type V4<X = f64, F = Untagged> = Vector<X, 4, F>;

// ---------------------------------------------------------------------------

/// A square `N x N` matrix mapping vectors in frame `Src` to frame `Dst`.
///
/// Vectors are columns: `m * v` transforms `v`. Elements are stored
/// column-major. A matrix whose frames agree (the default) is simply an
/// operator on one frame.
pub struct Matrix<X, const N: usize, Src = Untagged, Dst = Src> {
    pub(crate) storage: Storage<X, N>,
    pub(crate) frames: MapMarker<Src, Dst>,
}

/// A square dense 2x2 matrix.
pub type M22<X = f64, Src = Untagged, Dst = Src> = Matrix<X, 2, Src, Dst>;
/// A square dense 3x3 matrix.
pub type M33<X = f64, Src = Untagged, Dst = Src> = Matrix<X, 3, Src, Dst>;
/// A square dense 4x4 matrix.
pub type M44<X = f64, Src = Untagged, Dst = Src> = Matrix<X, 4, Src, Dst>;

// ---------------------------------------------------------------------------
// Derives would put bounds on the tags, so everything is written out.

impl<X: Copy, const N: usize, F> Copy for Vector<X, N, F> { }
impl<X: Copy, const N: usize, F> Clone for Vector<X, N, F> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<X: PartialEq, const N: usize, F> PartialEq for Vector<X, N, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool { self.data == other.data }
}
impl<X: Eq, const N: usize, F> Eq for Vector<X, N, F> { }

impl<X: Hash, const N: usize, F> Hash for Vector<X, N, F> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.data.hash(state) }
}

impl<X: Copy, const N: usize, S, D> Copy for Matrix<X, N, S, D> { }
impl<X: Copy, const N: usize, S, D> Clone for Matrix<X, N, S, D> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<X: PartialEq, const N: usize, S, D> PartialEq for Matrix<X, N, S, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool { self.storage == other.storage }
}
impl<X: Eq, const N: usize, S, D> Eq for Matrix<X, N, S, D> { }

impl<X: Hash, const N: usize, S, D> Hash for Matrix<X, N, S, D> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.storage.hash(state) }
}

// forward the debug impl without a surrounding "Vector(...)", so that the
// output is valid JSON and Python for the common case.
impl<X: fmt::Debug, const N: usize, F> fmt::Debug for Vector<X, N, F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.data, f) }
}

// ...and for matrices, show rows, since that is how everybody writes them down.
impl<X: fmt::Debug + Copy, const N: usize, S, D> fmt::Debug for Matrix<X, N, S, D> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.storage.into_rows(), f) }
}

// ---------------------------------------------------------------------------

impl<X, const N: usize, F> Vector<X, N, F> {
    #[inline(always)]
    pub fn new(data: [X; N]) -> Self
    { Vector { data, frame: PhantomData } }
}

impl<X, const N: usize, S, D> Matrix<X, N, S, D> {
    #[inline(always)]
    pub fn from_storage(storage: Storage<X, N>) -> Self
    { Matrix { storage, frames: PhantomData } }
}
