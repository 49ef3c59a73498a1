/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::storage::check_index;
use crate::traits::Semiring;
use crate::types::*;

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X, const N: usize, F> Vector<X, N, F> {
    #[inline(always)]
    pub fn as_array(&self) -> &[X; N]
    { &self.data }

    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [X; N]
    { &mut self.data }

    #[inline(always)]
    pub fn into_array(self) -> [X; N]
    { self.data }

    /// Reinterpret the vector as belonging to another frame.
    #[inline(always)]
    pub fn retag<F2>(self) -> Vector<X, N, F2>
    { Vector { data: self.data, frame: PhantomData } }
}

impl<X: Copy, const N: usize, F> Vector<X, N, F> {
    /// Construct a vector from a function on the component index.
    #[inline(always)]
    pub fn from_fn<G>(f: G) -> Self
    where G: FnMut(usize) -> X,
    { Self::new(std::array::from_fn(f)) }

    /// Bounds-checked component read.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> X
    { self[i] }

    /// Bounds-checked component write.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, x: X)
    { self[i] = x; }

    #[inline]
    pub fn map<B: Copy, G>(&self, mut f: G) -> Vector<B, N, F>
    where G: FnMut(X) -> B,
    { Vector::from_fn(|i| f(self.data[i])) }
}

impl<X: Semiring, const N: usize, F> Vector<X, N, F> {
    #[inline(always)]
    pub fn zero() -> Self
    { Self::new([X::zero(); N]) }

    /// Dot product with a vector in the same frame.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    { (0..N).map(|i| self.data[i] * other.data[i]).sum() }

    #[inline]
    pub fn sqnorm(&self) -> X
    { self.dot(self) }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<X, const N: usize, F> Index<usize> for Vector<X, N, F> {
    type Output = X;

    #[inline(always)]
    fn index(&self, i: usize) -> &X {
        check_index("vector", i, N);
        &self.data[i]
    }
}

impl<X, const N: usize, F> IndexMut<usize> for Vector<X, N, F> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut X {
        check_index("vector", i, N);
        &mut self.data[i]
    }
}

impl<X, const N: usize> From<[X; N]> for Vector<X, N> {
    #[inline(always)]
    fn from(data: [X; N]) -> Self
    { Vector::new(data) }
}

impl<X, const N: usize, F> From<Vector<X, N, F>> for [X; N] {
    #[inline(always)]
    fn from(v: Vector<X, N, F>) -> Self
    { v.data }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::frames!{
        enum Eye;
    }

    #[test]
    fn basics() {
        let mut v = V3::<i32, Eye>::from_fn(|i| i as i32 + 1);
        assert_eq!(v.into_array(), [1, 2, 3]);
        assert_eq!(v.dot(&v), 14);
        assert_eq!(v.sqnorm(), 14);

        v.set(2, -3);
        assert_eq!(v.get(2), -3);
        assert_eq!(v.map(|x| x * 2).into_array(), [2, 4, -6]);
        assert_eq!(V4::<f64>::zero().into_array(), [0.0; 4]);

        let w: V3<i32> = v.retag();
        assert_eq!(<[i32; 3]>::from(w), [1, 2, -3]);
    }

    #[test]
    #[should_panic(expected = "vector index out of range: 2")]
    fn index_out_of_range() {
        let v = V2::<f32>::new([1.0, 2.0]);
        let _ = v[2];
    }
}
