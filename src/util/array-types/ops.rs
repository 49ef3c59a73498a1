/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Arithmetic operators.
//!
//! The frame rules live entirely in the impl headers below:
//!
//! * `Matrix<S, D> * Vector<S>` gives a `Vector<D>`;
//! * `Matrix<B, C> * Matrix<A, B>` gives a `Matrix<A, C>`;
//! * addition and subtraction demand identical tags on both sides.
//!
//! Anything else fails to type-check.

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Semiring, Ring, Field};
use crate::types::*;

// NOTE: Operator impls are deliberately between same-typed scalars,
//       rather than e.g. M33<T> and M33<U> where T: Mul<U>.
//
//       Mixing precisions is an explicit conversion via `map`.

// ---------------------------------------------------------------------------
// vector-vector ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize, F>
            Add<$($ref_b)* Vector<X, N, F>> for $($ref_a)* Vector<X, N, F>
        {
            type Output = Vector<X, N, F>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<X, N, F>) -> Self::Output
            { Vector::from_fn(|k| self.data[k] + other.data[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring, const N: usize, F>
            Sub<$($ref_b)* Vector<X, N, F>> for $($ref_a)* Vector<X, N, F>
        {
            type Output = Vector<X, N, F>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<X, N, F>) -> Self::Output
            { Vector::from_fn(|k| self.data[k] - other.data[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize, S, D>
            Add<$($ref_b)* Matrix<X, N, S, D>> for $($ref_a)* Matrix<X, N, S, D>
        {
            type Output = Matrix<X, N, S, D>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<X, N, S, D>) -> Self::Output {
                let (a, b) = (self.as_cols(), other.as_cols());
                Matrix::from_fn(|r, c| a[c][r] + b[c][r])
            }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Ring, const N: usize, S, D>
            Sub<$($ref_b)* Matrix<X, N, S, D>> for $($ref_a)* Matrix<X, N, S, D>
        {
            type Output = Matrix<X, N, S, D>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<X, N, S, D>) -> Self::Output {
                let (a, b) = (self.as_cols(), other.as_cols());
                Matrix::from_fn(|r, c| a[c][r] - b[c][r])
            }
        }

        // matrix * matrix
        //
        // Composition: apply `other` first, then `self`.
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize, A, B, C>
            Mul<$($ref_b)* Matrix<X, N, A, B>> for $($ref_a)* Matrix<X, N, B, C>
        {
            type Output = Matrix<X, N, A, C>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, N, A, B>) -> Self::Output {
                let (a, b) = (self.as_cols(), other.as_cols());
                Matrix::from_fn(|r, c| (0..N).map(|k| a[k][r] * b[c][k]).sum())
            }
        }

        // matrix * vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize, S, D>
            Mul<$($ref_b)* Vector<X, N, S>> for $($ref_a)* Matrix<X, N, S, D>
        {
            type Output = Vector<X, N, D>;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<X, N, S>) -> Self::Output {
                let (m, v) = (self.as_cols(), other.as_array());
                Vector::from_fn(|r| (0..N).map(|k| m[k][r] * v[k]).sum())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// unary ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring, const N: usize, F> Neg for $($ref_a)* Vector<X, N, F> {
            type Output = Vector<X, N, F>;

            #[inline]
            fn neg(self) -> Self::Output
            { Vector::from_fn(|k| -self.data[k]) }
        }

        // -matrix
        impl<$($lt_a)* X: Ring, const N: usize, S, D> Neg for $($ref_a)* Matrix<X, N, S, D> {
            type Output = Matrix<X, N, S, D>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix::from_storage(self.storage.map(|x| -x)) }
        }
    }
}

// ---------------------------------------------------------------------------
// scalar ops

// scalar * vector, scalar * matrix
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_lhs_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize, F> Mul<$($ref_a)* Vector<$X, N, F>> for $X {
            type Output = Vector<$X, N, F>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<$X, N, F>) -> Self::Output
            { vector * self }
        }

        impl<$($lt_a)* const N: usize, S, D> Mul<$($ref_a)* Matrix<$X, N, S, D>> for $X {
            type Output = Matrix<$X, N, S, D>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<$X, N, S, D>) -> Self::Output
            { matrix * self }
        }
    }
}

// vector `op` scalar, matrix `op` scalar
gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_rhs_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* X: Semiring, const N: usize, F> Mul<X> for $($ref_a)* Vector<X, N, F> {
            type Output = Vector<X, N, F>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Vector::from_fn(|k| self.data[k] * scalar) }
        }

        impl<$($lt_a)* X: Field, const N: usize, F> Div<X> for $($ref_a)* Vector<X, N, F> {
            type Output = Vector<X, N, F>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Vector::from_fn(|k| self.data[k] / scalar) }
        }

        impl<$($lt_a)* X: Semiring, const N: usize, S, D> Mul<X> for $($ref_a)* Matrix<X, N, S, D> {
            type Output = Matrix<X, N, S, D>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Matrix::from_storage(self.storage.map(|x| x * scalar)) }
        }

        impl<$($lt_a)* X: Field, const N: usize, S, D> Div<X> for $($ref_a)* Matrix<X, N, S, D> {
            type Output = Matrix<X, N, S, D>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Matrix::from_storage(self.storage.map(|x| x / scalar)) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

// vector += vector;
impl<X, const N: usize, F, B> AddAssign<B> for Vector<X, N, F>
where for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// vector -= vector;
impl<X, const N: usize, F, B> SubAssign<B> for Vector<X, N, F>
where for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// vector *= scalar;
impl<X, const N: usize, F, B> MulAssign<B> for Vector<X, N, F>
where for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// vector /= scalar;
impl<X, const N: usize, F, B> DivAssign<B> for Vector<X, N, F>
where for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// matrix += matrix;
impl<X, const N: usize, S, D, B> AddAssign<B> for Matrix<X, N, S, D>
where for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<X, const N: usize, S, D, B> SubAssign<B> for Matrix<X, N, S, D>
where for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= matrix;   (only for operators on a single frame)
impl<X, const N: usize, S, D, B> MulAssign<B> for Matrix<X, N, S, D>
where for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<X, const N: usize, S, D, B> DivAssign<B> for Matrix<X, N, S, D>
where for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
// Matrices are written as a list of rows.
gen_each!{
    [
        {Display} {LowerExp} {UpperExp}
    ]
    impl_fmt!({$Format:ident}) => {
        impl<X: fmt::$Format, const N: usize, F> fmt::$Format for Vector<X, N, F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_list(f, &self.data, |x, f| fmt::$Format::fmt(x, f))
            }
        }

        impl<X: fmt::$Format + Copy, const N: usize, S, D> fmt::$Format for Matrix<X, N, S, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let rows = self.storage.into_rows();
                write_list(f, &rows, |row, f| {
                    write_list(f, row, |x, f| fmt::$Format::fmt(x, f))
                })
            }
        }
    }
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_item(x, f)?;
    }
    write!(f, "]")
}

// ---------------------------------------------------------------------------
