/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Inversion, solving, and determinants of small square matrices.
//!
//! Everything here is Gauss-Jordan elimination with partial pivoting on
//! stack buffers; nothing allocates. A singular matrix is reported as a
//! `SingularMatrixError`, never as a panic.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate smallmat_assert_close;

mod error;
mod settings;
mod gauss_jordan;
mod det;
mod context;
pub mod row_ops;

pub use crate::error::{SingularMatrixError, InvalidToleranceError};
pub use crate::settings::{InverseSettings, SingularityTest};
pub use crate::gauss_jordan::{inv, inv_with, inv_in_place, inv_in_place_with, solve, solve_with};
pub use crate::det::{det, det_cofactor};
pub use crate::context::Context;

pub mod prelude {
    pub use crate::MatrixInverseExt;
    pub use crate::MatrixDeterminantExt;
}

use smallmat_array_types::{Field, Matrix};

/// Extension trait for `matrix.inverse()`.
pub trait MatrixInverseExt {
    type Inverse;

    fn inverse(&self) -> Result<Self::Inverse, SingularMatrixError>;
}

/// Extension trait for `matrix.determinant()`.
pub trait MatrixDeterminantExt {
    type Scalar;

    fn determinant(&self) -> Self::Scalar;
}

impl<X: Field, const N: usize, S, D> MatrixInverseExt for Matrix<X, N, S, D> {
    type Inverse = Matrix<X, N, D, S>;

    #[inline]
    fn inverse(&self) -> Result<Self::Inverse, SingularMatrixError>
    { inv(self) }
}

impl<X: Field, const N: usize, S, D> MatrixDeterminantExt for Matrix<X, N, S, D> {
    type Scalar = X;

    #[inline]
    fn determinant(&self) -> X
    { det(self) }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use smallmat_array_types::{frames, M33};

    frames!{
        enum Body;
        enum World;
    }

    #[test]
    fn ext_traits() {
        let body_to_world = M33::<f64, Body, World>::from_rows([
            [0.0, -1.0, 0.0],
            [1.0,  0.0, 0.0],
            [0.0,  0.0, 2.0],
        ]);
        let world_to_body: M33<f64, World, Body> = body_to_world.inverse().unwrap();
        assert!((&world_to_body * &body_to_world).is_identity());
        assert_eq!(body_to_world.determinant(), 2.0);
    }
}
