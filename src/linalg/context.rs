/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::det::echelon_det;
use crate::gauss_jordan::{invert_into, solve_into};
use crate::settings::InverseSettings;
use crate::SingularMatrixError;

use smallmat_array_types::{Storage, Field, Matrix, Vector};

/// Reusable scratch space for repeated inversions of one size.
///
/// Every method takes `&mut self`, so a context serves one call at a time;
/// reentrant or concurrent use does not compile. Scratch contents carry no
/// meaning between calls.
///
/// Results are bit-for-bit identical to the free functions of this crate
/// given the same settings.
///
/// ```
/// use smallmat_array_types::M44;
/// use smallmat_linalg::Context;
///
/// let mut ctx = Context::<f32, 4>::new();
/// let m = M44::<f32>::from_diag([2.0, 4.0, 8.0, 16.0]);
/// let minv = ctx.inv(&m).unwrap();
/// assert_eq!(minv, M44::from_diag([0.5, 0.25, 0.125, 0.0625]));
/// ```
#[derive(Debug, Clone)]
pub struct Context<X, const N: usize> {
    // eliminated copy of the input
    work: Storage<X, N>,
    // accumulates the inverse
    acc: Storage<X, N>,
    // accumulates the solution
    rhs: [X; N],
    settings: InverseSettings,
}

impl<X: Field, const N: usize> Context<X, N> {
    pub fn new() -> Self
    { Self::with_settings(InverseSettings::default()) }

    pub fn with_settings(settings: InverseSettings) -> Self {
        debug!(
            "creating {}x{} inversion context for {} ({:?})",
            N, N, std::any::type_name::<X>(), settings.singularity,
        );
        Context {
            work: Storage::zero(),
            acc: Storage::zero(),
            rhs: [X::zero(); N],
            settings,
        }
    }

    pub fn settings(&self) -> &InverseSettings
    { &self.settings }

    /// Like `smallmat_linalg::inv`, but reusing this context's scratch space.
    pub fn inv<S, D>(&mut self, m: &Matrix<X, N, S, D>) -> Result<Matrix<X, N, D, S>, SingularMatrixError> {
        invert_into(m.storage(), &mut self.work, &mut self.acc, &self.settings)?;
        Ok(Matrix::from_storage(self.acc))
    }

    /// Like `smallmat_linalg::inv_in_place`. The matrix is untouched on failure.
    pub fn inv_in_place<F>(&mut self, m: &mut Matrix<X, N, F, F>) -> Result<(), SingularMatrixError> {
        invert_into(m.storage(), &mut self.work, &mut self.acc, &self.settings)?;
        *m.storage_mut() = self.acc;
        Ok(())
    }

    /// Solve `m * x == b` for `x`.
    pub fn solve<S, D>(
        &mut self,
        m: &Matrix<X, N, S, D>,
        b: &Vector<X, N, D>,
    ) -> Result<Vector<X, N, S>, SingularMatrixError> {
        self.rhs = *b.as_array();
        solve_into(m.storage(), &mut self.work, &mut self.rhs, &self.settings)?;
        Ok(Vector::new(self.rhs))
    }

    pub fn det<S, D>(&mut self, m: &Matrix<X, N, S, D>) -> X {
        self.work = *m.storage();
        echelon_det(&mut self.work)
    }
}

impl<X: Field, const N: usize> Default for Context<X, N> {
    fn default() -> Self { Self::new() }
}
