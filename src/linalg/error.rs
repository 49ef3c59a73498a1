/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// The matrix has no inverse under the configured singularity test.
///
/// This is an expected outcome of inversion rather than a bug, so it is
/// always reported through `Result`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("matrix is singular (no usable pivot in column {column})")]
pub struct SingularMatrixError {
    /// The pivot column at which elimination stopped.
    pub column: usize,
}

/// A relative singularity tolerance outside of `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
#[error("relative singularity tolerance must be finite and in [0, 1), got {rel}")]
pub struct InvalidToleranceError {
    pub rel: f64,
}
