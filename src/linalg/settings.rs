/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::InvalidToleranceError;

use smallmat_array_types::{Storage, Field};

#[cfg(feature = "serde-support")]
use serde::{Serialize, Deserialize};

/// Criterion for declaring a pivot unusable.
///
/// In config files this is written as `"exact-zero"` or
/// `{"relative": {"rel": 1e-12}}`. A `rel` outside of `[0, 1)` is
/// rejected when deserializing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "serde-support", serde(try_from = "SingularityTestRepr"))]
pub enum SingularityTest {
    /// Only a pivot that is exactly zero is singular.
    ///
    /// Near-singular matrices will "succeed" with enormous entries.
    ExactZero,

    /// A pivot is singular if its magnitude is at most `rel` times the
    /// largest magnitude of any element of the input.
    ///
    /// Prefer `SingularityTest::relative`, which validates `rel`.
    Relative { rel: f64 },
}

impl Default for SingularityTest {
    fn default() -> Self { SingularityTest::ExactZero }
}

impl SingularityTest {
    /// A relative test, if `rel` is finite and in `[0, 1)`.
    ///
    /// A negative `rel` would accept exactly-zero pivots, and `rel >= 1`
    /// would reject the identity.
    pub fn relative(rel: f64) -> Result<Self, InvalidToleranceError> {
        match 0.0 <= rel && rel < 1.0 {
            true => Ok(SingularityTest::Relative { rel }),
            false => Err(InvalidToleranceError { rel }),
        }
    }

    /// The largest pivot magnitude that counts as singular for this input.
    ///
    /// Never below zero, so an exactly-zero pivot is always singular.
    pub(crate) fn threshold<X: Field, const N: usize>(&self, input: &Storage<X, N>) -> X {
        match *self {
            SingularityTest::ExactZero => X::zero(),
            SingularityTest::Relative { rel } => {
                // also catches NaN
                let rel = if rel > 0.0 { rel } else { 0.0 };
                let max = input.as_flat().iter().fold(X::zero(), |acc, &x| {
                    let x = x.abs();
                    if x > acc { x } else { acc }
                });
                X::from_f64(rel) * max
            },
        }
    }
}

#[cfg(feature = "serde-support")]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum SingularityTestRepr {
    ExactZero,
    Relative { rel: f64 },
}

#[cfg(feature = "serde-support")]
impl std::convert::TryFrom<SingularityTestRepr> for SingularityTest {
    type Error = InvalidToleranceError;

    fn try_from(repr: SingularityTestRepr) -> Result<Self, Self::Error> {
        match repr {
            SingularityTestRepr::ExactZero => Ok(SingularityTest::ExactZero),
            SingularityTestRepr::Relative { rel } => SingularityTest::relative(rel),
        }
    }
}

/// Tunable behavior of inversion.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
pub struct InverseSettings {
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub singularity: SingularityTest,
}

impl InverseSettings {
    /// Settings with a relative singularity test.
    ///
    /// # Panics
    ///
    /// Panics unless `rel` is finite and in `[0, 1)`.
    /// Use `SingularityTest::relative` to handle this as an error.
    pub fn relative(rel: f64) -> Self {
        match SingularityTest::relative(rel) {
            Ok(singularity) => InverseSettings { singularity },
            Err(e) => panic!("{}", e),
        }
    }
}
