/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size (up to 4x4) matrices and vectors for graphics transforms.
//!
//! * `smallmat_array_types` has the value types and their frame tags;
//! * `smallmat_linalg` has inversion, solving, and determinants.
//!
//! This crate just re-exports both.
//!
//! ```
//! use smallmat::prelude::*;
//! use smallmat::{frames, M44, V4};
//!
//! frames!{
//!     pub enum Model;
//!     pub enum World;
//! }
//!
//! let model_to_world = M44::<f64, Model, World>::from_rows([
//!     [1.0, 0.0, 0.0, 5.0],
//!     [0.0, 1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! ]);
//! let world_to_model: M44<f64, World, Model> = model_to_world.inverse()?;
//!
//! let p = V4::<f64, Model>::new([1.0, 2.0, 3.0, 1.0]);
//! let q = &model_to_world * &p;
//! assert_eq!(q.into_array(), [6.0, 2.0, 3.0, 1.0]);
//! assert_eq!(&world_to_model * &q, p);
//! # Ok::<(), smallmat::SingularMatrixError>(())
//! ```

pub use smallmat_array_types::{frames, frame, Untagged};
pub use smallmat_array_types::{Matrix, M22, M33, M44};
pub use smallmat_array_types::{Vector, V2, V3, V4};
pub use smallmat_array_types::{Storage, Semiring, Ring, Field};

pub use smallmat_linalg::{inv, inv_with, inv_in_place, inv_in_place_with};
pub use smallmat_linalg::{solve, solve_with, det, det_cofactor};
pub use smallmat_linalg::{Context, InverseSettings, SingularityTest, SingularMatrixError, InvalidToleranceError};
pub use smallmat_linalg::row_ops;

pub mod prelude {
    pub use smallmat_linalg::prelude::*;
}
