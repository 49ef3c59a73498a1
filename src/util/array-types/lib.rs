/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Square matrices and vectors of dimension 1 through 4, tagged with
//! compile-time coordinate frames.
//!
//! Storage is column-major, so `as_flat` can be handed directly to a
//! rendering API. See the `frame` module for the tagging rules.

#[macro_use] mod macros;
mod traits;
mod storage;
mod types;
mod methods_m;
mod methods_v;
mod ops;
mod conv;
pub mod frame;

pub use crate::traits::{Semiring, Ring, Field};
#[doc(hidden)]
pub use crate::traits::internal;
pub use crate::storage::{Storage, check_index};
pub use crate::types::{Matrix, M22, M33, M44};
pub use crate::types::{Vector, V2, V3, V4};
pub use crate::frame::Untagged;
