/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Compile-time coordinate frame tags.
//!
//! A frame tag is any type used purely as a type argument of `Matrix` or
//! `Vector`. Tags are never constructed (the ones made by `frames!` are
//! uninhabited), never stored, and never compared; all checking is done by
//! the type system.
//!
//! * A `Vector<X, N, F>` is a vector expressed in frame `F`.
//! * A `Matrix<X, N, Src, Dst>` maps vectors in `Src` to vectors in `Dst`.
//!
//! Operations between values of the same kind demand identical tags.
//! The only operations that change frames are the ones that mean to:
//! transforming a vector, composing two maps, and inverting a map.
//!
//! ```
//! use smallmat_array_types::{frames, M44, V4};
//!
//! frames!{
//!     pub enum Model;
//!     pub enum World;
//! }
//!
//! let model_to_world: M44<f32, Model, World> = M44::eye();
//! let p: V4<f32, Model> = V4::new([1.0, 2.0, 3.0, 1.0]);
//! let q: V4<f32, World> = &model_to_world * p;
//! assert_eq!(q.into_array(), [1.0, 2.0, 3.0, 1.0]);
//! ```
//!
//! Transforming a vector from the wrong frame does not compile:
//!
//! ```compile_fail
//! use smallmat_array_types::{frames, M44, V4};
//!
//! frames!{
//!     pub enum Model;
//!     pub enum World;
//! }
//!
//! let model_to_world: M44<f32, Model, World> = M44::eye();
//! let p: V4<f32, World> = V4::new([1.0, 2.0, 3.0, 1.0]);
//! let _ = &model_to_world * p;
//! ```
//!
//! Neither does composing maps whose frames do not meet:
//!
//! ```compile_fail
//! use smallmat_array_types::{frames, M33};
//!
//! frames!{
//!     pub enum A;
//!     pub enum B;
//!     pub enum C;
//! }
//!
//! let a_to_b: M33<f64, A, B> = M33::eye();
//! let a_to_c: M33<f64, A, C> = M33::eye();
//! let _ = &a_to_c * &a_to_b;
//! ```
//!
//! Nor adding vectors from different frames:
//!
//! ```compile_fail
//! use smallmat_array_types::{frames, V3};
//!
//! frames!{
//!     pub enum A;
//!     pub enum B;
//! }
//!
//! let a = V3::<f64, A>::new([1.0, 0.0, 0.0]);
//! let b = V3::<f64, B>::new([1.0, 0.0, 0.0]);
//! let _ = a + b;
//! ```
//!
//! `retag` is the escape hatch for when a value really does belong to
//! another frame.

use std::marker::PhantomData;

/// The frame used when none is specified.
#[derive(Debug)]
pub enum Untagged {}

/// Declare uninhabited frame tag types.
#[macro_export]
macro_rules! frames {
    ($( $(#[$meta:meta])* $vis:vis enum $Name:ident; )+) => {$(
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $Name {}
    )+};
}

// `fn() -> F` keeps the marker Send + Sync + Copy regardless of what F is,
// so tags never leak bounds into derives or auto traits.
pub(crate) type Marker<F> = PhantomData<fn() -> F>;
pub(crate) type MapMarker<Src, Dst> = PhantomData<fn(Src) -> Dst>;
