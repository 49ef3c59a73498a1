/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Scalar traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    use super::internal::PrimitiveSemiring;

    /// Trait for scalars with addition and multiplication.
    ///
    /// Matrices of any `Semiring` can be stored, multiplied, and have their
    /// rows exchanged and scaled. You get primitive floats and integers.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring: PrimitiveSemiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;
    use super::internal::PrimitiveRing;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This is enough for a cofactor-expansion determinant.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring: Semiring + PrimitiveRing + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;
    use super::internal::PrimitiveFloat;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// Inversion and elimination-based determinants require a `Field`.
    /// It's currently just `f32` and `f64`; both use the same algorithms
    /// and differ only in rounding.
    pub trait Field: Ring + PrimitiveFloat + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    impl_field!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    impl_ring!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    impl_semiring!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Operational supertraits of the sealed scalar traits.
///
/// These are public only so that they can appear as supertraits;
/// downstream code should bound on `Semiring`, `Ring`, or `Field`.
#[doc(hidden)]
pub mod internal {
    use std::fmt::Debug;
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default + Debug
        + PartialEq + PartialOrd
        + SelfAdd + SelfMul
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
    { }

    gen_each!{
        @{semiring}
        impl_primitive_semiring!({$T:ty})
        => {
            impl PrimitiveSemiring for $T { }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    { }

    gen_each!{
        @{ring}
        impl_primitive_ring!({$T:ty})
        => {
            impl PrimitiveRing for $T { }
        };
    }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + SelfDiv
    {
        fn abs(self) -> Self;
        fn recip(self) -> Self;
        fn is_finite(self) -> bool;
        /// Lossy for `f32`.
        fn from_f64(x: f64) -> Self;
    }

    gen_each!{
        @{field}
        impl_primitive_float!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn abs(self) -> $T { self.abs() }
                #[inline(always)] fn recip(self) -> $T { self.recip() }
                #[inline(always)] fn is_finite(self) -> bool { self.is_finite() }
                #[inline(always)] fn from_f64(x: f64) -> $T { x as $T }
            }
        };
    }
}
