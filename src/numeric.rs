//! The set of key types a tree can hold.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer or floating-point type usable as a tree key.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32` and
/// `f64`. The pointer-sized `usize` and `isize` are left out on purpose. The trait is
/// sealed so the list can't grow outside this crate.
///
/// Keys only need [`PartialOrd`] so floats qualify. A tree never asks whether two keys
/// are unordered; it only asks whether one is greater than another, so a `NaN` on either
/// side of a comparison sends the key down the right subtree.
pub trait Numeric: Copy + PartialOrd + fmt::Debug + sealed::Sealed {}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

impl_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
