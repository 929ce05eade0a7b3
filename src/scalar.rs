// src/scalar.rs
//! Element types a vector can hold.

use num_traits::Float;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Default scalar for callers that do not care about precision.
#[cfg(feature = "f32")]
pub type Real = f32;
/// Default scalar for callers that do not care about precision.
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// Floating-point element type of a vector.
///
/// Blanket-implemented for every `num_traits::Float` that also supports the
/// compound assignment operators and `Display`, which in practice means
/// `f32` and `f64`.
pub trait Scalar:
    Float + fmt::Debug + fmt::Display + AddAssign + SubAssign + MulAssign + DivAssign
{
}

impl<T> Scalar for T where
    T: Float + fmt::Debug + fmt::Display + AddAssign + SubAssign + MulAssign + DivAssign
{
}
