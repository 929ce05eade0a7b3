// src/reducer.rs
//! Dimension-specialised summation.
//!
//! Summing `D` terms left to right makes every addition wait on the previous
//! one. For the small dimensions that dominate (points, colours) the tree is
//! spelled out instead, so `D = 4` becomes two independent pairs joined by a
//! final add. Larger `D` falls back to plain accumulation.

use crate::scalar::Scalar;
use std::marker::PhantomData;

/// Summation strategy chosen by `D`.
pub(crate) struct Reducer<T, const D: usize>(PhantomData<T>);

impl<T: Scalar, const D: usize> Reducer<T, D> {
    /// Sum all terms.
    ///
    /// `terms.len()` is the constant `D`, so after monomorphisation only one
    /// arm survives and no branch is taken at run time.
    #[inline(always)]
    pub(crate) fn sum(terms: &[T; D]) -> T {
        match terms.as_slice() {
            [a] => *a,
            [a, b] => *a + *b,
            [a, b, c] => *a + *b + *c,
            [a, b, c, d] => (*a + *b) + (*c + *d),
            rest => rest.iter().fold(T::zero(), |acc, &x| acc + x),
        }
    }
}
