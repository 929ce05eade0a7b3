// src/prelude.rs
//! The “everything” import for fixvec.
//!
//! ```rust
//! use fixvec::prelude::*;
//! ```

pub use crate::scalar::{Real, Scalar};
pub use crate::storage::{Storage, StorageMut};
pub use crate::vector::{
    GenericVector, Rounded, Vec1, Vec2, Vec3, Vec4, Vector, VectorRef, VectorView,
};
