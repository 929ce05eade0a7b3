//! # fixvec Quickstart
//!
//! ```rust
//! use fixvec::prelude::*;
//!
//! // Rotate (1,0,0) 90° about the Z axis
//! let v = Vec3::<f64>::new(1.0, 0.0, 0.0);
//! let axis = Vec3::new(0.0, 0.0, 1.0);
//! let v_rot = v.rotate_by(&axis, std::f64::consts::FRAC_PI_2);
//!
//! // Should end up at (0,1,0)
//! const EPS: f64 = 1e-12;
//! assert!(v_rot[0].abs() < EPS);
//! assert!((v_rot[1] - 1.0).abs() < EPS);
//! assert!(v_rot[2].abs() < EPS);
//!
//! // Views write straight into the caller's buffer
//! let mut buf = [1.0f64, 2.0, 3.0];
//! let mut r = VectorRef::from_raw(&mut buf);
//! r[0] = 9.0;
//! assert_eq!(buf, [9.0, 2.0, 3.0]);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod ops;
pub mod prelude;
pub mod scalar;
pub mod storage;
pub mod vector;

mod reducer;

// --- Public API exports ---

pub use scalar::{Real, Scalar};
pub use storage::{Storage, StorageMut};
pub use vector::{
    GenericVector, Rounded, Vec1, Vec2, Vec3, Vec4, Vector, VectorRef, VectorView,
};
