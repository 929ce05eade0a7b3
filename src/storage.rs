// src/storage.rs
//! Backing storage for [`GenericVector`](crate::vector::GenericVector).
//!
//! The storage type is the vector's mode:
//! - `[T; D]` owns its components,
//! - `&mut [T; D]` is a read/write view over a caller's buffer,
//! - `&[T; D]` is a read-only view.
//!
//! The set is closed; the traits are sealed so no other mode can appear.

mod sealed {
    pub trait Sealed {}

    impl<T, const D: usize> Sealed for [T; D] {}
    impl<T, const D: usize> Sealed for &[T; D] {}
    impl<T, const D: usize> Sealed for &mut [T; D] {}
}

/// Read access to `D` contiguous components.
pub trait Storage<T, const D: usize>: sealed::Sealed {
    /// `true` when the storage is owned by the vector.
    const OWNING: bool;
    /// Type name used by `Debug`.
    const NAME: &'static str;

    fn as_array(&self) -> &[T; D];
}

/// Write access to `D` contiguous components.
pub trait StorageMut<T, const D: usize>: Storage<T, D> {
    fn as_array_mut(&mut self) -> &mut [T; D];
}

impl<T, const D: usize> Storage<T, D> for [T; D] {
    const OWNING: bool = true;
    const NAME: &'static str = "Vector";

    #[inline(always)]
    fn as_array(&self) -> &[T; D] {
        self
    }
}

impl<T, const D: usize> StorageMut<T, D> for [T; D] {
    #[inline(always)]
    fn as_array_mut(&mut self) -> &mut [T; D] {
        self
    }
}

impl<T, const D: usize> Storage<T, D> for &[T; D] {
    const OWNING: bool = false;
    const NAME: &'static str = "VectorView";

    #[inline(always)]
    fn as_array(&self) -> &[T; D] {
        self
    }
}

impl<T, const D: usize> Storage<T, D> for &mut [T; D] {
    const OWNING: bool = false;
    const NAME: &'static str = "VectorRef";

    #[inline(always)]
    fn as_array(&self) -> &[T; D] {
        self
    }
}

impl<T, const D: usize> StorageMut<T, D> for &mut [T; D] {
    #[inline(always)]
    fn as_array_mut(&mut self) -> &mut [T; D] {
        self
    }
}
