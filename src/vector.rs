// src/vector.rs
//! Fixed-dimension vectors that either own their components or view a
//! caller's buffer.

use crate::reducer::Reducer;
use crate::scalar::Scalar;
use crate::storage::{Storage, StorageMut};
use std::array::TryFromSliceError;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A `D`-dimensional vector of `T` backed by storage `S`.
///
/// `S` selects the mode: `[T; D]` owns the components, `&mut [T; D]` and
/// `&[T; D]` view somebody else's buffer. Every operation that produces a new
/// vector returns an owning [`Vector`], whatever the operand modes were.
///
/// Constructors are only defined where they make sense, so misuse is a
/// compile error. A view cannot be default-constructed:
///
/// ```compile_fail
/// use fixvec::VectorRef;
/// let v = VectorRef::<f64, 3>::default();
/// ```
///
/// Explicit components must match the dimension:
///
/// ```compile_fail
/// use fixvec::Vector;
/// let v = Vector::<f64, 2>::new(1.0, 2.0, 3.0);
/// ```
///
/// and the 3-D geometry is not available elsewhere:
///
/// ```compile_fail
/// use fixvec::Vec2;
/// let a = Vec2::new(1.0, 0.0);
/// let _ = a.cross(&a);
/// ```
#[derive(Clone, Copy)]
pub struct GenericVector<T, const D: usize, S> {
    data: S,
    _scalar: PhantomData<T>,
}

/// An owning vector.
pub type Vector<T, const D: usize> = GenericVector<T, D, [T; D]>;
/// A read/write view over `D` components of an external buffer.
pub type VectorRef<'a, T, const D: usize> = GenericVector<T, D, &'a mut [T; D]>;
/// A read-only view over `D` components of an external buffer.
pub type VectorView<'a, T, const D: usize> = GenericVector<T, D, &'a [T; D]>;

pub type Vec1<T> = Vector<T, 1>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

impl<T, const D: usize, S> GenericVector<T, D, S> {
    #[inline(always)]
    fn wrap(data: S) -> Self {
        Self {
            data,
            _scalar: PhantomData,
        }
    }
}

// ---------------------------------------------------------------------------
// Owning construction
// ---------------------------------------------------------------------------

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Every component set to `v`.
    #[inline(always)]
    pub fn splat(v: T) -> Self {
        Self::wrap([v; D])
    }

    /// The zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Take ownership of an array of components.
    #[inline(always)]
    pub fn from_array(data: [T; D]) -> Self {
        Self::wrap(data)
    }

    /// Element-wise copy of any vector with the same scalar and dimension.
    #[inline(always)]
    pub fn from_vector<S: Storage<T, D>>(other: &GenericVector<T, D, S>) -> Self {
        Self::wrap(*other.as_array())
    }

    #[inline(always)]
    pub fn into_array(self) -> [T; D] {
        self.data
    }
}

impl<T: Scalar> Vec1<T> {
    #[inline(always)]
    pub fn new(x: T) -> Self {
        Self::wrap([x])
    }
}

impl<T: Scalar> Vec2<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self::wrap([x, y])
    }
}

impl<T: Scalar> Vec3<T> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::wrap([x, y, z])
    }
}

impl<T: Scalar> Vec4<T> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::wrap([x, y, z, w])
    }
}

/// Zero-initialised. Views have no default: there is nothing to point at.
impl<T: Scalar, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(data: [T; D]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const D: usize, S: Storage<T, D>> From<&GenericVector<T, D, S>> for Vector<T, D> {
    fn from(other: &GenericVector<T, D, S>) -> Self {
        Self::from_vector(other)
    }
}

impl<T, const D: usize> From<Vector<T, D>> for [T; D] {
    fn from(v: Vector<T, D>) -> [T; D] {
        v.data
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

impl<'a, T, const D: usize> VectorRef<'a, T, D> {
    /// Bind a read/write view to `raw`. Nothing is copied.
    #[inline(always)]
    pub fn from_raw(raw: &'a mut [T; D]) -> Self {
        Self::wrap(raw)
    }

    /// Bind a read/write view to a slice of exactly `D` components.
    ///
    /// Use `&mut buf[offset..offset + D]` to view into a larger buffer.
    pub fn from_slice(raw: &'a mut [T]) -> Result<Self, TryFromSliceError> {
        let raw: &'a mut [T; D] = raw.try_into()?;
        Ok(Self::wrap(raw))
    }
}

impl<'a, T, const D: usize> VectorView<'a, T, D> {
    /// Bind a read-only view to `raw`.
    #[inline(always)]
    pub fn from_raw(raw: &'a [T; D]) -> Self {
        Self::wrap(raw)
    }

    /// Bind a read-only view to a slice of exactly `D` components.
    pub fn from_slice(raw: &'a [T]) -> Result<Self, TryFromSliceError> {
        let raw: &'a [T; D] = raw.try_into()?;
        Ok(Self::wrap(raw))
    }
}

// ---------------------------------------------------------------------------
// Access (any mode)
// ---------------------------------------------------------------------------

impl<T, const D: usize, S: Storage<T, D>> GenericVector<T, D, S> {
    /// `true` if this vector owns its components.
    #[inline(always)]
    pub fn is_owning(&self) -> bool {
        S::OWNING
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; D] {
        self.data.as_array()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.as_array()
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_array().iter()
    }

    /// A read-only view of the same components.
    #[inline(always)]
    pub fn view(&self) -> VectorView<'_, T, D> {
        GenericVector::wrap(self.as_array())
    }
}

impl<T, const D: usize, S: StorageMut<T, D>> GenericVector<T, D, S> {
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [T; D] {
        self.data.as_array_mut()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_array_mut().iter_mut()
    }

    /// A read/write view of the same components, for as long as `self` is
    /// borrowed.
    #[inline(always)]
    pub fn reborrow(&mut self) -> VectorRef<'_, T, D> {
        GenericVector::wrap(self.as_array_mut())
    }
}

/// Indexing is bounds checked: an index outside `[0, D)` panics.
impl<T, const D: usize, S: Storage<T, D>> Index<usize> for GenericVector<T, D, S> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.as_array()[i]
    }
}

impl<T, const D: usize, S: StorageMut<T, D>> IndexMut<usize> for GenericVector<T, D, S> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_array_mut()[i]
    }
}

// ---------------------------------------------------------------------------
// Metric operations (any mode)
// ---------------------------------------------------------------------------

impl<T: Scalar, const D: usize, S: Storage<T, D>> GenericVector<T, D, S> {
    /// Owning copy of this vector.
    #[inline(always)]
    pub fn to_vector(&self) -> Vector<T, D> {
        Vector::from_vector(self)
    }

    /// Squared Euclidean norm.
    #[inline(always)]
    pub fn length2(&self) -> T {
        let squares = (*self.as_array()).map(|x| x * x);
        Reducer::<T, D>::sum(&squares)
    }

    /// Euclidean norm.
    #[inline(always)]
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Inner product.
    #[inline]
    pub fn dot<S2: Storage<T, D>>(&self, other: &GenericVector<T, D, S2>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Owning copy scaled by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Vector<T, D> {
        let mut out = self.to_vector();
        out.scale_mut(s);
        out
    }

    /// Owning copy divided by `s`, see [`unscale_mut`](Self::unscale_mut).
    #[inline]
    pub fn unscale(&self, s: T) -> Vector<T, D> {
        let mut out = self.to_vector();
        out.unscale_mut(s);
        out
    }

    /// Owning unit-length copy; `self` is left untouched.
    #[inline]
    pub fn normalized(&self) -> Vector<T, D> {
        let mut out = self.to_vector();
        out.normalize();
        out
    }
}

impl<T: Scalar, const D: usize, S: StorageMut<T, D>> GenericVector<T, D, S> {
    /// Copy `other`'s components into this vector's storage. For a view this
    /// writes the external buffer.
    #[inline]
    pub fn assign<S2: Storage<T, D>>(&mut self, other: &GenericVector<T, D, S2>) -> &mut Self {
        *self.as_array_mut() = *other.as_array();
        self
    }

    /// Set every component to `v`.
    #[inline]
    pub fn fill(&mut self, v: T) -> &mut Self {
        self.as_array_mut().fill(v);
        self
    }

    /// Multiply every component by `s` in place.
    #[inline]
    pub fn scale_mut(&mut self, s: T) {
        for x in self.iter_mut() {
            *x *= s;
        }
    }

    /// Divide every component by `s` in place.
    ///
    /// Computes `1 / s` once and multiplies, so the result may differ from
    /// per-component division in the last bit.
    #[inline]
    pub fn unscale_mut(&mut self, s: T) {
        self.scale_mut(T::one() / s);
    }

    /// Normalise in place and return the length before normalisation.
    ///
    /// A zero vector becomes the unit vector along axis 0 and `0` is
    /// returned, so the result is always unit length.
    pub fn normalize(&mut self) -> T {
        let l2 = self.length2();
        if l2 != T::zero() {
            let l = l2.sqrt();
            self.unscale_mut(l);
            l
        } else {
            let data = self.as_array_mut();
            data.fill(T::zero());
            if let Some(first) = data.first_mut() {
                *first = T::one();
            }
            T::zero()
        }
    }
}

// ---------------------------------------------------------------------------
// 3-D geometry
// ---------------------------------------------------------------------------

impl<T: Scalar, S: Storage<T, 3>> GenericVector<T, 3, S> {
    /// Cross product.
    #[inline(always)]
    pub fn cross<S2: Storage<T, 3>>(&self, o: &GenericVector<T, 3, S2>) -> Vec3<T> {
        let [x0, x1, x2] = *self.as_array();
        let [o0, o1, o2] = *o.as_array();
        Vec3::new(x1 * o2 - x2 * o1, x2 * o0 - x0 * o2, x0 * o1 - x1 * o0)
    }

    /// A vector perpendicular to this one. Not normalised.
    #[inline(always)]
    pub fn orthogonal(&self) -> Vec3<T> {
        let [x0, x1, x2] = *self.as_array();
        Vec3::new(x1 + x2, x2 - x0, -x0 - x1)
    }

    /// Angle in radians between this vector and `o`; `0` if either is zero.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on (anti)parallel
    /// inputs cannot produce NaN. NaN or infinite components still give NaN.
    pub fn angle<S2: Storage<T, 3>>(&self, o: &GenericVector<T, 3, S2>) -> T {
        let l = self.length() * o.length();
        if l == T::zero() {
            return T::zero();
        }
        let c = self.dot(o) / l;
        num_traits::clamp(c, -T::one(), T::one()).acos()
    }

    /// Rotate by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be unit length; this is not checked and a
    /// non-unit axis gives a scaled, wrong result.
    pub fn rotate_by<S2: Storage<T, 3>>(&self, axis: &GenericVector<T, 3, S2>, angle: T) -> Vec3<T> {
        let (s, c) = angle.sin_cos();
        self.scale(c) + axis.scale((T::one() - c) * self.dot(axis)) - self.cross(axis).scale(s)
    }
}

// ---------------------------------------------------------------------------
// Comparison & formatting
// ---------------------------------------------------------------------------

/// Exact component-wise equality, across modes.
impl<T, const D: usize, S, S2> PartialEq<GenericVector<T, D, S2>> for GenericVector<T, D, S>
where
    T: PartialEq,
    S: Storage<T, D>,
    S2: Storage<T, D>,
{
    #[inline]
    fn eq(&self, other: &GenericVector<T, D, S2>) -> bool {
        self.as_array() == other.as_array()
    }
}

impl<T: fmt::Debug, const D: usize, S: Storage<T, D>> fmt::Debug for GenericVector<T, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(S::NAME).field(self.as_array()).finish()
    }
}

/// Renders `(x0,x1,...)`. Width and precision flags apply to each component.
impl<T: fmt::Display, const D: usize, S: Storage<T, D>> fmt::Display for GenericVector<T, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (k, x) in self.iter().enumerate() {
            if k > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        f.write_str(")")
    }
}

/// A tiny wrapper for printing a vector rounded to `decimals` places.
pub struct Rounded<'a, T, const D: usize, S>(pub &'a GenericVector<T, D, S>, pub usize);

impl<'a, T, const D: usize, S> Rounded<'a, T, D, S> {
    /// Wrap a vector for printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a GenericVector<T, D, S>, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl<'a, T: fmt::Display, const D: usize, S: Storage<T, D>> fmt::Display for Rounded<'a, T, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(v, dec) = self;
        write!(f, "{:.*}", *dec, v)
    }
}
