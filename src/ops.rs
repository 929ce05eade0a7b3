// src/ops.rs
//! Operator overloads for [`GenericVector`].
//!
//! Vector operands may be in any mode as long as scalar type and dimension
//! match. Binary operators always return an owning [`Vector`], so the result
//! never aliases an operand's storage.

use crate::scalar::Scalar;
use crate::storage::{Storage, StorageMut};
use crate::vector::{GenericVector, Vector};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Element-wise compound assignment with another vector.
macro_rules! impl_compound_vector_op {
    ($Assign:ident, $assign:ident, $op:tt) => {
        impl<'b, T, const D: usize, S, S2> $Assign<&'b GenericVector<T, D, S2>> for GenericVector<T, D, S>
        where
            T: Scalar,
            S: StorageMut<T, D>,
            S2: Storage<T, D>,
        {
            #[inline]
            fn $assign(&mut self, rhs: &'b GenericVector<T, D, S2>) {
                for (x, &o) in self.iter_mut().zip(rhs.iter()) {
                    *x $op o;
                }
            }
        }

        impl<T, const D: usize, S, S2> $Assign<GenericVector<T, D, S2>> for GenericVector<T, D, S>
        where
            T: Scalar,
            S: StorageMut<T, D>,
            S2: Storage<T, D>,
        {
            #[inline]
            fn $assign(&mut self, rhs: GenericVector<T, D, S2>) {
                <Self as $Assign<&GenericVector<T, D, S2>>>::$assign(self, &rhs);
            }
        }
    };
}

impl_compound_vector_op!(AddAssign, add_assign, +=);
impl_compound_vector_op!(SubAssign, sub_assign, -=);
impl_compound_vector_op!(MulAssign, mul_assign, *=);
impl_compound_vector_op!(DivAssign, div_assign, /=);

// Element-wise binary operators, every combination of by-value and by-ref.
macro_rules! impl_binary_vector_op {
    ($Op:ident, $op:ident, $Assign:ident, $assign:ident) => {
        impl<'a, 'b, T, const D: usize, S, S2> $Op<&'b GenericVector<T, D, S2>> for &'a GenericVector<T, D, S>
        where
            T: Scalar,
            S: Storage<T, D>,
            S2: Storage<T, D>,
        {
            type Output = Vector<T, D>;

            #[inline]
            fn $op(self, rhs: &'b GenericVector<T, D, S2>) -> Vector<T, D> {
                let mut out = self.to_vector();
                <Vector<T, D> as $Assign<&GenericVector<T, D, S2>>>::$assign(&mut out, rhs);
                out
            }
        }

        impl<T, const D: usize, S, S2> $Op<GenericVector<T, D, S2>> for GenericVector<T, D, S>
        where
            T: Scalar,
            S: Storage<T, D>,
            S2: Storage<T, D>,
        {
            type Output = Vector<T, D>;

            #[inline]
            fn $op(self, rhs: GenericVector<T, D, S2>) -> Vector<T, D> {
                <&Self as $Op<&GenericVector<T, D, S2>>>::$op(&self, &rhs)
            }
        }

        impl<'b, T, const D: usize, S, S2> $Op<&'b GenericVector<T, D, S2>> for GenericVector<T, D, S>
        where
            T: Scalar,
            S: Storage<T, D>,
            S2: Storage<T, D>,
        {
            type Output = Vector<T, D>;

            #[inline]
            fn $op(self, rhs: &'b GenericVector<T, D, S2>) -> Vector<T, D> {
                <&Self as $Op<&GenericVector<T, D, S2>>>::$op(&self, rhs)
            }
        }

        impl<'a, T, const D: usize, S, S2> $Op<GenericVector<T, D, S2>> for &'a GenericVector<T, D, S>
        where
            T: Scalar,
            S: Storage<T, D>,
            S2: Storage<T, D>,
        {
            type Output = Vector<T, D>;

            #[inline]
            fn $op(self, rhs: GenericVector<T, D, S2>) -> Vector<T, D> {
                <Self as $Op<&GenericVector<T, D, S2>>>::$op(self, &rhs)
            }
        }
    };
}

impl_binary_vector_op!(Add, add, AddAssign, add_assign);
impl_binary_vector_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_vector_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_vector_op!(Div, div, DivAssign, div_assign);

impl<T: Scalar, const D: usize, S: Storage<T, D>> Neg for &GenericVector<T, D, S> {
    type Output = Vector<T, D>;

    #[inline]
    fn neg(self) -> Vector<T, D> {
        let mut out = self.to_vector();
        for x in out.iter_mut() {
            *x = -*x;
        }
        out
    }
}

impl<T: Scalar, const D: usize, S: Storage<T, D>> Neg for GenericVector<T, D, S> {
    type Output = Vector<T, D>;

    #[inline]
    fn neg(self) -> Vector<T, D> {
        -&self
    }
}

// Scalar operators. These are stamped out per concrete float so that
// `scalar * vector` can be written: a generic `impl<T> Mul<_> for T` is not
// allowed.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<const D: usize, S: StorageMut<$t, D>> MulAssign<$t> for GenericVector<$t, D, S> {
            #[inline]
            fn mul_assign(&mut self, s: $t) {
                self.scale_mut(s);
            }
        }

        /// Multiplies by the reciprocal of `s`.
        impl<const D: usize, S: StorageMut<$t, D>> DivAssign<$t> for GenericVector<$t, D, S> {
            #[inline]
            fn div_assign(&mut self, s: $t) {
                self.unscale_mut(s);
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Mul<$t> for GenericVector<$t, D, S> {
            type Output = Vector<$t, D>;

            #[inline]
            fn mul(self, s: $t) -> Vector<$t, D> {
                self.scale(s)
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Mul<$t> for &GenericVector<$t, D, S> {
            type Output = Vector<$t, D>;

            #[inline]
            fn mul(self, s: $t) -> Vector<$t, D> {
                self.scale(s)
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Mul<GenericVector<$t, D, S>> for $t {
            type Output = Vector<$t, D>;

            #[inline]
            fn mul(self, v: GenericVector<$t, D, S>) -> Vector<$t, D> {
                v.scale(self)
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Mul<&GenericVector<$t, D, S>> for $t {
            type Output = Vector<$t, D>;

            #[inline]
            fn mul(self, v: &GenericVector<$t, D, S>) -> Vector<$t, D> {
                v.scale(self)
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Div<$t> for GenericVector<$t, D, S> {
            type Output = Vector<$t, D>;

            #[inline]
            fn div(self, s: $t) -> Vector<$t, D> {
                self.unscale(s)
            }
        }

        impl<const D: usize, S: Storage<$t, D>> Div<$t> for &GenericVector<$t, D, S> {
            type Output = Vector<$t, D>;

            #[inline]
            fn div(self, s: $t) -> Vector<$t, D> {
                self.unscale(s)
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::vector::{Vec3, VectorRef};

    #[test]
    fn mixed_modes_produce_owned_results() {
        let mut buf = [1.0f64, 1.0, 1.0];
        let view = VectorRef::from_raw(&mut buf);
        let a = Vec3::<f64>::new(1.0, 2.0, 3.0);
        let sum = &a + &view;
        assert!(sum.is_owning());
        assert_eq!(sum, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn hadamard() {
        let a = Vec3::<f64>::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(a * b, Vec3::new(2.0, 8.0, 18.0));
        assert_eq!(b / a, Vec3::splat(2.0));
    }

    #[test]
    fn reciprocal_division() {
        let mut v = Vec3::<f64>::new(1.0, 2.0, 3.0);
        v /= 3.0;
        let r = 1.0 / 3.0;
        assert_eq!(v, Vec3::new(r, 2.0 * r, 3.0 * r));
    }
}
