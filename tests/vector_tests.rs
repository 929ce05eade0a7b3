// tests/vector_tests.rs

use fixvec::{Rounded, Vector};

type Vec1 = fixvec::Vec1<f64>;
type Vec2 = fixvec::Vec2<f64>;
type Vec3 = fixvec::Vec3<f64>;
type Vec4 = fixvec::Vec4<f64>;

const EPS: f64 = 1e-12;

#[test]
fn test_new_and_index() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[1], 2.0);
    assert_eq!(v[2], 3.0);

    assert_eq!(Vec1::new(5.0).into_array(), [5.0]);
    assert_eq!(Vec2::new(1.0, 2.0).into_array(), [1.0, 2.0]);
    assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).into_array(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_splat_broadcasts() {
    let v: Vector<f64, 7> = Vector::splat(2.5);
    assert!(v.iter().all(|&x| x == 2.5));
    let w: Vector<f32, 2> = Vector::splat(-1.0);
    assert_eq!(w, fixvec::Vec2::new(-1.0f32, -1.0));
}

#[test]
fn test_default_is_zero() {
    let v: Vector<f64, 4> = Vector::default();
    assert_eq!(v, Vector::<f64, 4>::zero());
}

#[test]
fn test_index_mut() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v[1] = 8.0;
    assert_eq!(v, Vec3::new(1.0, 8.0, 3.0));
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let i = v.as_slice().len();
    let _ = v[i];
}

#[test]
fn test_add() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
}

#[test]
fn test_sub() {
    let a = Vec3::new(4.0, 5.0, 6.0);
    let b = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(a - b, Vec3::new(3.0, 4.0, 5.0));
}

#[test]
fn test_compound_assign() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
    v -= &Vec3::new(2.0, 2.0, 2.0);
    assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    v *= Vec3::new(5.0, 5.0, 0.5);
    assert_eq!(v, Vec3::new(0.0, 5.0, 1.0));
    v /= Vec3::new(1.0, 5.0, 2.0);
    assert_eq!(v, Vec3::new(0.0, 1.0, 0.5));
    v *= 4.0;
    assert_eq!(v, Vec3::new(0.0, 4.0, 2.0));
    v /= 2.0;
    assert_eq!(v, Vec3::new(0.0, 2.0, 1.0));
}

#[test]
fn test_mul_scalar_commutes() {
    let v = Vec3::new(2.0, -3.0, 0.5);
    assert_eq!(v * 3.0, Vec3::new(6.0, -9.0, 1.5));
    assert_eq!(v * 3.0, 3.0 * v);
    assert_eq!(&v * 3.0, 3.0 * &v);
}

#[test]
fn test_div_scalar_uses_reciprocal() {
    let v = Vec3::new(1.0, 2.0, 10.0);
    let r = 1.0 / 7.0;
    assert_eq!(v / 7.0, Vec3::new(r, 2.0 * r, 10.0 * r));
    assert_eq!(v.unscale(7.0), v.scale(r));
}

#[test]
fn test_neg() {
    let v = Vec3::new(1.0, -2.0, 0.0);
    assert_eq!(-v, Vec3::new(-1.0, 2.0, -0.0));
    assert_eq!(-&v, -v);
}

#[test]
fn test_equality_is_exact() {
    let a = Vec2::new(0.1 + 0.2, 1.0);
    let b = Vec2::new(0.3, 1.0);
    assert!(a != b);
    assert!(a == Vec2::new(0.1 + 0.2, 1.0));
}

#[test]
fn test_dot() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, -5.0, 6.0);
    // 1*4 + 2*(-5) + 3*6 = 4 -10 +18 = 12
    assert!((a.dot(&b) - 12.0).abs() < EPS);
}

#[test]
fn test_length() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert_eq!(v.length2(), 25.0);
    assert!((v.length() - 5.0).abs() < EPS);
}

#[test]
fn test_normalize_returns_previous_length() {
    let mut v = Vec3::new(3.0, 0.0, 4.0);
    let l = v.normalize();
    assert!((l - 5.0).abs() < EPS);
    assert!((v.length() - 1.0).abs() < EPS);
    assert!((v[0] - 0.6).abs() < EPS);
    assert!((v[2] - 0.8).abs() < EPS);
}

#[test]
fn test_normalize_zero_vector() {
    let mut v: Vector<f64, 4> = Vector::zero();
    assert_eq!(v.normalize(), 0.0);
    assert_eq!(v, Vec4::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_normalized_leaves_source() {
    let v = Vec2::new(0.0, 2.0);
    let n = v.normalized();
    assert_eq!(n, Vec2::new(0.0, 1.0));
    assert_eq!(v, Vec2::new(0.0, 2.0));
}

#[test]
fn test_zero_dimension() {
    let mut v: Vector<f64, 0> = Vector::default();
    assert_eq!(v.length2(), 0.0);
    assert_eq!(v.normalize(), 0.0);
    assert_eq!(format!("{}", v), "()");
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Vec3::new(1.0, 2.5, -3.0)), "(1,2.5,-3)");
    assert_eq!(format!("{}", Vec1::new(4.0)), "(4)");
    assert_eq!(format!("{:.1}", Vec2::new(1.0, 0.75)), "(1.0,0.8)");
}

#[test]
fn test_display_rounded() {
    let v = Vec3::new(1.23456789, -2.3456789, 3.456789);
    let s = format!("{}", Rounded::new(&v, 3));
    assert_eq!(s, "(1.235,-2.346,3.457)");
}

#[test]
fn test_array_conversions() {
    let v: Vector<f64, 3> = [1.0, 2.0, 3.0].into();
    let arr: [f64; 3] = v.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);
}
