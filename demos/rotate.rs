// demos/rotate.rs
use fixvec::prelude::*;

fn main() {
    // original point
    let p = Vec3::<f64>::new(1.0, 0.0, 0.0);
    // classical 90° about Z
    let m = [
        0.0, -1.0, 0.0,
        1.0,  0.0, 0.0,
        0.0,  0.0, 1.0,
    ];
    let p1 = Vec3::new(
        m[0] * p[0] + m[1] * p[1] + m[2] * p[2],
        m[3] * p[0] + m[4] * p[1] + m[5] * p[2],
        m[6] * p[0] + m[7] * p[1] + m[8] * p[2],
    );

    // Rodrigues rotation for +90° about Z
    let axis = Vec3::new(0.0, 0.0, 1.0);
    let p2 = p.rotate_by(&axis, std::f64::consts::FRAC_PI_2);

    // allow a tiny epsilon
    const EPS: f64 = 1e-12;
    for k in 0..3 {
        assert!((p1[k] - p2[k]).abs() < EPS, "component {} mismatch: {} vs {}", k, p1[k], p2[k]);
    }

    // rotate a point stored in a packed buffer, in place
    let mut cloud = [1.0f64, 0.0, 0.0, 0.0, 1.0, 0.0];
    if let Ok(mut q) = VectorRef::<f64, 3>::from_slice(&mut cloud[3..6]) {
        let rotated = q.rotate_by(&axis, std::f64::consts::FRAC_PI_2);
        q.assign(&rotated);
    }

    // pretty‐print p2 rounded to 6 decimal places
    println!("✔ p1 ≈ p2 = {}", Rounded::new(&p2, 6));
    println!("  packed point now {}", Rounded::new(&VectorView::<f64, 3>::from_raw(&[cloud[3], cloud[4], cloud[5]]), 6));
}
