use approx::{assert_abs_diff_eq, assert_relative_eq};
use kinema::Vector2d;

const SAMPLES: [f64; 9] = [-1e6, -250.5, -3.0, -1e-3, 0.0, 1e-3, 2.5, 640.0, 1e6];

#[test]
fn cartesian_setter_keeps_polar_consistent() {
    let mut v = Vector2d::zeroed();
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            v.set_cartesian(x, y);
            assert_eq!(v.x(), x);
            assert_eq!(v.y(), y);
            assert_relative_eq!(v.magnitude(), x.hypot(y), max_relative = 1e-9);
            assert_relative_eq!(v.angle(), y.atan2(x), epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn polar_setter_keeps_cartesian_consistent() {
    let mut v = Vector2d::zeroed();
    for &magnitude in &[0.0, 1e-3, 1.0, 42.0, 1e5] {
        for step in -12..=12 {
            let angle = step as f64 * 0.3;
            v.set_polar(magnitude, angle);
            assert_eq!(v.magnitude(), magnitude);
            assert_eq!(v.angle(), angle);
            assert_abs_diff_eq!(v.x(), magnitude * angle.cos(), epsilon = 1e-9 * magnitude.max(1.0));
            assert_abs_diff_eq!(v.y(), magnitude * angle.sin(), epsilon = 1e-9 * magnitude.max(1.0));
        }
    }
}

#[test]
fn polar_then_cartesian_recovers_magnitude() {
    let v = Vector2d::from_polar(5.0f64, 2.0);
    let w = Vector2d::from_cartesian(v.x(), v.y());
    assert_relative_eq!(w.magnitude(), 5.0, max_relative = 1e-12);
    assert_relative_eq!(w.angle(), 2.0, max_relative = 1e-12);
}

#[test]
fn copy_is_independent_of_source() {
    let mut src = Vector2d::from_cartesian(1.0f64, -2.0);
    let mut dest = Vector2d::zeroed();
    dest.copy_from(&src);
    assert_eq!(dest, src);

    src.set_polar(9.0, 1.0);
    assert_eq!(dest.x(), 1.0);
    assert_eq!(dest.y(), -2.0);
    assert_relative_eq!(dest.magnitude(), 5.0f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn zero_clears_all_four_fields() {
    let mut v = Vector2d::from_polar(3.0f32, -2.0);
    v.zero();
    assert_eq!(v.x(), 0.0);
    assert_eq!(v.y(), 0.0);
    assert_eq!(v.magnitude(), 0.0);
    assert_eq!(v.angle(), 0.0);
}

#[test]
fn infinity_is_not_validated() {
    let v = Vector2d::from_cartesian(f64::INFINITY, 0.0);
    assert!(v.magnitude().is_infinite());
}
