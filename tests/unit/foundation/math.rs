use super::*;

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
}

#[test]
fn lerp_extrapolates_for_overshoot() {
    assert!(lerp(0.0, 1.0, 1.2) > 1.0);
}

#[test]
fn vec2_lerp_is_componentwise() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(-100.0, 50.0), &Vec2::new(0.0, 0.0), 0.5);
    assert_eq!(v, Vec2::new(-50.0, 25.0));
}

#[test]
fn clamp01_handles_nan_and_bounds() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn map_range_maps_sine_domain() {
    assert_eq!(map_range(-1.0, -1.0, 1.0, 0.2, 0.5), 0.2);
    assert!((map_range(1.0, -1.0, 1.0, 0.2, 0.5) - 0.5).abs() < 1e-12);
    assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
}
