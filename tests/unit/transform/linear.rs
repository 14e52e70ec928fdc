use super::*;

#[test]
fn lerp_keeps_overshoot() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert!((lerp(0.0, 10.0, 1.1) - 11.0).abs() < 1e-12);
}

#[test]
fn inverse_lerp_handles_degenerate_span() {
    assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
    assert!((inverse_lerp(0.0, 0.7, 0.35) - 0.5).abs() < 1e-12);
}
