use super::*;

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-1.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(3.0), 1.0);
}

#[test]
fn ping_pong_peaks_mid_period_and_wraps() {
    assert_eq!(ping_pong(0.0), 0.0);
    assert_eq!(ping_pong(0.25), 0.5);
    assert_eq!(ping_pong(0.5), 1.0);
    assert_eq!(ping_pong(0.75), 0.5);
    assert_eq!(ping_pong(1.0), 0.0);
    assert_eq!(ping_pong(1.25), 0.5);
    assert_eq!(ping_pong(f64::INFINITY), 0.0);
}
