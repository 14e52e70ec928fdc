use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_is_clamped_and_non_finite_is_absent() {
    assert_eq!(normalize_progress(None), None);
    assert_eq!(normalize_progress(Some(-0.2)), Some(0.0));
    assert_eq!(normalize_progress(Some(1.7)), Some(1.0));
    assert_eq!(normalize_progress(Some(0.4)), Some(0.4));
    assert_eq!(normalize_progress(Some(f64::NAN)), None);
    assert_eq!(normalize_progress(Some(f64::INFINITY)), None);
}

#[test]
fn range_construction_rejects_bad_breakpoints() {
    assert!(InterpolationRange::new(vec![0.0, 1.0], vec![0.0]).is_err());
    assert!(InterpolationRange::new(vec![0.0], vec![0.0]).is_err());
    assert!(InterpolationRange::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
    assert!(InterpolationRange::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).is_err());
    assert!(InterpolationRange::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 2.0, 3.0]).is_ok());
}

#[test]
fn range_clamps_outside_domain() {
    let r = InterpolationRange::linear(0.0, 0.7, 1.0, 0.0).unwrap();
    assert_eq!(r.sample(-5.0), 1.0);
    assert_eq!(r.sample(0.7), 0.0);
    assert_eq!(r.sample(0.9), 0.0);
    assert_eq!(r.sample(f64::NAN), 1.0);
    assert!(close(r.sample(0.35), 0.5));
}

#[test]
fn multi_segment_range_uses_surrounding_breakpoints() {
    let r = InterpolationRange::new(vec![0.0, 0.5, 1.0], vec![0.0, 100.0, 0.0]).unwrap();
    assert!(close(r.sample(0.25), 50.0));
    assert!(close(r.sample(0.5), 100.0));
    assert!(close(r.sample(0.75), 50.0));
}

#[test]
fn duplicate_breakpoint_steps_to_later_segment() {
    let r = InterpolationRange::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 5.0, 6.0]).unwrap();
    assert!(close(r.sample(0.25), 0.5));
    assert!(close(r.sample(0.5), 5.0));
    assert!(close(r.sample(0.75), 5.5));
}

#[test]
fn channel_uses_neutral_without_signal() {
    let ch = ScrollChannel::new(InterpolationRange::linear(0.0, 1.0, 0.0, 300.0).unwrap(), 0.0);
    assert_eq!(ch.eval(None), 0.0);
    assert_eq!(ch.eval(Some(f64::NAN)), 0.0);
    assert_eq!(ch.eval(Some(2.0)), 300.0);
}

#[test]
fn hero_map_matches_linear_formulas() {
    let map = ScrollProgressMapper::default();
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        let f = map.map(Some(p));
        assert!(close(f.decorative_offset, 300.0 * p), "p = {p}");
        assert!(close(f.decorative_opacity, 1.0 - 0.7 * p), "p = {p}");
        let expected = if p >= 0.7 { 0.0 } else { 1.0 - p / 0.7 };
        assert!(close(f.content_opacity, expected), "p = {p}");
    }
}

#[test]
fn hero_map_absent_signal_is_neutral() {
    let map = ScrollProgressMapper::default();
    assert_eq!(map.map(None), ScrollFrame::NEUTRAL);
}

#[test]
fn hero_map_is_idempotent() {
    let map = ScrollProgressMapper::default();
    assert_eq!(map.map(Some(0.42)), map.map(Some(0.42)));
}

#[test]
fn range_json_is_validated_on_load() {
    let ok: InterpolationRange =
        serde_json::from_str("{\"domain\": [0, 0.7], \"range\": [1, 0]}").unwrap();
    assert_eq!(ok.domain(), &[0.0, 0.7]);
    assert_eq!(ok.range(), &[1.0, 0.0]);
    assert!(
        serde_json::from_str::<InterpolationRange>("{\"domain\": [1, 0], \"range\": [1, 0]}")
            .is_err()
    );
}

#[test]
fn neutral_must_be_finite() {
    let mut map = ScrollProgressMapper::default();
    assert!(map.validate().is_ok());
    map.content_opacity.neutral = f64::NAN;
    assert!(map.validate().is_err());
}
