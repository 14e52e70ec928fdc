use super::*;

fn linear(duration_secs: f64) -> Transition {
    Transition {
        duration_secs,
        easing: EasingProfile::from_ease(Ease::Linear),
    }
}

#[test]
fn visual_state_lerps_componentwise() {
    let a = VisualState::new(0.0, 40.0, -15.0);
    let b = VisualState::RESTING;
    let mid = VisualState::lerp(&a, &b, 0.5);
    assert_eq!(mid, VisualState::new(0.5, 20.0, -7.5));
}

#[test]
fn transition_progress_is_clamped_to_its_window() {
    let tr = linear(2.0);
    assert_eq!(tr.progress(-1.0), 0.0);
    assert_eq!(tr.progress(0.0), 0.0);
    assert_eq!(tr.progress(1.0), 0.5);
    assert_eq!(tr.progress(2.0), 1.0);
    assert_eq!(tr.progress(50.0), 1.0);
    assert_eq!(tr.progress(f64::NAN), 0.0);
}

#[test]
fn transition_sample_lands_on_target() {
    let tr = Transition {
        duration_secs: 0.7,
        easing: EasingProfile::spring_out(),
    };
    let from = VisualState::new(0.0, 40.0, -15.0);
    let to = VisualState::RESTING;
    assert_eq!(tr.sample(&from, &to, 0.0), from);
    assert_eq!(tr.sample(&from, &to, 0.7), to);
    assert_eq!(tr.sample(&10.0, &20.0, 0.7), 20.0);
}

#[test]
fn transition_validation() {
    assert!(linear(0.7).validate().is_ok());
    assert!(linear(0.0).validate().is_err());
    assert!(linear(f64::INFINITY).validate().is_err());
}

#[test]
fn float_motion_peaks_half_way_through_period() {
    let float = FloatMotion::default();
    assert_eq!(float.offset_at(0.0), 0.0);
    assert!((float.offset_at(6.0) - 15.0).abs() < 1e-9);
    assert!(float.offset_at(12.0).abs() < 1e-9);
    assert!((float.offset_at(3.0) - 7.5).abs() < 1e-6);
    assert_eq!(float.offset_at(-5.0), 0.0);
}

#[test]
fn float_motion_validation() {
    assert!(FloatMotion::default().validate().is_ok());
    let bad = FloatMotion {
        period_secs: 0.0,
        ..FloatMotion::default()
    };
    assert!(bad.validate().is_err());
}
