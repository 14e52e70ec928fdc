use super::*;

const CURVES: [Ease; 5] = [
    Ease::Linear,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::CubicBezier {
        x1: 0.23,
        y1: 0.86,
        x2: 0.39,
        y2: 0.96,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in CURVES {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in CURVES {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_parses_strings_and_bezier_forms() {
    let v: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(v, Ease::EaseInOut);

    let v: Ease = serde_json::from_str("{\"cubic_bezier\": [0.25, 0.1, 0.25, 1.0]}").unwrap();
    assert!(matches!(v, Ease::CubicBezier { x1, .. } if x1 == 0.25));

    let serialized = serde_json::to_string(&v).unwrap();
    let back: Ease = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, v);

    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
}

#[test]
fn bezier_x_outside_unit_interval_is_rejected() {
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    assert!(Ease::EaseOut.validate().is_ok());
}

#[test]
fn default_spring_is_lightly_underdamped() {
    let spring = SpringParams::default();
    let zeta = spring.damping_ratio();
    assert!(zeta > 0.5 && zeta < 0.6, "zeta = {zeta}");

    // First peak of an underdamped step response sits at pi / wd.
    let wd = (spring.stiffness / spring.mass).sqrt() * (1.0 - zeta * zeta).sqrt();
    let peak = spring.step(std::f64::consts::PI / wd);
    assert!(peak > 1.1 && peak < 1.15, "peak = {peak}");
    assert_eq!(spring.step(0.0), 0.0);
}

#[test]
fn spring_branches_start_at_rest_and_converge() {
    for damping in [4.0, 2.0 * 80f64.sqrt(), 40.0] {
        let spring = SpringParams {
            stiffness: 80.0,
            damping,
            mass: 1.0,
        };
        assert!(spring.step(1e-9).abs() < 1e-6);
        assert!((spring.step(20.0) - 1.0).abs() < 1e-3, "damping = {damping}");
        assert_eq!(spring.step(0.0), 0.0);
        assert_eq!(spring.step(-1.0), 0.0);
        assert_eq!(spring.step(f64::NAN), 0.0);
        assert_eq!(spring.settle(0.0, 0.7), 0.0);
    }
}

#[test]
fn spring_validation() {
    assert!(SpringParams::default().validate().is_ok());
    let mut s = SpringParams::default();
    s.stiffness = 0.0;
    assert!(s.validate().is_err());
    let mut s = SpringParams::default();
    s.mass = -1.0;
    assert!(s.validate().is_err());
    let mut s = SpringParams::default();
    s.damping = f64::NAN;
    assert!(s.validate().is_err());
}

#[test]
fn profiles_hit_exact_endpoints() {
    for profile in [
        EasingProfile::default(),
        EasingProfile::spring_out(),
        EasingProfile {
            ease: Ease::EaseOut,
            spring: Some(SpringParams::default()),
            spring_mix: 1.0,
        },
    ] {
        assert_eq!(profile.apply(0.0, 0.7), 0.0);
        assert_eq!(profile.apply(1.0, 0.7), 1.0);
        assert_eq!(profile.apply(-1.0, 0.7), 0.0);
        assert_eq!(profile.apply(2.0, 0.7), 1.0);
        assert_eq!(profile.apply(f64::NAN, 0.7), 0.0);
    }
}

#[test]
fn pure_spring_profile_overshoots_mid_transition() {
    let profile = EasingProfile {
        ease: Ease::EaseOut,
        spring: Some(SpringParams::default()),
        spring_mix: 1.0,
    };
    let max = (1..100)
        .map(|i| profile.apply(f64::from(i) / 100.0, 0.7))
        .fold(f64::MIN, f64::max);
    assert!(max > 1.05, "max = {max}");
}

#[test]
fn blended_profile_stays_near_target_band() {
    let profile = EasingProfile::spring_out();
    assert!(profile.validate().is_ok());
    for i in 1..100 {
        let v = profile.apply(f64::from(i) / 100.0, 0.7);
        assert!(v > 0.0 && v < 1.1, "t = {i}%: {v}");
    }
}

#[test]
fn spring_mix_out_of_range_is_rejected() {
    let profile = EasingProfile {
        spring_mix: 1.5,
        ..EasingProfile::spring_out()
    };
    assert!(profile.validate().is_err());
}

#[test]
fn profile_json_defaults_missing_fields() {
    let p: EasingProfile = serde_json::from_str("{\"ease\": \"ease_out\"}").unwrap();
    assert_eq!(p, EasingProfile::from_ease(Ease::EaseOut));
}
