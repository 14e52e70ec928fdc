use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_time_and_coverage() {
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frame_to_secs(FrameIndex(15)) - 0.5).abs() < 1e-12);
    assert_eq!(fps.frames_for_secs(1.0), 30);
    assert_eq!(fps.frames_for_secs(1.01), 31);
    assert_eq!(fps.frames_for_secs(0.0), 1);
    assert_eq!(fps.frames_for_secs(f64::NAN), 1);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn rotation_pivots_about_anchor() {
    let t = Transform2D {
        translate: Vec2::ZERO,
        rotation_rad: std::f64::consts::PI,
        anchor: Vec2::new(5.0, 5.0),
    };
    let p = t.to_affine() * Point::new(5.0, 5.0);
    assert!((p.x - 5.0).abs() < 1e-9);
    assert!((p.y - 5.0).abs() < 1e-9);
}

#[test]
fn resting_state_is_default() {
    assert_eq!(VisualState::default(), VisualState::new(1.0, 0.0, 0.0));
    assert!(!VisualState::new(f64::NAN, 0.0, 0.0).is_finite());
}
