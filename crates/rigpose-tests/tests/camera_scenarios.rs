//! Scenario tests for the orbit camera controller.

use glam::{DVec2, DVec3};
use rigpose_core::{CameraConfig, InputSample, OrbitCameraController, TouchSample, ViewPreset};

fn reference_config() -> CameraConfig {
    CameraConfig {
        presets: vec![
            ViewPreset::new("Start", 0.0, 20.0, 5.0),
            ViewPreset::new("Behind", 180.0, 20.0, 6.0),
        ],
        blend_time: 0.25,
        ..CameraConfig::default()
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_blend_snaps_exactly_after_duration() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    assert!(camera.select_preset("Behind"));

    // Uneven frame times summing to 0.25 s.
    for dt in [0.016, 0.05, 0.034, 0.1, 0.05] {
        camera.on_frame(&InputSample::idle(), dt);
    }

    assert!(!camera.is_blending());
    assert_eq!(camera.params().yaw, 180.0);
    assert_eq!(camera.params().distance, 6.0);
    assert_eq!(camera.params().pitch, 20.0);
}

#[test]
fn test_blend_is_eased() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    camera.select_preset("Behind");

    let mut yaws = Vec::new();
    for _ in 0..10 {
        camera.on_frame(&InputSample::idle(), 0.025);
        yaws.push(camera.params().yaw);
    }
    let steps: Vec<f64> = yaws.windows(2).map(|w| w[1] - w[0]).collect();
    // Smoothstep accelerates then decelerates.
    assert!(steps[0] < steps[4]);
    assert!(steps[8] < steps[4]);
    assert!(yaws.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_manual_drag_cancels_blend_mid_flight() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    camera.select_preset("Behind");
    camera.on_frame(&InputSample::idle(), 0.1);
    assert!(camera.is_blending());
    let before = camera.params().yaw;

    camera.on_frame(&InputSample::drag(-5.0, 0.0), 0.016);
    assert!(!camera.is_blending());
    let after_drag = camera.params().yaw;
    assert!(approx(after_drag, before - 1.0));

    for _ in 0..20 {
        camera.on_frame(&InputSample::idle(), 0.05);
    }
    assert_eq!(camera.params().yaw, after_drag);
}

#[test]
fn test_selection_and_drag_in_same_frame() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    let sample = InputSample {
        preset: Some("Behind".into()),
        drag: Some(DVec2::new(10.0, 0.0)),
        ..InputSample::default()
    };
    camera.on_frame(&sample, 0.016);
    // The selection starts a blend and the drag immediately cancels it.
    assert!(!camera.is_blending());
    assert!(approx(camera.params().yaw, 2.0));
}

#[test]
fn test_pitch_limits_hold_for_every_source() {
    let config = CameraConfig {
        presets: vec![
            ViewPreset::new("Start", 0.0, 20.0, 5.0),
            ViewPreset::new("Overhead", 0.0, 120.0, 5.0),
            ViewPreset::new("Under", 0.0, -90.0, 5.0),
        ],
        ..CameraConfig::default()
    };
    let mut camera = OrbitCameraController::new(config).unwrap();
    let samples = [
        InputSample::select("Overhead"),
        InputSample::idle(),
        InputSample::drag(0.0, 5_000.0),
        InputSample::select("Under"),
        InputSample::idle(),
        InputSample::touch(TouchSample::Drag(DVec2::new(0.0, -90_000.0))),
        InputSample::idle(),
    ];
    for sample in &samples {
        for _ in 0..5 {
            camera.on_frame(sample, 0.1);
            let pitch = camera.params().pitch;
            assert!((-30.0..=80.0).contains(&pitch), "pitch {} escaped limits", pitch);
        }
    }
}

#[test]
fn test_distance_limits_for_zoom() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    camera.on_frame(&InputSample::scroll(-1e6), 0.016);
    assert_eq!(camera.params().distance, 15.0);

    let spread = TouchSample::pinch_from_deltas(
        [DVec2::new(0.0, 0.0), DVec2::new(1e6, 0.0)],
        [DVec2::new(0.0, 0.0), DVec2::new(1e6 - 10.0, 0.0)],
    );
    camera.on_frame(&InputSample::touch(spread), 0.016);
    // Fingers spread from 10 px to 1e6 px apart: zoom in to the minimum.
    assert_eq!(camera.params().distance, 1.5);
}

#[test]
fn test_nan_sample_is_no_input() {
    let mut camera = OrbitCameraController::new(reference_config()).unwrap();
    let before = *camera.params();
    let sample = InputSample {
        preset: None,
        drag: Some(DVec2::new(f64::NAN, f64::INFINITY)),
        scroll: f64::NAN,
        touch: TouchSample::Pinch {
            current: [DVec2::ZERO, DVec2::new(f64::NAN, 0.0)],
            previous: [DVec2::ZERO, DVec2::ONE],
        },
    };
    let transform = camera.on_frame(&sample, f64::INFINITY);
    assert_eq!(*camera.params(), before);
    assert!(transform.position.is_finite());
    assert!(transform.orientation.is_finite());
}

#[test]
fn test_transform_orbits_target() {
    let mut config = reference_config();
    config.target = [0.0, 1.0, 0.0];
    let mut camera = OrbitCameraController::new(config).unwrap();
    camera.initialize(&ViewPreset::new("Side", 90.0, 0.0, 4.0).with_focus_offset([0.0, 0.5, 0.0]));

    let transform = camera.on_frame(&InputSample::idle(), 0.016);
    assert_eq!(transform.focus, DVec3::new(0.0, 1.5, 0.0));
    assert!(transform
        .position
        .abs_diff_eq(DVec3::new(-4.0, 1.5, 0.0), 1e-9));
    assert!(transform.forward().abs_diff_eq(DVec3::X, 1e-9));
    // Up stays +Y for a level camera.
    assert!((transform.orientation * DVec3::Y).abs_diff_eq(DVec3::Y, 1e-9));
}

#[test]
fn test_default_presets_and_hotkeys() {
    let mut camera = OrbitCameraController::new(CameraConfig::default()).unwrap();
    let names: Vec<_> = camera.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Front", "Left", "Right", "Back"]);
    assert_eq!(camera.params().focus_offset, DVec3::new(0.0, 0.6, 0.0));

    assert!(camera.select_hotkey('e'));
    camera.on_frame(&InputSample::idle(), 1.0);
    assert_eq!(camera.params().yaw, 90.0);
    assert_eq!(camera.params().distance, 5.5);
}
