//! Property-based tests for angle normalization, joint limits and the
//! camera pitch clamp using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rigpose-tests --test proptest_invariants
//! ```

use glam::DVec2;
use proptest::prelude::*;

use rigpose_core::{
    normalize_degrees, Axis, CameraConfig, InputSample, OrbitCameraController, TouchSample,
};
use rigpose_tests::humanoid_model;

// ============================================================================
// 1. Normalization
// ============================================================================

/// Difference of two angles, ignoring whole turns.
fn wrapped_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

proptest! {
    /// Every finite input lands in (-180, 180].
    #[test]
    fn normalize_stays_in_canonical_range(d in -1.0e9f64..1.0e9) {
        let n = normalize_degrees(d);
        prop_assert!(n > -180.0 && n <= 180.0, "normalize({}) = {}", d, n);
    }

    /// Adding whole turns does not change the result.
    #[test]
    fn normalize_is_periodic(d in -1.0e4f64..1.0e4, k in -100i32..100) {
        let a = normalize_degrees(d);
        let b = normalize_degrees(d + 360.0 * k as f64);
        prop_assert!(
            wrapped_difference(a, b) < 1e-6,
            "normalize({}) = {} but normalize({} + 360*{}) = {}", d, a, d, k, b
        );
    }

    /// Values already in range are returned unchanged.
    #[test]
    fn normalize_is_identity_in_range(d in -179.999f64..=180.0) {
        prop_assert_eq!(normalize_degrees(d), d);
    }
}

// ============================================================================
// 2. Joint limits
// ============================================================================

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn joint_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("neck"),
        Just("spine"),
        Just("head"),
        Just("shoulder_l"),
        Just("hips"),
    ]
}

proptest! {
    /// Written angles always respect the joint's limit, and non-controllable
    /// axes never change.
    #[test]
    fn set_axis_respects_limits(
        joint in joint_strategy(),
        axis in axis_strategy(),
        degrees in -1.0e6f64..1.0e6,
    ) {
        let (mut model, _) = humanoid_model();
        let before = model.current_rotation(joint).unwrap();
        let written = model.set_axis(joint, axis, degrees).unwrap();
        let after = model.current_rotation(joint).unwrap();

        match model.config(joint).unwrap().limit(axis) {
            Some(limit) => {
                let angle = written.unwrap();
                prop_assert!(limit.contains(angle), "{} outside [{}, {}]", angle, limit.min, limit.max);
                prop_assert_eq!(axis.component(after), angle);
                prop_assert_eq!(model.pose()[joint].get(axis), Some(angle));
            }
            None => {
                prop_assert_eq!(written, None);
                prop_assert_eq!(after, before);
                prop_assert!(model.pose()[joint].is_empty());
            }
        }

        for other in Axis::ALL.into_iter().filter(|a| *a != axis) {
            prop_assert_eq!(other.component(after), other.component(before));
        }
    }

    /// After any edit sequence, reset-all restores the captured rest pose.
    #[test]
    fn reset_all_restores_rest_pose(
        edits in prop::collection::vec(
            (joint_strategy(), axis_strategy(), -720.0f64..720.0),
            0..20,
        ),
    ) {
        let (mut model, _) = humanoid_model();
        for (joint, axis, degrees) in edits {
            model.set_axis(joint, axis, degrees).unwrap();
        }
        model.reset_all();
        for name in model.all_names() {
            prop_assert_eq!(model.current_rotation(name).unwrap(), model.rest_pose()[name]);
            prop_assert!(model.pose()[name].is_empty());
        }
    }
}

// ============================================================================
// 3. Camera
// ============================================================================

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e5f64..1.0e5,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn sample_strategy() -> impl Strategy<Value = InputSample> {
    let preset = prop::option::of(prop_oneof![
        Just("Front".to_string()),
        Just("Left".to_string()),
        Just("Right".to_string()),
        Just("Back".to_string()),
        Just("Missing".to_string()),
    ]);
    let drag = prop::option::of((any_f64(), any_f64()).prop_map(|(x, y)| DVec2::new(x, y)));
    let touch = prop_oneof![
        Just(TouchSample::None),
        (any_f64(), any_f64()).prop_map(|(x, y)| TouchSample::Drag(DVec2::new(x, y))),
        (any_f64(), any_f64()).prop_map(|(a, b)| TouchSample::Pinch {
            current: [DVec2::ZERO, DVec2::new(a, 0.0)],
            previous: [DVec2::ZERO, DVec2::new(b, 0.0)],
        }),
    ];
    (preset, drag, any_f64(), touch).prop_map(|(preset, drag, scroll, touch)| InputSample {
        preset,
        drag,
        scroll,
        touch,
    })
}

proptest! {
    /// Pitch and distance stay within limits and the transform stays finite
    /// for any input sequence.
    #[test]
    fn camera_stays_within_limits(
        frames in prop::collection::vec((sample_strategy(), any_f64()), 1..40),
    ) {
        let mut camera = OrbitCameraController::new(CameraConfig::default()).unwrap();
        for (sample, dt) in &frames {
            let transform = camera.on_frame(sample, *dt);
            let params = camera.params();
            prop_assert!((-30.0..=80.0).contains(&params.pitch), "pitch {}", params.pitch);
            prop_assert!(params.yaw.is_finite());
            prop_assert!(params.distance.is_finite());
            prop_assert!(transform.position.is_finite());
            prop_assert!(transform.orientation.is_finite());
        }
    }
}
