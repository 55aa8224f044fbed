//! Scenario tests for catalog loading and the joint pose model.

use glam::DVec3;
use pretty_assertions::assert_eq;
use rigpose_core::{
    read_joint_input, Axis, AxisAngles, InputErrorKind, JointPoseModel, LoadError, PoseError, Rig,
    SceneRig, WarningCode,
};
use rigpose_tests::{humanoid_model, humanoid_rig};

// ============================================================================
// Catalog loading
// ============================================================================

#[test]
fn test_broken_entries_are_skipped_with_warnings() {
    let (model, warnings) = humanoid_model();

    assert_eq!(
        model.all_names(),
        vec!["head", "hips", "neck", "shoulder_l", "spine"]
    );

    let codes: Vec<_> = warnings
        .iter()
        .map(|w| (w.code, w.joint.as_deref()))
        .collect();
    assert_eq!(
        codes,
        vec![
            (WarningCode::UnresolvedPath, Some("tail")),
            (WarningCode::MissingLimit, Some("jaw")),
        ]
    );
    assert!(!model.has_joint("tail"));
    assert!(model.config("tail").is_none());
}

#[test]
fn test_rest_pose_is_captured_at_load() {
    let (model, _) = humanoid_model();
    assert_eq!(model.rest_pose()["spine"], DVec3::new(12.0, -3.0, 90.0));
    assert_eq!(model.rest_pose()["neck"], DVec3::new(0.0, 0.0, 7.0));
    assert_eq!(model.rest_pose()["head"], DVec3::ZERO);
    assert!(model.pose().values().all(AxisAngles::is_empty));
    assert_eq!(model.pose().len(), 5);
}

#[test]
fn test_wholly_malformed_source_fails() {
    for source in ["not json", r#"{ "bones": [] }"#, r#"{ "joints": {} }"#, "[]"] {
        let result = JointPoseModel::load(source, humanoid_rig());
        assert!(
            matches!(result, Err(LoadError::Parse(_)) | Err(LoadError::Malformed(_))),
            "source should fail: {}",
            source
        );
    }
}

// ============================================================================
// SetAxis / SetJoint
// ============================================================================

#[test]
fn test_neck_normalize_then_clamp() {
    let (mut model, _) = humanoid_model();
    assert_eq!(model.set_axis("neck", Axis::X, 200.0), Ok(Some(-45.0)));
    assert_eq!(model.pose()["neck"].x, Some(-45.0));
    assert_eq!(
        model.current_rotation("neck"),
        Some(DVec3::new(-45.0, 0.0, 7.0))
    );
}

#[test]
fn test_unknown_joint_changes_nothing() {
    let (mut model, _) = humanoid_model();
    let before_pose = model.pose().clone();
    let before_rig: Vec<_> = model
        .rig()
        .node_ids()
        .map(|id| model.rig().local_euler(id))
        .collect();

    assert_eq!(
        model.set_axis("arm", Axis::Z, 10.0),
        Err(PoseError::UnknownJoint("arm".into()))
    );
    assert!(model.set_joint("arm", Some(1.0), None, None).is_err());
    assert!(model.reset_joint("arm").is_err());

    assert_eq!(model.pose(), &before_pose);
    let after_rig: Vec<_> = model
        .rig()
        .node_ids()
        .map(|id| model.rig().local_euler(id))
        .collect();
    assert_eq!(after_rig, before_rig);
}

#[test]
fn test_non_controllable_axis_is_silent_no_op() {
    let (mut model, _) = humanoid_model();
    assert_eq!(model.set_axis("neck", Axis::Z, 30.0), Ok(None));
    assert_eq!(model.set_axis("hips", Axis::X, 30.0), Ok(None));
    assert_eq!(model.current_rotation("neck").unwrap().z, 7.0);
    assert!(model.pose()["neck"].is_empty());
}

#[test]
fn test_set_joint_touches_only_named_axes() {
    let (mut model, _) = humanoid_model();
    let applied = model
        .set_joint("spine", Some(370.0), None, Some(-400.0))
        .unwrap();
    assert_eq!(applied.x, Some(10.0));
    assert_eq!(applied.y, None);
    assert_eq!(applied.z, Some(-20.0));
    assert_eq!(
        model.current_rotation("spine"),
        Some(DVec3::new(10.0, -3.0, -20.0))
    );

    // Other joints are untouched, including children of the edited node.
    assert_eq!(model.current_rotation("neck"), Some(DVec3::new(0.0, 0.0, 7.0)));
    assert!(model.pose()["neck"].is_empty());
}

#[test]
fn test_text_input_flows_into_model() {
    let (mut model, _) = humanoid_model();
    let config = model.config("shoulder_l").unwrap().clone();

    let errors = read_joint_input(&config, Some("abc"), Some("5"), Some("60")).unwrap_err();
    let kinds: Vec<_> = errors.0.iter().map(|e| (e.axis, e.kind.clone())).collect();
    assert_eq!(
        kinds,
        vec![
            (Axis::X, InputErrorKind::InvalidNumber),
            (
                Axis::Z,
                InputErrorKind::OutOfRange {
                    value: 60.0,
                    min: -120.0,
                    max: 45.0
                }
            ),
        ]
    );
    assert_eq!(
        errors.to_string(),
        "X must be a number; Z value 60 is out of range (-120 ~ 45)"
    );

    let angles = read_joint_input(&config, Some("４５．５°"), None, Some(" －１２０ ")).unwrap();
    model.apply("shoulder_l", angles).unwrap();
    assert_eq!(
        model.current_rotation("shoulder_l"),
        Some(DVec3::new(45.5, 0.0, -120.0))
    );
}

// ============================================================================
// Resets
// ============================================================================

#[test]
fn test_reset_joint_is_explicit_zero() {
    let (mut model, _) = humanoid_model();
    model.set_axis("spine", Axis::X, 20.0).unwrap();
    model.reset_joint("spine").unwrap();

    assert_eq!(model.current_rotation("spine"), Some(DVec3::ZERO));
    assert!(model.pose()["spine"].is_empty());
}

#[test]
fn test_reset_all_restores_rest_pose_idempotently() {
    let (mut model, _) = humanoid_model();
    model.set_joint("spine", Some(25.0), Some(100.0), Some(0.0)).unwrap();
    model.set_axis("neck", Axis::Y, -50.0).unwrap();
    model.reset_joint("shoulder_l").unwrap();

    model.reset_all();
    let once: Vec<_> = model
        .all_names()
        .iter()
        .map(|name| model.current_rotation(name).unwrap())
        .collect();
    let pose_once = model.pose().clone();

    model.reset_all();
    let twice: Vec<_> = model
        .all_names()
        .iter()
        .map(|name| model.current_rotation(name).unwrap())
        .collect();

    assert_eq!(once, twice);
    assert_eq!(model.pose(), &pose_once);
    assert!(model.pose().values().all(AxisAngles::is_empty));
    for name in model.all_names() {
        assert_eq!(model.current_rotation(name).unwrap(), model.rest_pose()[name]);
    }
    // The spine's rest z lies outside its limit and is restored verbatim.
    assert_eq!(model.current_rotation("spine").unwrap().z, 90.0);
}

#[test]
fn test_rig_nodes_outside_catalog_untouched() {
    let (mut model, _) = humanoid_model();
    model.set_axis("neck", Axis::X, 10.0).unwrap();
    model.reset_all();

    let rig: SceneRig = model.into_rig();
    let armature = rig.find("Armature").unwrap();
    assert_eq!(rig.local_euler(armature), DVec3::ZERO);
    assert_eq!(
        rig.path_of(rig.find("Armature/Hips/Spine/Neck").unwrap()).as_deref(),
        Some("Armature/Hips/Spine/Neck")
    );
}
