//! RigPose Core Library
//!
//! This crate holds the two stateful pieces of a rig posing tool: the joint
//! pose model and the orbit camera controller.
//!
//! # Overview
//!
//! - **Joint pose model**: a catalog of named joints bound to rig nodes, each
//!   with per-axis rotation limits. Edits are normalized into (-180, 180],
//!   clamped to the joint's limit and written to the rig.
//! - **Orbit camera**: yaw, pitch and distance around a focus point, moved by
//!   drag, scroll and touch, and by eased blends between view presets.
//!
//! # Example
//!
//! ```
//! use rigpose_core::{Axis, JointPoseModel, NodeDef, SceneRig};
//!
//! let rig = SceneRig::from_def(
//!     &NodeDef::new("Root").with_child(NodeDef::new("Neck").with_rotation([0.0, 0.0, 7.0])),
//! );
//! let catalog = r#"{ "joints": [
//!     { "name": "neck", "path": "Neck", "x": true, "limit_x": { "min": -45, "max": 45 } }
//! ]}"#;
//!
//! let (mut model, warnings) = JointPoseModel::load(catalog, rig).unwrap();
//! assert!(warnings.is_empty());
//!
//! // 350 normalizes to -10, which is inside the limit.
//! assert_eq!(model.set_axis("neck", Axis::X, 350.0).unwrap(), Some(-10.0));
//!
//! model.reset_all();
//! assert_eq!(model.current_rotation("neck").unwrap().z, 7.0);
//! ```
//!
//! # Modules
//!
//! - [`angle`]: Degree normalization, clamping and easing
//! - [`rig`]: The [`Rig`] trait and the in-memory [`SceneRig`]
//! - [`catalog`]: Joint configuration and catalog loading
//! - [`pose`]: Per-joint pose records
//! - [`model`]: The joint pose model
//! - [`input`]: Validation of typed numeric input
//! - [`camera`]: The orbit camera controller
//! - [`error`]: Error and warning types

pub mod angle;
pub mod camera;
pub mod catalog;
pub mod error;
pub mod input;
pub mod model;
pub mod pose;
pub mod rig;

// Re-export commonly used types at the crate root
pub use angle::{clamp_degrees, normalize_degrees};
pub use camera::{
    CameraConfig, CameraTransform, InputSample, OrbitCameraController, OrbitParams, TouchSample,
    ViewPreset,
};
pub use catalog::{Axis, CatalogLoad, JointCatalog, JointConfig, JointEntry, JointLimit};
pub use error::{
    CatalogWarning, ConfigError, InputError, InputErrorKind, InputErrors, LoadError, PoseError,
    WarningCode,
};
pub use input::{normalize_number_text, parse_degrees, read_joint_input};
pub use model::JointPoseModel;
pub use pose::{AxisAngles, PoseState, RestPose};
pub use rig::{NodeDef, NodeId, Rig, SceneRig};
