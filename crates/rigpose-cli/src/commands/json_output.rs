//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and prints exactly one of the `*Output`
//! documents below to stdout.

use rigpose_core::{AxisAngles, CameraTransform, CatalogWarning, InputError as AxisInputError};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// YAML parse error
    pub const YAML_PARSE: &str = "CLI_004";
    /// Catalog is not a catalog
    pub const INVALID_CATALOG: &str = "CLI_005";
    /// Rig description is not a node tree
    pub const INVALID_RIG: &str = "CLI_006";
    /// Camera configuration rejected
    pub const INVALID_CAMERA_CONFIG: &str = "CLI_007";
    /// Malformed command-line argument
    pub const INVALID_ARGUMENT: &str = "CLI_008";
    /// Joint name not in the catalog
    pub const UNKNOWN_JOINT: &str = "CLI_009";
    /// Axis text failed validation
    pub const INVALID_INPUT: &str = "CLI_010";
    /// Preset name not in the camera configuration
    pub const UNKNOWN_PRESET: &str = "CLI_011";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Text given for an axis the joint does not allow
    pub const AXIS_NOT_CONTROLLABLE: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Joint the error concerns (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<String>,
    /// Axis the error concerns (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            joint: None,
            axis: None,
        }
    }

    /// Sets the joint.
    pub fn with_joint(mut self, joint: impl Into<String>) -> Self {
        self.joint = Some(joint.into());
        self
    }

    /// Sets the axis.
    pub fn with_axis(mut self, axis: impl Into<String>) -> Self {
        self.axis = Some(axis.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "C004", "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Joint the warning concerns (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<String>,
    /// Index of the catalog entry (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<usize>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            joint: None,
            entry: None,
        }
    }

    /// Sets the joint.
    pub fn with_joint(mut self, joint: impl Into<String>) -> Self {
        self.joint = Some(joint.into());
        self
    }
}

/// Converts a file loading error.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::YamlParse { .. } => error_codes::YAML_PARSE,
        InputError::InvalidCatalog { .. } => error_codes::INVALID_CATALOG,
        InputError::InvalidRig { .. } => error_codes::INVALID_RIG,
        InputError::InvalidCameraConfig { .. } => error_codes::INVALID_CAMERA_CONFIG,
    };
    JsonError::new(code, err.to_string())
}

/// Converts a catalog warning.
pub fn catalog_warning_to_json(warning: &CatalogWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.code().to_string(),
        message: warning.message.clone(),
        joint: warning.joint.clone(),
        entry: Some(warning.index),
    }
}

/// Converts one rejected axis field.
pub fn axis_input_error_to_json(joint: &str, err: &AxisInputError) -> JsonError {
    JsonError::new(error_codes::INVALID_INPUT, err.to_string())
        .with_joint(joint)
        .with_axis(err.axis.as_str())
}

/// Limit of one controllable axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLimitInfo {
    pub axis: String,
    pub min: f64,
    pub max: f64,
}

/// One catalog joint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JointInfo {
    pub name: String,
    pub path: String,
    /// Controllable axes in X, Y, Z order
    pub axes: Vec<AxisLimitInfo>,
    /// Rest rotation captured at load, in degrees
    pub rest: [f64; 3],
}

/// Output of `rigpose joints --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JointsOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    pub joints: Vec<JointInfo>,
}

impl JointsOutput {
    /// Creates a successful listing.
    pub fn success(joints: Vec<JointInfo>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            joints,
        }
    }

    /// Creates a failed listing.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            joints: Vec::new(),
        }
    }
}

/// Result of one pose edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditResult {
    /// `set`, `reset_joint` or `reset_all`
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<String>,
    pub ok: bool,
    /// Angles actually written, after normalization and clamping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<AxisAngles>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Pose summary for one joint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JointPoseInfo {
    pub name: String,
    /// Current local rotation of the rig node, in degrees
    pub rotation: [f64; 3],
    /// Explicitly applied angles
    pub pose: AxisAngles,
}

/// Output of `rigpose pose --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoseOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    pub edits: Vec<EditResult>,
    pub joints: Vec<JointPoseInfo>,
}

impl PoseOutput {
    /// Creates a failed output with no edits.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            edits: Vec::new(),
            joints: Vec::new(),
        }
    }
}

/// Camera state after one simulated frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameInfo {
    pub frame: usize,
    /// Simulated seconds since the first frame
    pub time: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub blending: bool,
    pub position: [f64; 3],
    /// Rotation quaternion as [x, y, z, w]
    pub orientation: [f64; 4],
    pub focus: [f64; 3],
}

impl FrameInfo {
    /// Captures a frame from the controller state and its transform.
    pub fn new(
        frame: usize,
        time: f64,
        params: &rigpose_core::OrbitParams,
        blending: bool,
        transform: &CameraTransform,
    ) -> Self {
        Self {
            frame,
            time,
            yaw: params.yaw,
            pitch: params.pitch,
            distance: params.distance,
            blending,
            position: transform.position.to_array(),
            orientation: transform.orientation.to_array(),
            focus: transform.focus.to_array(),
        }
    }
}

/// Output of `rigpose camera --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub frames: Vec<FrameInfo>,
}

impl CameraOutput {
    /// Creates a successful simulation.
    pub fn success(frames: Vec<FrameInfo>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            frames,
        }
    }

    /// Creates a failed simulation.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            frames: Vec::new(),
        }
    }
}
