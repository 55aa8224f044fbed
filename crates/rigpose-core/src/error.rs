//! Error and warning types for the pose model, catalog loading and camera configuration.

use thiserror::Error;

use crate::catalog::Axis;

/// Errors returned by [`JointPoseModel`](crate::model::JointPoseModel) edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// The joint name is not present in the catalog.
    #[error("unknown joint '{0}'")]
    UnknownJoint(String),
}

/// Fatal errors while loading a joint catalog or a rig description.
///
/// Individual bad catalog entries are never fatal; they surface as
/// [`CatalogWarning`]s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source text is not valid JSON.
    #[error("failed to parse source: {0}")]
    Parse(#[from] serde_json::Error),
    /// The source parsed but does not have the expected top-level shape.
    #[error("malformed source: {0}")]
    Malformed(String),
}

/// Warning codes for non-fatal catalog load problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// C001: Entry could not be decoded
    MalformedEntry,
    /// C002: Entry has an empty name
    EmptyName,
    /// C003: Another entry already uses this name
    DuplicateName,
    /// C004: Controllable axis has no limit
    MissingLimit,
    /// C005: Limit has a non-finite bound (skipped) or min > max (kept)
    InvalidLimit,
    /// C006: Path does not resolve to a rig node
    UnresolvedPath,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MalformedEntry => "C001",
            WarningCode::EmptyName => "C002",
            WarningCode::DuplicateName => "C003",
            WarningCode::MissingLimit => "C004",
            WarningCode::InvalidLimit => "C005",
            WarningCode::UnresolvedPath => "C006",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A problem with one catalog entry.
///
/// Most warnings mean the entry was skipped; `kept` marks the ones whose
/// joint was still loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Index of the entry in the source list.
    pub index: usize,
    /// Joint name, when the entry got far enough to have one.
    pub joint: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// The joint was loaded despite the problem.
    pub kept: bool,
}

impl CatalogWarning {
    pub(crate) fn new(
        code: WarningCode,
        index: usize,
        joint: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            index,
            joint: joint.map(str::to_string),
            message: message.into(),
            kept: false,
        }
    }

    pub(crate) fn kept(mut self) -> Self {
        self.kept = true;
        self
    }
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.joint {
            Some(ref joint) => write!(
                f,
                "{}: {} (joint '{}', entry {})",
                self.code, self.message, joint, self.index
            ),
            None => write!(f, "{}: {} (entry {})", self.code, self.message, self.index),
        }
    }
}

/// Kind of a per-axis input validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum InputErrorKind {
    /// The text is not a finite number.
    InvalidNumber,
    /// The parsed value lies outside the joint's limit for that axis.
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// A validation failure for one axis of a joint edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct InputError {
    /// Axis the failure belongs to.
    pub axis: Axis,
    /// What went wrong.
    pub kind: InputErrorKind,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            InputErrorKind::InvalidNumber => write!(f, "{} must be a number", self.axis),
            InputErrorKind::OutOfRange { value, min, max } => write!(
                f,
                "{} value {} is out of range ({} ~ {})",
                self.axis, value, min, max
            ),
        }
    }
}

/// All input failures collected from one submitted edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct InputErrors(pub Vec<InputError>);

impl InputErrors {
    /// Human-readable messages, one per failing axis.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for InputErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Invalid camera configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("camera config has no presets")]
    NoPresets,
    #[error("duplicate preset name '{0}'")]
    DuplicatePreset(String),
    #[error("hotkey '{0}' is bound to more than one preset")]
    DuplicateHotkey(char),
    #[error("invalid {field} range: min ({min}) > max ({max})")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("minimum distance must be positive, got {0}")]
    NonPositiveDistance(f64),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("preset '{0}' has non-finite parameters")]
    NonFinitePreset(String),
    #[error("initial preset '{0}' is not in the preset table")]
    UnknownInitialPreset(String),
}
