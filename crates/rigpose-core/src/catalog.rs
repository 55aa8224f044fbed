//! Joint catalog: the static, load-once description of a rig's joints.
//!
//! # Source format
//!
//! ```json
//! {
//!   "joints": [
//!     {
//!       "name": "neck",
//!       "path": "Armature/Hips/Spine/Neck",
//!       "x": true, "y": true, "z": false,
//!       "limit_x": { "min": -45, "max": 45 },
//!       "limit_y": { "min": -60, "max": 60 }
//!     }
//!   ]
//! }
//! ```
//!
//! Axis flags default to `false`. `limitX`-style keys are accepted as aliases.
//! Bad entries are skipped with a [`CatalogWarning`]; only a source without a
//! `joints` list is a [`LoadError`]. A limit with `min > max` is reported but
//! its joint is kept.

use std::collections::HashMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CatalogWarning, LoadError, WarningCode};
use crate::pose::RestPose;
use crate::rig::{NodeId, Rig};

/// A rotation axis of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// X axis (pitch).
    X,
    /// Y axis (yaw).
    Y,
    /// Z axis (roll).
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the axis name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Parses an axis name, case-insensitively.
    pub fn parse(s: &str) -> Option<Axis> {
        match s.trim() {
            "x" | "X" => Some(Axis::X),
            "y" | "Y" => Some(Axis::Y),
            "z" | "Z" => Some(Axis::Z),
            _ => None,
        }
    }

    /// Component of `v` belonging to this axis.
    pub fn component(&self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Returns `v` with this axis' component replaced.
    pub fn with_component(&self, mut v: DVec3, value: f64) -> DVec3 {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        v
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed angle range for one axis, in degrees.
///
/// A pair with `min > max` is kept as given; clamping against it is a plain
/// numeric clamp, so such a limit cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimit {
    pub min: f64,
    pub max: f64,
}

impl JointLimit {
    /// Creates a new limit.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies within the limit, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// True when `min > max`, e.g. a range meant to wrap through ±180.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// A resolved joint: name, rig handle, and per-axis limits.
///
/// An axis is controllable exactly when it has a limit.
#[derive(Debug, Clone, PartialEq)]
pub struct JointConfig {
    /// Unique joint name.
    pub name: String,
    /// Path the handle was resolved from.
    pub path: String,
    /// Rig node driven by this joint.
    pub handle: NodeId,
    limits: [Option<JointLimit>; 3],
}

impl JointConfig {
    /// Creates a joint with no controllable axes.
    pub fn new(name: impl Into<String>, path: impl Into<String>, handle: NodeId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            handle,
            limits: [None; 3],
        }
    }

    /// Makes `axis` controllable within `limit`.
    pub fn with_limit(mut self, axis: Axis, limit: JointLimit) -> Self {
        self.limits[axis as usize] = Some(limit);
        self
    }

    /// Limit for `axis`, or `None` when the axis is not controllable.
    pub fn limit(&self, axis: Axis) -> Option<JointLimit> {
        self.limits[axis as usize]
    }

    /// True when `axis` can be edited.
    pub fn is_controllable(&self, axis: Axis) -> bool {
        self.limit(axis).is_some()
    }

    /// Controllable axes in X, Y, Z order.
    pub fn controllable_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL
            .into_iter()
            .filter(move |axis| self.is_controllable(*axis))
    }
}

/// One entry of the catalog source, before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub x: bool,
    #[serde(default)]
    pub y: bool,
    #[serde(default)]
    pub z: bool,
    #[serde(default, alias = "limitX", skip_serializing_if = "Option::is_none")]
    pub limit_x: Option<JointLimit>,
    #[serde(default, alias = "limitY", skip_serializing_if = "Option::is_none")]
    pub limit_y: Option<JointLimit>,
    #[serde(default, alias = "limitZ", skip_serializing_if = "Option::is_none")]
    pub limit_z: Option<JointLimit>,
}

impl JointEntry {
    fn axis(&self, axis: Axis) -> (bool, Option<JointLimit>) {
        match axis {
            Axis::X => (self.x, self.limit_x),
            Axis::Y => (self.y, self.limit_y),
            Axis::Z => (self.z, self.limit_z),
        }
    }
}

/// Result of loading a catalog: the catalog, the rest pose captured from the
/// rig, and the warnings for problem entries.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: JointCatalog,
    pub rest_pose: RestPose,
    pub warnings: Vec<CatalogWarning>,
}

/// Ordered collection of resolved joints, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct JointCatalog {
    joints: Vec<JointConfig>,
    index: HashMap<String, usize>,
}

impl JointCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON catalog source and resolves it against `rig`.
    pub fn load(source: &str, rig: &impl Rig) -> Result<CatalogLoad, LoadError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        Self::from_value(value, rig)
    }

    /// Resolves an already-parsed catalog source against `rig`.
    ///
    /// Captures each resolved joint's current local rotation as its rest pose.
    pub fn from_value(value: serde_json::Value, rig: &impl Rig) -> Result<CatalogLoad, LoadError> {
        let entries = match value {
            serde_json::Value::Object(mut map) => match map.remove("joints") {
                Some(serde_json::Value::Array(entries)) => entries,
                Some(_) => return Err(LoadError::Malformed("'joints' must be a list".into())),
                None => return Err(LoadError::Malformed("missing 'joints' list".into())),
            },
            _ => return Err(LoadError::Malformed("catalog must be an object".into())),
        };

        let mut catalog = JointCatalog::new();
        let mut rest_pose = RestPose::new();
        let mut warnings = Vec::new();

        for (index, raw) in entries.into_iter().enumerate() {
            let entry: JointEntry = match serde_json::from_value(raw) {
                Ok(entry) => entry,
                Err(e) => {
                    warnings.push(CatalogWarning::new(
                        WarningCode::MalformedEntry,
                        index,
                        None,
                        format!("entry could not be decoded: {}", e),
                    ));
                    continue;
                }
            };
            let mut notes = Vec::new();
            match catalog.resolve_entry(index, &entry, rig, &mut notes) {
                Ok(config) => {
                    for note in &notes {
                        warn!(
                            code = %note.code,
                            entry = note.index,
                            joint = ?note.joint,
                            "Keeping joint catalog entry: {}",
                            note.message
                        );
                    }
                    warnings.append(&mut notes);
                    rest_pose.insert(config.name.clone(), rig.local_euler(config.handle));
                    catalog.insert(config);
                }
                Err(warning) => warnings.push(warning),
            }
        }

        for warning in warnings.iter().filter(|w| !w.kept) {
            warn!(
                code = %warning.code,
                entry = warning.index,
                joint = ?warning.joint,
                "Skipping joint catalog entry: {}",
                warning.message
            );
        }

        Ok(CatalogLoad {
            catalog,
            rest_pose,
            warnings,
        })
    }

    fn resolve_entry(
        &self,
        index: usize,
        entry: &JointEntry,
        rig: &impl Rig,
        notes: &mut Vec<CatalogWarning>,
    ) -> Result<JointConfig, CatalogWarning> {
        let name = entry.name.as_str();
        if name.trim().is_empty() {
            return Err(CatalogWarning::new(
                WarningCode::EmptyName,
                index,
                None,
                "joint name is empty",
            ));
        }
        if self.contains(name) {
            return Err(CatalogWarning::new(
                WarningCode::DuplicateName,
                index,
                Some(name),
                "joint name is already in the catalog",
            ));
        }

        let mut limits = [None; 3];
        for axis in Axis::ALL {
            let (enabled, limit) = entry.axis(axis);
            if !enabled {
                continue;
            }
            let limit = limit.ok_or_else(|| {
                CatalogWarning::new(
                    WarningCode::MissingLimit,
                    index,
                    Some(name),
                    format!("axis {} is controllable but has no limit", axis),
                )
            })?;
            if !limit.is_finite() {
                return Err(CatalogWarning::new(
                    WarningCode::InvalidLimit,
                    index,
                    Some(name),
                    format!("axis {} limit [{}, {}] is not finite", axis, limit.min, limit.max),
                ));
            }
            if limit.is_inverted() {
                notes.push(
                    CatalogWarning::new(
                        WarningCode::InvalidLimit,
                        index,
                        Some(name),
                        format!(
                            "axis {} limit [{}, {}] has min > max and cannot be satisfied",
                            axis, limit.min, limit.max
                        ),
                    )
                    .kept(),
                );
            }
            limits[axis as usize] = Some(limit);
        }

        let handle = rig.find(&entry.path).ok_or_else(|| {
            CatalogWarning::new(
                WarningCode::UnresolvedPath,
                index,
                Some(name),
                format!("path '{}' does not resolve to a rig node", entry.path),
            )
        })?;

        Ok(JointConfig {
            name: entry.name.clone(),
            path: entry.path.clone(),
            handle,
            limits,
        })
    }

    /// Adds a joint, replacing nothing; returns false if the name is taken.
    pub fn insert(&mut self, config: JointConfig) -> bool {
        if self.index.contains_key(&config.name) {
            return false;
        }
        self.index.insert(config.name.clone(), self.joints.len());
        self.joints.push(config);
        true
    }

    /// Looks a joint up by name.
    pub fn lookup(&self, name: &str) -> Option<&JointConfig> {
        self.index.get(name).map(|&i| &self.joints[i])
    }

    /// True when `name` is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All joint names, sorted ascending.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.joints.iter().map(|j| j.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Joints in source order.
    pub fn iter(&self) -> impl Iterator<Item = &JointConfig> {
        self.joints.iter()
    }

    /// Number of joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// True when the catalog holds no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}
