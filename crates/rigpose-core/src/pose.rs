//! Live pose state and the captured rest pose.

use std::collections::BTreeMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::catalog::Axis;

/// Explicitly applied angles for one joint, in degrees.
///
/// `None` on an axis means no value has been applied since load or the last
/// reset. It is distinct from an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisAngles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl AxisAngles {
    /// Creates an all-absent value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one axis.
    pub fn with(mut self, axis: Axis, degrees: f64) -> Self {
        self.set(axis, Some(degrees));
        self
    }

    /// Returns the value for `axis`.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replaces the value for `axis`.
    pub fn set(&mut self, axis: Axis, value: Option<f64>) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// True when no axis has a value.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Present values in X, Y, Z order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL
            .into_iter()
            .filter_map(move |axis| self.get(axis).map(|v| (axis, v)))
    }
}

/// Joint name to explicitly applied angles.
///
/// Holds one entry per catalog joint; only
/// [`JointPoseModel`](crate::model::JointPoseModel) mutates it.
pub type PoseState = BTreeMap<String, AxisAngles>;

/// Joint name to the local euler rotation (degrees) captured when the
/// catalog was resolved against the rig. Never mutated afterwards.
pub type RestPose = BTreeMap<String, DVec3>;
