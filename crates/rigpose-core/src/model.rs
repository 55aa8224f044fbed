//! The joint pose model: the single writer of joint rotations.

use glam::DVec3;
use tracing::{debug, warn};

use crate::angle::{clamp_degrees, normalize_degrees};
use crate::catalog::{Axis, CatalogLoad, JointCatalog, JointConfig};
use crate::error::{CatalogWarning, LoadError, PoseError};
use crate::pose::{AxisAngles, PoseState, RestPose};
use crate::rig::Rig;

/// Owns the rig and the live pose, and applies constrained joint edits.
///
/// Every edit normalizes into (-180, 180], clamps to the joint's limit,
/// writes the rig node, and records the written value in the [`PoseState`].
#[derive(Debug, Clone)]
pub struct JointPoseModel<R: Rig> {
    catalog: JointCatalog,
    rest_pose: RestPose,
    pose: PoseState,
    rig: R,
}

impl<R: Rig> JointPoseModel<R> {
    /// Creates a model from a loaded catalog and the rig it was resolved against.
    pub fn new(catalog: JointCatalog, rest_pose: RestPose, rig: R) -> Self {
        let pose = catalog
            .iter()
            .map(|joint| (joint.name.clone(), AxisAngles::new()))
            .collect();
        Self {
            catalog,
            rest_pose,
            pose,
            rig,
        }
    }

    /// Loads a JSON catalog against `rig` and takes ownership of the rig.
    pub fn load(source: &str, rig: R) -> Result<(Self, Vec<CatalogWarning>), LoadError> {
        let CatalogLoad {
            catalog,
            rest_pose,
            warnings,
        } = JointCatalog::load(source, &rig)?;
        Ok((Self::new(catalog, rest_pose, rig), warnings))
    }

    /// True when `name` is in the catalog.
    pub fn has_joint(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Configuration of `name`.
    pub fn config(&self, name: &str) -> Option<&JointConfig> {
        self.catalog.lookup(name)
    }

    /// All joint names, sorted ascending.
    pub fn all_names(&self) -> Vec<&str> {
        self.catalog.all_names()
    }

    pub fn catalog(&self) -> &JointCatalog {
        &self.catalog
    }

    pub fn rest_pose(&self) -> &RestPose {
        &self.rest_pose
    }

    pub fn pose(&self) -> &PoseState {
        &self.pose
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    /// Releases the rig.
    pub fn into_rig(self) -> R {
        self.rig
    }

    /// Current local euler rotation of the joint's rig node, in degrees.
    pub fn current_rotation(&self, name: &str) -> Option<DVec3> {
        self.catalog
            .lookup(name)
            .map(|joint| self.rig.local_euler(joint.handle))
    }

    /// Sets one axis of a joint.
    ///
    /// Non-controllable axes and non-finite values are a successful no-op.
    /// Returns the angle written, if any.
    pub fn set_axis(&mut self, name: &str, axis: Axis, degrees: f64) -> Result<Option<f64>, PoseError> {
        let joint = self
            .catalog
            .lookup(name)
            .ok_or_else(|| PoseError::UnknownJoint(name.to_string()))?;
        let Some(limit) = joint.limit(axis) else {
            return Ok(None);
        };
        if !degrees.is_finite() {
            warn!(joint = name, axis = %axis, "Ignoring non-finite angle");
            return Ok(None);
        }

        let angle = clamp_degrees(normalize_degrees(degrees), limit.min, limit.max);
        let handle = joint.handle;
        let euler = self.rig.local_euler(handle);
        self.rig
            .set_local_euler(handle, axis.with_component(euler, angle));
        self.pose
            .entry(name.to_string())
            .or_default()
            .set(axis, Some(angle));
        Ok(Some(angle))
    }

    /// Applies up to three axes in one call.
    ///
    /// Each present axis is validated and clamped independently; absent axes
    /// keep their current rig value.
    pub fn set_joint(
        &mut self,
        name: &str,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> Result<AxisAngles, PoseError> {
        if !self.has_joint(name) {
            return Err(PoseError::UnknownJoint(name.to_string()));
        }
        let mut applied = AxisAngles::new();
        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if let Some(degrees) = value {
                applied.set(axis, self.set_axis(name, axis, degrees)?);
            }
        }
        Ok(applied)
    }

    /// Applies an [`AxisAngles`] edit, e.g. the output of input validation.
    pub fn apply(&mut self, name: &str, angles: AxisAngles) -> Result<AxisAngles, PoseError> {
        self.set_joint(name, angles.x, angles.y, angles.z)
    }

    /// Zeroes the joint's local rotation and clears its pose entry.
    ///
    /// This is an explicit zero, not the rest pose.
    pub fn reset_joint(&mut self, name: &str) -> Result<(), PoseError> {
        let joint = self
            .catalog
            .lookup(name)
            .ok_or_else(|| PoseError::UnknownJoint(name.to_string()))?;
        self.rig.set_local_euler(joint.handle, DVec3::ZERO);
        self.pose.insert(name.to_string(), AxisAngles::new());
        debug!(joint = name, "Reset joint to zero");
        Ok(())
    }

    /// Restores every joint to its captured rest pose and clears the pose state.
    pub fn reset_all(&mut self) {
        for joint in self.catalog.iter() {
            let rest = self
                .rest_pose
                .get(&joint.name)
                .copied()
                .unwrap_or(DVec3::ZERO);
            self.rig.set_local_euler(joint.handle, rest);
            self.pose.insert(joint.name.clone(), AxisAngles::new());
        }
        debug!(joints = self.catalog.len(), "Reset all joints to rest pose");
    }
}
