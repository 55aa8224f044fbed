//! Named camera framings and the orbit parameters they describe.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::angle::lerp;

/// Camera placement on a sphere around a focus point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Horizontal angle in degrees.
    pub yaw: f64,
    /// Vertical angle in degrees.
    pub pitch: f64,
    /// Distance from the focus point.
    pub distance: f64,
    /// Offset added to the target position to get the focus point.
    pub focus_offset: DVec3,
}

impl OrbitParams {
    /// Componentwise linear interpolation. Yaw is interpolated directly in
    /// degrees, so deltas above 180 take the long way round.
    pub fn lerp(&self, to: &OrbitParams, t: f64) -> OrbitParams {
        OrbitParams {
            yaw: lerp(self.yaw, to.yaw, t),
            pitch: lerp(self.pitch, to.pitch, t),
            distance: lerp(self.distance, to.distance, t),
            focus_offset: self.focus_offset.lerp(to.focus_offset, t),
        }
    }
}

/// A named, fixed framing the operator can jump to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub name: String,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default = "default_pitch")]
    pub pitch: f64,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default)]
    pub focus_offset: [f64; 3],
    /// Optional single-key shortcut for input adapters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<char>,
}

fn default_pitch() -> f64 {
    20.0
}

fn default_distance() -> f64 {
    5.0
}

impl ViewPreset {
    /// Creates a preset with no focus offset and no hotkey.
    pub fn new(name: impl Into<String>, yaw: f64, pitch: f64, distance: f64) -> Self {
        Self {
            name: name.into(),
            yaw,
            pitch,
            distance,
            focus_offset: [0.0; 3],
            hotkey: None,
        }
    }

    /// Sets the focus offset.
    pub fn with_focus_offset(mut self, offset: [f64; 3]) -> Self {
        self.focus_offset = offset;
        self
    }

    /// Sets the hotkey.
    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    /// Orbit parameters of this preset.
    pub fn params(&self) -> OrbitParams {
        OrbitParams {
            yaw: self.yaw,
            pitch: self.pitch,
            distance: self.distance,
            focus_offset: DVec3::from_array(self.focus_offset),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.distance.is_finite()
            && self.focus_offset.iter().all(|v| v.is_finite())
    }
}

/// The four reference framings: front, left, right and back, bound to q/w/e/r.
pub fn default_presets() -> Vec<ViewPreset> {
    let chest = [0.0, 0.6, 0.0];
    vec![
        ViewPreset::new("Front", 0.0, 20.0, 5.0)
            .with_focus_offset(chest)
            .with_hotkey('q'),
        ViewPreset::new("Left", -90.0, 20.0, 5.5)
            .with_focus_offset(chest)
            .with_hotkey('w'),
        ViewPreset::new("Right", 90.0, 20.0, 5.5)
            .with_focus_offset(chest)
            .with_hotkey('e'),
        ViewPreset::new("Back", 180.0, 20.0, 6.0)
            .with_focus_offset(chest)
            .with_hotkey('r'),
    ]
}
