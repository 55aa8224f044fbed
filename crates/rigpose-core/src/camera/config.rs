//! Orbit camera configuration.

use std::collections::HashSet;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::preset::{default_presets, ViewPreset};
use crate::error::{ConfigError, LoadError};

fn default_pitch_limits() -> [f64; 2] {
    [-30.0, 80.0]
}

fn default_distance_limits() -> [f64; 2] {
    [1.5, 15.0]
}

fn default_rotate_sensitivity() -> f64 {
    0.2
}

fn default_zoom_sensitivity() -> f64 {
    2.0
}

fn default_scroll_scale() -> f64 {
    0.01
}

fn default_scroll_dead_zone() -> f64 {
    0.01
}

fn default_touch_rotate_scale() -> f64 {
    0.1
}

fn default_pinch_sensitivity() -> f64 {
    0.02
}

fn default_blend_time() -> f64 {
    0.25
}

/// Configuration of an [`OrbitCameraController`](super::OrbitCameraController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    /// Pitch range [min, max] in degrees; applied after every frame.
    #[serde(default = "default_pitch_limits")]
    pub pitch_limits: [f64; 2],
    /// Distance range [min, max] for manual zoom.
    #[serde(default = "default_distance_limits")]
    pub distance_limits: [f64; 2],
    /// Degrees per pixel of pointer drag.
    #[serde(default = "default_rotate_sensitivity")]
    pub rotate_sensitivity: f64,
    /// Distance units per scaled scroll step.
    #[serde(default = "default_zoom_sensitivity")]
    pub zoom_sensitivity: f64,
    /// Scale applied to raw scroll deltas before `zoom_sensitivity`.
    #[serde(default = "default_scroll_scale")]
    pub scroll_scale: f64,
    /// Scroll magnitudes at or below this are not input.
    #[serde(default = "default_scroll_dead_zone")]
    pub scroll_dead_zone: f64,
    /// Extra factor on `rotate_sensitivity` for one-finger touch drags.
    #[serde(default = "default_touch_rotate_scale")]
    pub touch_rotate_scale: f64,
    /// Distance units per pixel of change in two-finger separation.
    #[serde(default = "default_pinch_sensitivity")]
    pub pinch_sensitivity: f64,
    /// Preset transition time in seconds.
    #[serde(default = "default_blend_time")]
    pub blend_time: f64,
    /// World position the camera orbits around.
    #[serde(default)]
    pub target: [f64; 3],
    /// Preset applied at initialization; the first preset when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_preset: Option<String>,
    /// Available framings.
    #[serde(default = "default_presets")]
    pub presets: Vec<ViewPreset>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pitch_limits: default_pitch_limits(),
            distance_limits: default_distance_limits(),
            rotate_sensitivity: default_rotate_sensitivity(),
            zoom_sensitivity: default_zoom_sensitivity(),
            scroll_scale: default_scroll_scale(),
            scroll_dead_zone: default_scroll_dead_zone(),
            touch_rotate_scale: default_touch_rotate_scale(),
            pinch_sensitivity: default_pinch_sensitivity(),
            blend_time: default_blend_time(),
            target: [0.0; 3],
            initial_preset: None,
            presets: default_presets(),
        }
    }
}

impl CameraConfig {
    /// Parses a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Target position as a vector.
    pub fn target(&self) -> DVec3 {
        DVec3::from_array(self.target)
    }

    /// The preset applied at initialization.
    pub fn initial(&self) -> Option<&ViewPreset> {
        match self.initial_preset {
            Some(ref name) => self.preset(name),
            None => self.presets.first(),
        }
    }

    /// Looks a preset up by name.
    pub fn preset(&self, name: &str) -> Option<&ViewPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Looks a preset up by hotkey, ignoring case.
    pub fn preset_for_hotkey(&self, key: char) -> Option<&ViewPreset> {
        self.presets.iter().find(|p| {
            p.hotkey
                .map(|h| h.to_lowercase().eq(key.to_lowercase()))
                .unwrap_or(false)
        })
    }

    /// Checks the configuration for values the controller cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::NoPresets);
        }

        let mut names = HashSet::new();
        let mut hotkeys = HashSet::new();
        for preset in &self.presets {
            if !names.insert(preset.name.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.name.clone()));
            }
            if let Some(key) = preset.hotkey {
                let folded: String = key.to_lowercase().collect();
                if !hotkeys.insert(folded) {
                    return Err(ConfigError::DuplicateHotkey(key));
                }
            }
            if !preset.is_finite() {
                return Err(ConfigError::NonFinitePreset(preset.name.clone()));
            }
        }

        for (field, [min, max]) in [
            ("pitch_limits", self.pitch_limits),
            ("distance_limits", self.distance_limits),
        ] {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ConfigError::InvalidRange { field, min, max });
            }
        }
        if self.distance_limits[0] <= 0.0 {
            return Err(ConfigError::NonPositiveDistance(self.distance_limits[0]));
        }

        for (field, value) in [
            ("rotate_sensitivity", self.rotate_sensitivity),
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("scroll_scale", self.scroll_scale),
            ("scroll_dead_zone", self.scroll_dead_zone),
            ("touch_rotate_scale", self.touch_rotate_scale),
            ("pinch_sensitivity", self.pinch_sensitivity),
            ("blend_time", self.blend_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if !self.target.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "target",
                value: f64::NAN,
            });
        }

        if let Some(ref name) = self.initial_preset {
            if self.preset(name).is_none() {
                return Err(ConfigError::UnknownInitialPreset(name.clone()));
            }
        }
        Ok(())
    }
}
