//! Orbit camera controller: pointer-driven orbiting interrupted by preset blends.

use glam::{DMat4, DQuat, DVec3};
use tracing::{debug, warn};

use super::blend::BlendState;
use super::config::CameraConfig;
use super::preset::{OrbitParams, ViewPreset};
use super::sample::{InputSample, TouchSample};
use crate::angle::clamp_degrees;
use crate::error::ConfigError;

/// Where to put the camera node this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World position of the camera.
    pub position: DVec3,
    /// World rotation; maps the camera's local -Z onto the view direction.
    pub orientation: DQuat,
    /// Point the camera looks at.
    pub focus: DVec3,
}

impl CameraTransform {
    /// Unit vector the camera looks along.
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }
}

/// Owns the orbit parameters and advances them once per frame.
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    config: CameraConfig,
    params: OrbitParams,
    blend: Option<BlendState>,
    pending_preset: Option<String>,
    target: DVec3,
}

impl OrbitCameraController {
    /// Validates `config` and places the camera at its initial preset.
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = config
            .initial()
            .map(ViewPreset::params)
            .ok_or(ConfigError::NoPresets)?;
        let target = config.target();
        Ok(Self {
            config,
            params,
            blend: None,
            pending_preset: None,
            target,
        })
    }

    /// Jumps straight to `preset`, with no blend.
    pub fn initialize(&mut self, preset: &ViewPreset) {
        self.params = preset.params();
        self.blend = None;
        self.pending_preset = None;
    }

    /// Jumps straight to the named preset. Returns false if it does not exist.
    pub fn initialize_with(&mut self, name: &str) -> bool {
        match self.config.preset(name).cloned() {
            Some(preset) => {
                self.initialize(&preset);
                true
            }
            None => {
                warn!(preset = name, "Unknown camera preset");
                false
            }
        }
    }

    /// Queues a blend to the named preset, applied at the next frame.
    ///
    /// Returns false and changes nothing if the preset does not exist.
    pub fn select_preset(&mut self, name: &str) -> bool {
        if self.config.preset(name).is_none() {
            warn!(preset = name, "Unknown camera preset");
            return false;
        }
        self.pending_preset = Some(name.to_string());
        true
    }

    /// Queues the preset bound to `key`, if any.
    pub fn select_hotkey(&mut self, key: char) -> bool {
        match self.config.preset_for_hotkey(key) {
            Some(preset) => {
                self.pending_preset = Some(preset.name.clone());
                true
            }
            None => false,
        }
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn presets(&self) -> &[ViewPreset] {
        &self.config.presets
    }

    /// The in-flight blend, if any.
    pub fn blend(&self) -> Option<&BlendState> {
        self.blend.as_ref()
    }

    pub fn is_blending(&self) -> bool {
        self.blend.is_some()
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Moves the point the camera orbits around.
    pub fn set_target(&mut self, target: DVec3) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Advances one frame and returns the camera transform.
    ///
    /// Order: preset selection starts (or retargets) a blend; manual input is
    /// applied and cancels any blend; otherwise the blend advances by `dt`.
    /// Pitch is clamped last. Non-finite input components and a non-finite
    /// or negative `dt` count as no input.
    pub fn on_frame(&mut self, input: &InputSample, dt: f64) -> CameraTransform {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let (input, dropped) = input.sanitized();
        if dropped {
            warn!("Discarding non-finite camera input");
        }

        let selections = self.pending_preset.take().into_iter().chain(input.preset.clone());
        for name in selections {
            self.start_blend(&name);
        }

        if self.apply_manual(&input) {
            if self.blend.take().is_some() {
                debug!("Manual input cancelled preset blend");
            }
        } else if let Some(blend) = self.blend.as_mut() {
            self.params = blend.advance(dt);
            if blend.is_finished() {
                self.blend = None;
                debug!(yaw = self.params.yaw, pitch = self.params.pitch, "Preset blend finished");
            }
        }

        let [min, max] = self.config.pitch_limits;
        self.params.pitch = clamp_degrees(self.params.pitch, min, max);

        self.transform()
    }

    fn start_blend(&mut self, name: &str) {
        let Some(preset) = self.config.preset(name) else {
            warn!(preset = name, "Unknown camera preset");
            return;
        };
        debug!(preset = name, "Starting preset blend");
        self.blend = Some(BlendState::new(
            self.params,
            preset.params(),
            self.config.blend_time,
        ));
    }

    /// Applies drag, scroll and touch. Returns true if any manual input was present.
    fn apply_manual(&mut self, input: &InputSample) -> bool {
        let config = &self.config;
        let [min_distance, max_distance] = config.distance_limits;
        let mut manual = false;

        if let Some(delta) = input.drag {
            self.params.yaw += delta.x * config.rotate_sensitivity;
            self.params.pitch -= delta.y * config.rotate_sensitivity;
            manual = true;
        }

        if input.scroll.abs() > config.scroll_dead_zone {
            let step = input.scroll * config.scroll_scale * config.zoom_sensitivity;
            self.params.distance = (self.params.distance - step).clamp(min_distance, max_distance);
            manual = true;
        }

        match input.touch {
            TouchSample::None => {}
            TouchSample::Drag(delta) => {
                let sensitivity = config.rotate_sensitivity * config.touch_rotate_scale;
                self.params.yaw += delta.x * sensitivity;
                self.params.pitch -= delta.y * sensitivity;
                manual = true;
            }
            TouchSample::Pinch { .. } => {
                let pinch = input.touch.pinch_delta().unwrap_or(0.0);
                self.params.distance = (self.params.distance - pinch * config.pinch_sensitivity)
                    .clamp(min_distance, max_distance);
                manual = true;
            }
        }

        manual
    }

    /// Camera transform for the current parameters, without advancing.
    pub fn transform(&self) -> CameraTransform {
        let focus = self.target + self.params.focus_offset;
        let rotation = DQuat::from_rotation_y(self.params.yaw.to_radians())
            * DQuat::from_rotation_x(self.params.pitch.to_radians());
        let direction = rotation * DVec3::NEG_Z;
        let position = focus + direction * self.params.distance;
        CameraTransform {
            position,
            orientation: look_at(position, focus),
            focus,
        }
    }
}

/// Rotation that points local -Z from `eye` at `focus`, keeping +Y up.
fn look_at(eye: DVec3, focus: DVec3) -> DQuat {
    let forward = (focus - eye).normalize_or_zero();
    if forward == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let up = if forward.cross(DVec3::Y).length_squared() < 1e-12 {
        DVec3::Z
    } else {
        DVec3::Y
    };
    DQuat::from_mat4(&DMat4::look_at_rh(eye, focus, up)).inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn flat_config() -> CameraConfig {
        CameraConfig {
            presets: vec![
                ViewPreset::new("Front", 0.0, 20.0, 5.0).with_hotkey('q'),
                ViewPreset::new("Back", 180.0, 20.0, 6.0).with_hotkey('r'),
                ViewPreset::new("Low", 0.0, -60.0, 5.0),
            ],
            ..CameraConfig::default()
        }
    }

    #[test]
    fn test_new_uses_initial_preset() {
        let camera = OrbitCameraController::new(flat_config()).unwrap();
        assert_eq!(camera.params().yaw, 0.0);
        assert_eq!(camera.params().pitch, 20.0);
        assert_eq!(camera.params().distance, 5.0);
        assert!(!camera.is_blending());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CameraConfig {
            presets: Vec::new(),
            ..CameraConfig::default()
        };
        assert_eq!(
            OrbitCameraController::new(config).unwrap_err(),
            ConfigError::NoPresets
        );
    }

    #[test]
    fn test_blend_reaches_target_exactly() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        assert!(camera.select_preset("Back"));
        for _ in 0..10 {
            camera.on_frame(&InputSample::idle(), 0.025);
        }
        assert!(!camera.is_blending());
        assert_eq!(camera.params().yaw, 180.0);
        assert_eq!(camera.params().distance, 6.0);
    }

    #[test]
    fn test_blend_midpoint() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::select("Back"), 0.0);
        assert!(camera.is_blending());
        assert_eq!(camera.params().yaw, 0.0);

        camera.on_frame(&InputSample::idle(), 0.125);
        assert!(approx(camera.params().yaw, 90.0));
        assert!(approx(camera.params().distance, 5.5));
    }

    #[test]
    fn test_manual_drag_cancels_blend() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::select("Back"), 0.0);
        camera.on_frame(&InputSample::idle(), 0.1);
        let mid_yaw = camera.params().yaw;

        camera.on_frame(&InputSample::drag(10.0, 0.0), 0.016);
        assert!(!camera.is_blending());
        assert!(approx(camera.params().yaw, mid_yaw + 2.0));

        camera.on_frame(&InputSample::idle(), 0.5);
        assert!(approx(camera.params().yaw, mid_yaw + 2.0));
    }

    #[test]
    fn test_selection_retargets_running_blend() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::select("Back"), 0.0);
        camera.on_frame(&InputSample::idle(), 0.125);
        let from_yaw = camera.params().yaw;

        camera.on_frame(&InputSample::select("Front"), 0.0);
        let blend = camera.blend().copied().unwrap();
        assert_eq!(blend.from.yaw, from_yaw);
        assert_eq!(blend.to.yaw, 0.0);
        assert_eq!(blend.elapsed, 0.0);
    }

    #[test]
    fn test_unknown_preset_is_ignored() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        assert!(!camera.select_preset("Top"));
        camera.on_frame(&InputSample::select("Top"), 0.1);
        assert!(!camera.is_blending());
        assert_eq!(camera.params().yaw, 0.0);
    }

    #[test]
    fn test_hotkey_selection() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        assert!(camera.select_hotkey('R'));
        assert!(!camera.select_hotkey('z'));
        camera.on_frame(&InputSample::idle(), 1.0);
        assert_eq!(camera.params().yaw, 180.0);
    }

    #[test]
    fn test_pitch_clamped_after_every_source() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::drag(0.0, -10_000.0), 0.016);
        assert_eq!(camera.params().pitch, 80.0);

        camera.on_frame(&InputSample::select("Low"), 0.0);
        camera.on_frame(&InputSample::idle(), 1.0);
        assert_eq!(camera.params().pitch, -30.0);

        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.initialize_with("Low");
        camera.on_frame(&InputSample::idle(), 0.016);
        assert_eq!(camera.params().pitch, -30.0);
    }

    #[test]
    fn test_scroll_and_pinch_zoom() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::scroll(50.0), 0.016);
        assert!(approx(camera.params().distance, 4.0));

        camera.on_frame(&InputSample::scroll(0.005), 0.016);
        assert!(approx(camera.params().distance, 4.0));

        camera.on_frame(&InputSample::scroll(100_000.0), 0.016);
        assert_eq!(camera.params().distance, 1.5);

        let spread = TouchSample::Pinch {
            current: [DVec2::new(0.0, 0.0), DVec2::new(100.0, 0.0)],
            previous: [DVec2::new(0.0, 0.0), DVec2::new(150.0, 0.0)],
        };
        camera.on_frame(&InputSample::touch(spread), 0.016);
        assert!(approx(camera.params().distance, 2.5));
    }

    #[test]
    fn test_touch_drag_is_scaled() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::touch(TouchSample::Drag(DVec2::new(100.0, 50.0))), 0.016);
        assert!(approx(camera.params().yaw, 2.0));
        assert!(approx(camera.params().pitch, 19.0));
    }

    #[test]
    fn test_non_finite_input_is_no_input() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::select("Back"), 0.0);
        camera.on_frame(&InputSample::drag(f64::NAN, 0.0), 0.05);
        assert!(camera.is_blending(), "NaN drag must not cancel the blend");

        let before = *camera.params();
        camera.on_frame(&InputSample::idle(), f64::NAN);
        camera.on_frame(&InputSample::idle(), -1.0);
        assert_eq!(*camera.params(), before);
    }

    #[test]
    fn test_transform_geometry() {
        let config = CameraConfig {
            presets: vec![ViewPreset::new("Level", 0.0, 0.0, 5.0).with_focus_offset([0.0, 1.0, 0.0])],
            target: [1.0, 0.0, 0.0],
            ..CameraConfig::default()
        };
        let camera = OrbitCameraController::new(config).unwrap();
        let t = camera.transform();
        assert_eq!(t.focus, DVec3::new(1.0, 1.0, 0.0));
        assert!(t.position.abs_diff_eq(DVec3::new(1.0, 1.0, -5.0), 1e-9));
        assert!(t.forward().abs_diff_eq(DVec3::Z, 1e-9));
    }

    #[test]
    fn test_transform_looks_at_focus() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.on_frame(&InputSample::drag(237.0, 40.0), 0.016);
        let t = camera.transform();
        let expected = (t.focus - t.position).normalize();
        assert!(t.forward().abs_diff_eq(expected, 1e-9));
        assert!((t.position.distance(t.focus) - camera.params().distance).abs() < 1e-9);
        // Positive pitch puts the camera above the focus.
        assert!(t.position.y > t.focus.y);
    }

    #[test]
    fn test_look_at_straight_down() {
        let rotation = look_at(DVec3::new(0.0, 5.0, 0.0), DVec3::ZERO);
        assert!((rotation * DVec3::NEG_Z).abs_diff_eq(DVec3::NEG_Y, 1e-9));
        assert!(rotation.is_finite());
    }

    #[test]
    fn test_set_target_moves_focus() {
        let mut camera = OrbitCameraController::new(flat_config()).unwrap();
        camera.set_target(DVec3::new(0.0, 2.0, 0.0));
        camera.set_target(DVec3::new(f64::NAN, 0.0, 0.0));
        assert_eq!(camera.target(), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.on_frame(&InputSample::idle(), 0.016).focus, DVec3::new(0.0, 2.0, 0.0));
    }
}
