//! Orbit camera: spherical placement around a target, driven by pointer and
//! touch input and by eased transitions between named view presets.

pub mod blend;
pub mod config;
pub mod controller;
pub mod preset;
pub mod sample;

pub use blend::{BlendState, MIN_BLEND_TIME};
pub use config::CameraConfig;
pub use controller::{CameraTransform, OrbitCameraController};
pub use preset::{default_presets, OrbitParams, ViewPreset};
pub use sample::{InputSample, TouchSample};
