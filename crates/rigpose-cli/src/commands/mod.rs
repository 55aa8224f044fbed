//! CLI command implementations

pub mod camera;
pub mod joints;
pub mod json_output;
pub mod pose;

mod reporting;
