use colored::Colorize;
use rigpose_core::{AxisAngles, CatalogWarning, JointPoseModel, SceneRig};

use super::json_output::{JsonError, JsonWarning};

/// Print catalog warnings, one per line.
pub(crate) fn print_catalog_warnings(warnings: &[CatalogWarning]) {
    for warning in warnings {
        println!("  {} [catalog] {}", "!".yellow(), warning);
    }
}

/// Print CLI warnings (not catalog warnings).
pub(crate) fn print_warnings(warnings: &[JsonWarning]) {
    for warning in warnings {
        println!("  {} [{}] {}", "!".yellow(), warning.code, warning.message);
    }
}

/// Print errors, one per line.
pub(crate) fn print_errors(errors: &[JsonError]) {
    for error in errors {
        println!("  {} [{}] {}", "x".red(), error.code, error.message);
    }
}

/// Print every joint's node rotation and applied angles, by name.
pub(crate) fn print_pose_table(model: &JointPoseModel<SceneRig>) {
    for name in model.all_names() {
        let rotation = model.current_rotation(name).unwrap_or_default();
        let applied = model.pose().get(name).copied().unwrap_or_default();
        println!(
            "  {} {}  {}",
            format!("{:<16}", name).bold(),
            format_vec3(rotation.to_array()),
            format_angles(&applied).dimmed()
        );
    }
}

/// `(x, y, z)` with two decimals.
pub(crate) fn format_vec3(v: [f64; 3]) -> String {
    format!("({:.2}, {:.2}, {:.2})", v[0], v[1], v[2])
}

/// Present axes as `X=.. Y=..`, or `-` when none were applied.
pub(crate) fn format_angles(angles: &AxisAngles) -> String {
    let parts: Vec<String> = angles
        .iter()
        .map(|(axis, value)| format!("{}={}", axis, value))
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}
