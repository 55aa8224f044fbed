//! Joints command implementation
//!
//! Loads a catalog against a rig and lists the joints it resolved.

use anyhow::{Context, Result};
use colored::Colorize;
use rigpose_core::{JointConfig, JointPoseModel, SceneRig};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    catalog_warning_to_json, input_error_to_json, AxisLimitInfo, JointInfo, JointsOutput,
};
use super::reporting;
use crate::input::{load_model, ModelLoad};

/// Run the joints command
///
/// # Arguments
/// * `catalog_path` - Path to the joint catalog (JSON or YAML)
/// * `rig_path` - Path to the rig description (JSON or YAML)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the catalog loaded, 1 otherwise
pub fn run(catalog_path: &str, rig_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(catalog_path, rig_path)
    } else {
        run_human(catalog_path, rig_path)
    }
}

fn run_human(catalog_path: &str, rig_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Loading:".cyan().bold(), catalog_path);

    let ModelLoad {
        model,
        source_kind,
        warnings,
    } = load_model(Path::new(catalog_path), Path::new(rig_path))
        .with_context(|| format!("Failed to load catalog: {}", catalog_path))?;

    println!("{} {} / rig {}", "Source:".dimmed(), source_kind, rig_path);
    reporting::print_catalog_warnings(&warnings);

    println!("\n{} ({})", "Joints".bold(), model.catalog().len());
    for joint in sorted_joints(&model) {
        println!("  {} {}", joint.name.bold(), joint.path.dimmed());
        let axes = describe_axes(joint);
        if axes.is_empty() {
            println!("    {}", "no controllable axes".dimmed());
        } else {
            println!("    {}", axes);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(catalog_path: &str, rig_path: &str) -> Result<ExitCode> {
    let (output, code) = match load_model(Path::new(catalog_path), Path::new(rig_path)) {
        Ok(ModelLoad {
            model, warnings, ..
        }) => (
            JointsOutput::success(
                joint_infos(&model),
                warnings.iter().map(catalog_warning_to_json).collect(),
            ),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            JointsOutput::failure(vec![input_error_to_json(&e)]),
            ExitCode::from(1),
        ),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Joint listing in ascending name order.
pub fn joint_infos(model: &JointPoseModel<SceneRig>) -> Vec<JointInfo> {
    sorted_joints(model)
        .into_iter()
        .map(|joint| JointInfo {
            name: joint.name.clone(),
            path: joint.path.clone(),
            axes: joint
                .controllable_axes()
                .filter_map(|axis| {
                    joint.limit(axis).map(|limit| AxisLimitInfo {
                        axis: axis.as_str().to_string(),
                        min: limit.min,
                        max: limit.max,
                    })
                })
                .collect(),
            rest: model
                .rest_pose()
                .get(&joint.name)
                .map(|r| r.to_array())
                .unwrap_or_default(),
        })
        .collect()
}

fn describe_axes(joint: &JointConfig) -> String {
    joint
        .controllable_axes()
        .filter_map(|axis| {
            joint
                .limit(axis)
                .map(|limit| format!("{} [{}, {}]", axis, limit.min, limit.max))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn sorted_joints(model: &JointPoseModel<SceneRig>) -> Vec<&JointConfig> {
    model
        .all_names()
        .into_iter()
        .filter_map(|name| model.config(name))
        .collect()
}
