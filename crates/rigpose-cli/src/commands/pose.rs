//! Pose command implementation
//!
//! Loads a catalog and rig, applies resets and typed axis edits in order,
//! and prints the resulting pose.

use anyhow::{Context, Result};
use colored::Colorize;
use rigpose_core::{read_joint_input, Axis, JointPoseModel, SceneRig};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    axis_input_error_to_json, catalog_warning_to_json, error_codes, input_error_to_json,
    warning_codes, EditResult, JointPoseInfo, JsonError, JsonWarning, PoseOutput,
};
use super::reporting;
use crate::input::{load_model, ModelLoad};

/// A parsed `--set NAME:AXIS=TEXT[,AXIS=TEXT]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetArg {
    pub joint: String,
    /// Raw field text per axis, in argument order
    pub fields: Vec<(Axis, String)>,
}

impl SetArg {
    /// Parses `NAME:AXIS=TEXT[,AXIS=TEXT]`.
    pub fn parse(arg: &str) -> Result<Self, String> {
        let (joint, rest) = arg
            .split_once(':')
            .ok_or_else(|| format!("'{}' is not NAME:AXIS=VALUE", arg))?;
        let joint = joint.trim();
        if joint.is_empty() {
            return Err(format!("'{}' has an empty joint name", arg));
        }

        let mut fields = Vec::new();
        for part in rest.split(',') {
            let (axis, text) = part
                .split_once('=')
                .ok_or_else(|| format!("'{}' is not AXIS=VALUE", part))?;
            let axis = Axis::parse(axis).ok_or_else(|| format!("unknown axis '{}'", axis.trim()))?;
            fields.push((axis, text.to_string()));
        }

        Ok(Self {
            joint: joint.to_string(),
            fields,
        })
    }
}

/// One pose edit, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    ResetAll,
    ResetJoint(String),
    Set(SetArg),
}

impl Edit {
    fn action(&self) -> &'static str {
        match self {
            Edit::ResetAll => "reset_all",
            Edit::ResetJoint(_) => "reset_joint",
            Edit::Set(_) => "set",
        }
    }

    fn joint(&self) -> Option<&str> {
        match self {
            Edit::ResetAll => None,
            Edit::ResetJoint(name) => Some(name.as_str()),
            Edit::Set(arg) => Some(arg.joint.as_str()),
        }
    }
}

/// Orders edits: reset-all, then joint resets, then sets.
pub fn plan_edits(reset_all: bool, reset_joints: &[String], sets: Vec<SetArg>) -> Vec<Edit> {
    let mut edits = Vec::new();
    if reset_all {
        edits.push(Edit::ResetAll);
    }
    edits.extend(reset_joints.iter().cloned().map(Edit::ResetJoint));
    edits.extend(sets.into_iter().map(Edit::Set));
    edits
}

/// Applies one edit to the model.
///
/// Warnings about ignored axis text are appended to `warnings`.
pub fn apply_edit(
    model: &mut JointPoseModel<SceneRig>,
    edit: &Edit,
    warnings: &mut Vec<JsonWarning>,
) -> EditResult {
    let mut result = EditResult {
        action: edit.action().to_string(),
        joint: edit.joint().map(str::to_string),
        ok: true,
        applied: None,
        errors: Vec::new(),
    };

    let outcome = match edit {
        Edit::ResetAll => {
            model.reset_all();
            Ok(None)
        }
        Edit::ResetJoint(name) => model
            .reset_joint(name)
            .map(|()| None)
            .map_err(|e| vec![unknown_joint(name, e)]),
        Edit::Set(arg) => apply_set(model, arg, warnings),
    };

    match outcome {
        Ok(applied) => result.applied = applied,
        Err(errors) => {
            result.ok = false;
            result.errors = errors;
        }
    }
    result
}

fn apply_set(
    model: &mut JointPoseModel<SceneRig>,
    arg: &SetArg,
    warnings: &mut Vec<JsonWarning>,
) -> Result<Option<rigpose_core::AxisAngles>, Vec<JsonError>> {
    let joint = arg.joint.as_str();
    let Some(config) = model.config(joint) else {
        return Err(vec![JsonError::new(
            error_codes::UNKNOWN_JOINT,
            format!("unknown joint '{}'", joint),
        )
        .with_joint(joint)]);
    };

    let mut texts: [Option<&str>; 3] = [None; 3];
    for (axis, text) in &arg.fields {
        if !config.is_controllable(*axis) {
            warnings.push(
                JsonWarning::new(
                    warning_codes::AXIS_NOT_CONTROLLABLE,
                    format!("axis {} of joint '{}' is not controllable; ignored", axis, joint),
                )
                .with_joint(joint),
            );
            continue;
        }
        texts[*axis as usize] = Some(text.as_str());
    }

    let angles = read_joint_input(config, texts[0], texts[1], texts[2]).map_err(|errors| {
        errors
            .0
            .iter()
            .map(|e| axis_input_error_to_json(joint, e))
            .collect::<Vec<_>>()
    })?;
    model
        .apply(joint, angles)
        .map(Some)
        .map_err(|e| vec![unknown_joint(joint, e)])
}

fn unknown_joint(joint: &str, err: rigpose_core::PoseError) -> JsonError {
    JsonError::new(error_codes::UNKNOWN_JOINT, err.to_string()).with_joint(joint)
}

/// Pose summary in ascending name order.
pub fn pose_infos(model: &JointPoseModel<SceneRig>) -> Vec<JointPoseInfo> {
    model
        .all_names()
        .into_iter()
        .map(|name| JointPoseInfo {
            name: name.to_string(),
            rotation: model
                .current_rotation(name)
                .map(|r| r.to_array())
                .unwrap_or_default(),
            pose: model.pose().get(name).copied().unwrap_or_default(),
        })
        .collect()
}

/// Run the pose command
///
/// # Arguments
/// * `catalog_path` - Path to the joint catalog (JSON or YAML)
/// * `rig_path` - Path to the rig description (JSON or YAML)
/// * `sets` - Raw `--set` arguments
/// * `reset_joints` - Joints to zero
/// * `reset_all` - Whether to restore the rest pose first
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every edit succeeded, 1 otherwise
pub fn run(
    catalog_path: &str,
    rig_path: &str,
    sets: &[String],
    reset_joints: &[String],
    reset_all: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(catalog_path, rig_path, sets, reset_joints, reset_all)
    } else {
        run_human(catalog_path, rig_path, sets, reset_joints, reset_all)
    }
}

fn run_human(
    catalog_path: &str,
    rig_path: &str,
    sets: &[String],
    reset_joints: &[String],
    reset_all: bool,
) -> Result<ExitCode> {
    let sets = sets
        .iter()
        .map(|s| SetArg::parse(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("invalid --set argument: {}", e))?;

    println!("{} {}", "Posing:".cyan().bold(), catalog_path);

    let ModelLoad {
        mut model,
        warnings: catalog_warnings,
        ..
    } = load_model(Path::new(catalog_path), Path::new(rig_path))
        .with_context(|| format!("Failed to load catalog: {}", catalog_path))?;
    reporting::print_catalog_warnings(&catalog_warnings);

    let mut failed = 0;
    for edit in plan_edits(reset_all, reset_joints, sets) {
        let mut warnings = Vec::new();
        let result = apply_edit(&mut model, &edit, &mut warnings);
        reporting::print_warnings(&warnings);

        let label = match result.joint {
            Some(ref joint) => format!("{} {}", result.action, joint),
            None => result.action.clone(),
        };
        if result.ok {
            let applied = result
                .applied
                .map(|a| format!(" {}", reporting::format_angles(&a)))
                .unwrap_or_default();
            println!("  {} {}{}", "✓".green(), label, applied);
        } else {
            println!("  {} {}", "x".red(), label);
            reporting::print_errors(&result.errors);
            failed += 1;
        }
    }

    println!("\n{}", "Pose".bold());
    reporting::print_pose_table(&model);

    if failed == 0 {
        println!("\n{} All edits applied", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{} {} edit(s) failed", "FAILED".red().bold(), failed);
        Ok(ExitCode::from(1))
    }
}

fn run_json(
    catalog_path: &str,
    rig_path: &str,
    sets: &[String],
    reset_joints: &[String],
    reset_all: bool,
) -> Result<ExitCode> {
    let output = build_json_output(catalog_path, rig_path, sets, reset_joints, reset_all);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn build_json_output(
    catalog_path: &str,
    rig_path: &str,
    sets: &[String],
    reset_joints: &[String],
    reset_all: bool,
) -> PoseOutput {
    let sets = match sets
        .iter()
        .map(|s| SetArg::parse(s))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(sets) => sets,
        Err(e) => {
            return PoseOutput::failure(vec![JsonError::new(
                error_codes::INVALID_ARGUMENT,
                format!("invalid --set argument: {}", e),
            )])
        }
    };

    let ModelLoad {
        mut model,
        warnings: catalog_warnings,
        ..
    } = match load_model(Path::new(catalog_path), Path::new(rig_path)) {
        Ok(load) => load,
        Err(e) => return PoseOutput::failure(vec![input_error_to_json(&e)]),
    };

    let mut warnings: Vec<JsonWarning> = catalog_warnings.iter().map(catalog_warning_to_json).collect();
    let edits: Vec<EditResult> = plan_edits(reset_all, reset_joints, sets)
        .iter()
        .map(|edit| apply_edit(&mut model, edit, &mut warnings))
        .collect();

    PoseOutput {
        success: edits.iter().all(|e| e.ok),
        errors: Vec::new(),
        warnings,
        edits,
        joints: pose_infos(&model),
    }
}
