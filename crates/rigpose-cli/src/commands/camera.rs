//! Camera command implementation
//!
//! Runs the orbit camera controller for a fixed number of frames with
//! scripted preset selections and drags, and prints each frame.

use anyhow::{Context, Result};
use colored::Colorize;
use glam::DVec2;
use rigpose_core::{InputSample, OrbitCameraController};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, input_error_to_json, CameraOutput, FrameInfo, JsonError};
use super::reporting::{self, format_vec3};
use crate::input::load_camera_config;

/// Scripted input for a camera simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraScript {
    /// Presets to select; `None` queues before the first frame.
    pub selects: Vec<(Option<usize>, String)>,
    /// Pointer drags delivered on a given frame.
    pub drags: Vec<(usize, DVec2)>,
}

impl CameraScript {
    /// Parses `--select [FRAME:]NAME` and `--drag-at FRAME:DX,DY` arguments.
    pub fn parse(selects: &[String], drags: &[String]) -> Result<Self, String> {
        let selects = selects.iter().map(|s| parse_select(s)).collect();
        let drags = drags
            .iter()
            .map(|s| parse_drag(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { selects, drags })
    }

    /// Input sample for `frame`: the last preset selected on it and the sum
    /// of its drags.
    pub fn sample(&self, frame: usize) -> InputSample {
        let preset = self
            .selects
            .iter()
            .filter(|(at, _)| *at == Some(frame))
            .map(|(_, name)| name.clone())
            .last();
        let drag = self
            .drags
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, delta)| *delta)
            .reduce(|a, b| a + b);
        InputSample {
            preset,
            drag,
            ..InputSample::default()
        }
    }

    /// Preset names the script refers to.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.selects.iter().map(|(_, name)| name.as_str())
    }
}

fn parse_select(arg: &str) -> (Option<usize>, String) {
    match arg.split_once(':') {
        Some((frame, name)) => match frame.trim().parse::<usize>() {
            Ok(frame) => (Some(frame), name.to_string()),
            Err(_) => (None, arg.to_string()),
        },
        None => (None, arg.to_string()),
    }
}

fn parse_drag(arg: &str) -> Result<(usize, DVec2), String> {
    let invalid = || format!("'{}' is not FRAME:DX,DY", arg);
    let (frame, delta) = arg.split_once(':').ok_or_else(invalid)?;
    let (dx, dy) = delta.split_once(',').ok_or_else(invalid)?;
    let frame = frame.trim().parse::<usize>().map_err(|_| invalid())?;
    let dx = dx.trim().parse::<f64>().map_err(|_| invalid())?;
    let dy = dy.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((frame, DVec2::new(dx, dy)))
}

/// Runs `frames` frames of `dt` seconds and records the state after each.
///
/// Unknown preset names are reported as errors and nothing is simulated.
pub fn simulate(
    controller: &mut OrbitCameraController,
    script: &CameraScript,
    frames: usize,
    dt: f64,
) -> Result<Vec<FrameInfo>, Vec<JsonError>> {
    let unknown: Vec<JsonError> = script
        .preset_names()
        .filter(|name| controller.config().preset(name).is_none())
        .map(|name| {
            JsonError::new(
                error_codes::UNKNOWN_PRESET,
                format!("unknown camera preset '{}'", name),
            )
        })
        .collect();
    if !unknown.is_empty() {
        return Err(unknown);
    }

    for (_, name) in script.selects.iter().filter(|(at, _)| at.is_none()) {
        controller.select_preset(name);
    }

    let mut infos = Vec::with_capacity(frames);
    for frame in 0..frames {
        let transform = controller.on_frame(&script.sample(frame), dt);
        infos.push(FrameInfo::new(
            frame,
            (frame + 1) as f64 * dt,
            controller.params(),
            controller.is_blending(),
            &transform,
        ));
    }
    Ok(infos)
}

fn check_dt(dt: f64) -> Result<(), JsonError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(JsonError::new(
            error_codes::INVALID_ARGUMENT,
            format!("--dt must be a non-negative number, got {}", dt),
        ))
    }
}

/// Run the camera command
///
/// # Arguments
/// * `config_path` - Optional camera configuration (JSON or YAML)
/// * `selects` - Raw `--select` arguments
/// * `drags` - Raw `--drag-at` arguments
/// * `frames` - Number of frames to simulate
/// * `dt` - Seconds per frame
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on invalid configuration or arguments
pub fn run(
    config_path: Option<&str>,
    selects: &[String],
    drags: &[String],
    frames: usize,
    dt: f64,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, selects, drags, frames, dt)
    } else {
        run_human(config_path, selects, drags, frames, dt)
    }
}

fn run_human(
    config_path: Option<&str>,
    selects: &[String],
    drags: &[String],
    frames: usize,
    dt: f64,
) -> Result<ExitCode> {
    check_dt(dt).map_err(|e| anyhow::anyhow!(e.message))?;
    let script = CameraScript::parse(selects, drags)
        .map_err(|e| anyhow::anyhow!("invalid --drag-at argument: {}", e))?;

    let config = load_camera_config(config_path.map(Path::new)).with_context(|| {
        format!(
            "Failed to load camera config: {}",
            config_path.unwrap_or("<defaults>")
        )
    })?;
    let mut controller = OrbitCameraController::new(config)?;

    println!(
        "{} {} frame(s) at {}s",
        "Simulating:".cyan().bold(),
        frames,
        dt
    );
    let presets: Vec<String> = controller
        .presets()
        .iter()
        .map(|p| match p.hotkey {
            Some(key) => format!("{} [{}]", p.name, key),
            None => p.name.clone(),
        })
        .collect();
    println!("{} {}", "Presets:".dimmed(), presets.join(", "));

    let infos = match simulate(&mut controller, &script, frames, dt) {
        Ok(infos) => infos,
        Err(errors) => {
            reporting::print_errors(&errors);
            println!("\n{} Unknown preset(s)", "FAILED".red().bold());
            return Ok(ExitCode::from(1));
        }
    };

    for info in &infos {
        let blending = if info.blending {
            "blending".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:>4} t={:.3}  yaw {:8.2}  pitch {:7.2}  dist {:6.2}  pos {} {}",
            info.frame,
            info.time,
            info.yaw,
            info.pitch,
            info.distance,
            format_vec3(info.position),
            blending
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    config_path: Option<&str>,
    selects: &[String],
    drags: &[String],
    frames: usize,
    dt: f64,
) -> Result<ExitCode> {
    let output = build_json_output(config_path, selects, drags, frames, dt);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn build_json_output(
    config_path: Option<&str>,
    selects: &[String],
    drags: &[String],
    frames: usize,
    dt: f64,
) -> CameraOutput {
    if let Err(e) = check_dt(dt) {
        return CameraOutput::failure(vec![e]);
    }
    let script = match CameraScript::parse(selects, drags) {
        Ok(script) => script,
        Err(e) => {
            return CameraOutput::failure(vec![JsonError::new(
                error_codes::INVALID_ARGUMENT,
                format!("invalid --drag-at argument: {}", e),
            )])
        }
    };
    let config = match load_camera_config(config_path.map(Path::new)) {
        Ok(config) => config,
        Err(e) => return CameraOutput::failure(vec![input_error_to_json(&e)]),
    };
    let mut controller = match OrbitCameraController::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            return CameraOutput::failure(vec![JsonError::new(
                error_codes::INVALID_CAMERA_CONFIG,
                e.to_string(),
            )])
        }
    };
    match simulate(&mut controller, &script, frames, dt) {
        Ok(infos) => CameraOutput::success(infos),
        Err(errors) => CameraOutput::failure(errors),
    }
}
