//! RigPose CLI - Command-line interface for posing joint rigs
//!
//! This binary lists joint catalogs, applies constrained pose edits to a rig,
//! and simulates the orbit camera.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use rigpose_cli::commands;

/// RigPose - Constrained joint posing and orbit camera tools
#[derive(Parser)]
#[command(name = "rigpose")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the joints a catalog resolves against a rig
    Joints {
        /// Path to the joint catalog (JSON or YAML)
        #[arg(short, long)]
        catalog: String,

        /// Path to the rig description (JSON or YAML)
        #[arg(short, long)]
        rig: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Apply pose edits to a rig and print the resulting pose
    Pose {
        /// Path to the joint catalog (JSON or YAML)
        #[arg(short, long)]
        catalog: String,

        /// Path to the rig description (JSON or YAML)
        #[arg(short, long)]
        rig: String,

        /// Axis edit as NAME:AXIS=VALUE[,AXIS=VALUE] (repeatable)
        #[arg(long = "set", value_name = "EDIT")]
        set: Vec<String>,

        /// Zero a joint's rotation (repeatable)
        #[arg(long = "reset-joint", value_name = "NAME")]
        reset_joint: Vec<String>,

        /// Restore every joint to its rest pose before other edits
        #[arg(long)]
        reset_all: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Simulate the orbit camera for a number of frames
    Camera {
        /// Path to a camera configuration (JSON or YAML); defaults if omitted
        #[arg(long)]
        config: Option<String>,

        /// Select a preset as [FRAME:]NAME; without a frame it is queued before the first frame
        #[arg(long = "select", value_name = "PRESET")]
        select: Vec<String>,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 10)]
        frames: usize,

        /// Seconds per frame
        #[arg(long, default_value_t = 0.025)]
        dt: f64,

        /// Pointer drag on a frame as FRAME:DX,DY (repeatable)
        #[arg(long = "drag-at", value_name = "DRAG", allow_hyphen_values = true)]
        drag_at: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Joints { catalog, rig, json } => commands::joints::run(&catalog, &rig, json),
        Commands::Pose {
            catalog,
            rig,
            set,
            reset_joint,
            reset_all,
            json,
        } => commands::pose::run(&catalog, &rig, &set, &reset_joint, reset_all, json),
        Commands::Camera {
            config,
            select,
            frames,
            dt,
            drag_at,
            json,
        } => commands::camera::run(config.as_deref(), &select, &drag_at, frames, dt, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
