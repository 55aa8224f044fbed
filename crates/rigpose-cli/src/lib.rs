//! RigPose CLI library.
//!
//! This crate provides the file loading and command implementations behind
//! the `rigpose` binary: listing joint catalogs, applying pose edits, and
//! simulating the orbit camera.

pub mod commands;
pub mod input;
