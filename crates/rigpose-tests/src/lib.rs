//! RigPose Test Infrastructure
//!
//! Shared fixtures for the scenario and property tests of the pose model,
//! the orbit camera and the CLI loaders.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rigpose-tests
//! ```

pub mod fixtures;

pub use fixtures::{humanoid_model, humanoid_rig, FileFixture, HUMANOID_CATALOG, HUMANOID_RIG};
