//! Test fixtures: a small humanoid rig, its joint catalog, and temp-file helpers.

use rigpose_core::{CatalogWarning, JointPoseModel, SceneRig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rig description with a non-zero rest pose on the spine, neck and shoulder.
pub const HUMANOID_RIG: &str = r#"{
    "name": "Root",
    "children": [
        { "name": "Armature", "children": [
            { "name": "Hips", "children": [
                { "name": "Spine", "rotation": [12, -3, 90], "children": [
                    { "name": "Neck", "rotation": [0, 0, 7], "children": [
                        { "name": "Head" }
                    ]},
                    { "name": "Shoulder_L", "rotation": [0, 0, -10] }
                ]}
            ]}
        ]}
    ]
}"#;

/// Catalog for [`HUMANOID_RIG`]: five usable joints and two broken entries
/// (`tail` does not resolve, `jaw` has no limit for an enabled axis).
pub const HUMANOID_CATALOG: &str = r#"{ "joints": [
    {
        "name": "neck", "path": "Armature/Hips/Spine/Neck",
        "x": true, "y": true,
        "limit_x": { "min": -45, "max": 45 },
        "limit_y": { "min": -60, "max": 60 }
    },
    {
        "name": "spine", "path": "Armature/Hips/Spine",
        "x": true, "y": true, "z": true,
        "limit_x": { "min": -30, "max": 30 },
        "limit_y": { "min": -180, "max": 180 },
        "limit_z": { "min": -20, "max": 20 }
    },
    {
        "name": "head", "path": "Armature/Hips/Spine/Neck/Head",
        "z": true, "limitZ": { "min": -30, "max": 30 }
    },
    {
        "name": "shoulder_l", "path": "Armature/Hips/Spine/Shoulder_L",
        "x": true, "z": true,
        "limit_x": { "min": -90, "max": 90 },
        "limit_z": { "min": -120, "max": 45 }
    },
    {
        "name": "tail", "path": "Armature/Hips/Tail",
        "x": true, "limit_x": { "min": -10, "max": 10 }
    },
    { "name": "jaw", "path": "Armature/Hips/Spine/Neck/Head", "x": true },
    { "name": "hips", "path": "Armature/Hips" }
]}"#;

/// Builds the humanoid rig.
pub fn humanoid_rig() -> SceneRig {
    SceneRig::from_json_str(HUMANOID_RIG).expect("humanoid rig fixture parses")
}

/// Loads the humanoid catalog against a fresh humanoid rig.
pub fn humanoid_model() -> (JointPoseModel<SceneRig>, Vec<CatalogWarning>) {
    JointPoseModel::load(HUMANOID_CATALOG, humanoid_rig()).expect("humanoid catalog fixture loads")
}

/// A temp directory for source files handed to the CLI loaders.
pub struct FileFixture {
    pub root: TempDir,
}

impl FileFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Writes `content` to `name` under the root.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Writes the humanoid rig as `rig.json`.
    pub fn humanoid_rig(&self) -> PathBuf {
        self.write("rig.json", HUMANOID_RIG)
    }

    /// Writes the humanoid catalog as `joints.json`.
    pub fn humanoid_catalog(&self) -> PathBuf {
        self.write("joints.json", HUMANOID_CATALOG)
    }
}

impl Default for FileFixture {
    fn default() -> Self {
        Self::new()
    }
}
