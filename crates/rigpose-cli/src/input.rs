//! Loading of catalog, rig and camera sources from disk.
//!
//! Sources are dispatched by file extension. JSON and YAML both decode into
//! the same JSON value model before they reach the core library, so a YAML
//! catalog behaves exactly like its JSON equivalent.

use rigpose_core::{
    CameraConfig, CatalogLoad, CatalogWarning, JointCatalog, JointPoseModel, NodeDef, SceneRig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Identifies the format of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Json,
    Yaml,
}

impl SourceKind {
    /// Determines the kind from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some(ext) if JSON_EXTENSIONS.contains(&ext) => Ok(SourceKind::Json),
            Some(ext) if YAML_EXTENSIONS.contains(&ext) => Ok(SourceKind::Yaml),
            _ => Err(InputError::UnknownExtension { extension }),
        }
    }

    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while loading a source file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// YAML parsing failed.
    YamlParse { message: String },

    /// The catalog parsed but is not a catalog.
    InvalidCatalog { message: String },

    /// The rig description is not a node tree.
    InvalidRig { message: String },

    /// The camera configuration is unreadable or fails validation.
    InvalidCameraConfig { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unknown file extension '.{}' (expected .json, .yaml or .yml)",
                    ext
                ),
                None => write!(f, "file has no extension (expected .json, .yaml or .yml)"),
            },
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::YamlParse { message } => write!(f, "YAML parse error: {}", message),
            InputError::InvalidCatalog { message } => {
                write!(f, "invalid joint catalog: {}", message)
            }
            InputError::InvalidRig { message } => write!(f, "invalid rig description: {}", message),
            InputError::InvalidCameraConfig { message } => {
                write!(f, "invalid camera configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A loaded pose model and what the catalog load reported.
#[derive(Debug)]
pub struct ModelLoad {
    pub model: JointPoseModel<SceneRig>,
    /// Format of the catalog file.
    pub source_kind: SourceKind,
    /// Catalog load warnings.
    pub warnings: Vec<CatalogWarning>,
}

/// Reads a JSON or YAML file into a JSON value.
pub fn read_source(path: &Path) -> Result<(serde_json::Value, SourceKind), InputError> {
    let kind = SourceKind::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value = match kind {
        SourceKind::Json => {
            serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
                message: e.to_string(),
            })?
        }
        SourceKind::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| InputError::YamlParse {
                message: e.to_string(),
            })?
        }
    };
    Ok((value, kind))
}

/// Loads a rig description file.
pub fn load_rig(path: &Path) -> Result<SceneRig, InputError> {
    let (value, _) = read_source(path)?;
    let def: NodeDef = serde_json::from_value(value).map_err(|e| InputError::InvalidRig {
        message: e.to_string(),
    })?;
    Ok(SceneRig::from_def(&def))
}

/// Loads a rig and a joint catalog resolved against it.
pub fn load_model(catalog_path: &Path, rig_path: &Path) -> Result<ModelLoad, InputError> {
    let rig = load_rig(rig_path)?;
    let (value, source_kind) = read_source(catalog_path)?;
    let CatalogLoad {
        catalog,
        rest_pose,
        warnings,
    } = JointCatalog::from_value(value, &rig).map_err(|e| InputError::InvalidCatalog {
        message: e.to_string(),
    })?;
    Ok(ModelLoad {
        model: JointPoseModel::new(catalog, rest_pose, rig),
        source_kind,
        warnings,
    })
}

/// Loads and validates a camera configuration; the defaults when `path` is `None`.
pub fn load_camera_config(path: Option<&Path>) -> Result<CameraConfig, InputError> {
    let config = match path {
        Some(path) => {
            let (value, _) = read_source(path)?;
            serde_json::from_value(value).map_err(|e| InputError::InvalidCameraConfig {
                message: e.to_string(),
            })?
        }
        None => CameraConfig::default(),
    };
    config
        .validate()
        .map_err(|e| InputError::InvalidCameraConfig {
            message: e.to_string(),
        })?;
    Ok(config)
}
