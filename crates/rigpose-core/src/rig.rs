//! Rig abstraction: the scene-graph nodes joints are bound to.
//!
//! The pose model only needs three things from a scene graph: resolve a path
//! to a node, read a node's local euler rotation, and write it back. Any
//! engine adapter can implement [`Rig`]; [`SceneRig`] is an in-memory tree
//! used by the CLI and the tests.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Opaque handle to a node in a [`Rig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A scene graph whose node rotations the pose model drives.
///
/// Rotations are local euler angles in degrees, one component per axis.
pub trait Rig {
    /// Resolves a `/`-separated path relative to the rig root.
    fn find(&self, path: &str) -> Option<NodeId>;

    /// Returns the local euler rotation of `node` in degrees.
    fn local_euler(&self, node: NodeId) -> DVec3;

    /// Overwrites the local euler rotation of `node` in degrees.
    fn set_local_euler(&mut self, node: NodeId, euler: DVec3);
}

/// Serialized form of a rig node, as found in rig description files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    /// Node name; unique among its siblings for paths to be unambiguous.
    pub name: String,
    /// Local euler rotation in degrees.
    #[serde(default)]
    pub rotation: [f64; 3],
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDef>,
}

impl NodeDef {
    /// Creates a node definition with zero rotation and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rotation: [0.0; 3],
            children: Vec::new(),
        }
    }

    /// Sets the local rotation.
    pub fn with_rotation(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Adds a child node.
    pub fn with_child(mut self, child: NodeDef) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct SceneNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rotation: DVec3,
}

/// In-memory node tree implementing [`Rig`].
#[derive(Debug, Clone)]
pub struct SceneRig {
    nodes: Vec<SceneNode>,
}

impl SceneRig {
    /// Creates a rig holding only a root node.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![SceneNode {
                name: root_name.into(),
                parent: None,
                children: Vec::new(),
                rotation: DVec3::ZERO,
            }],
        }
    }

    /// Builds a rig from a node definition tree.
    pub fn from_def(def: &NodeDef) -> Self {
        let mut rig = Self::new(def.name.clone());
        rig.nodes[0].rotation = DVec3::from_array(def.rotation);
        let root = rig.root();
        for child in &def.children {
            rig.add_def(root, child);
        }
        rig
    }

    /// Parses a rig description (a JSON [`NodeDef`] tree).
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        let def: NodeDef = serde_json::from_str(source)?;
        Ok(Self::from_def(&def))
    }

    fn add_def(&mut self, parent: NodeId, def: &NodeDef) {
        let id = self.add_child(parent, def.name.clone(), DVec3::from_array(def.rotation));
        for child in &def.children {
            self.add_def(id, child);
        }
    }

    /// Appends a child under `parent` and returns its handle.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>, rotation: DVec3) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            rotation,
        });
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a rig has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of `node`, if it belongs to this rig.
    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.name.as_str())
    }

    /// Path of `node` relative to the root (empty for the root itself).
    pub fn path_of(&self, node: NodeId) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = self.nodes.get(node.0)?;
        while let Some(parent) = current.parent {
            segments.push(current.name.as_str());
            current = &self.nodes[parent.0];
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    /// All node handles in creation (depth-first) order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

impl Rig for SceneRig {
    fn find(&self, path: &str) -> Option<NodeId> {
        if path.is_empty() {
            return None;
        }
        let mut current = self.root();
        for segment in path.split('/') {
            if segment.is_empty() {
                return None;
            }
            current = *self.nodes[current.0]
                .children
                .iter()
                .find(|child| self.nodes[child.0].name == segment)?;
        }
        Some(current)
    }

    fn local_euler(&self, node: NodeId) -> DVec3 {
        self.nodes
            .get(node.0)
            .map(|n| n.rotation)
            .unwrap_or(DVec3::ZERO)
    }

    fn set_local_euler(&mut self, node: NodeId, euler: DVec3) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.rotation = euler;
        }
    }
}
