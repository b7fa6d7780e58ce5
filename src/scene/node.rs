use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, NodeHandle};

/// A scene node: hierarchy links, a transform, and optional component keys.
///
/// Nodes form a tree through parent/child handles. Components (camera,
/// light) live in the [`crate::scene::Scene`]'s pools; a node only carries
/// the key. Animation tracks address nodes by `name`, so loaded model
/// hierarchies keep the names from their source document.
#[derive(Debug, Clone)]
pub struct Node {
    /// Name used for animation-track binding and diagnostics.
    pub name: String,

    /// Parent node handle (`None` for root nodes).
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles.
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data touched every frame).
    pub transform: Transform,

    /// Visibility flag. An anchor group toggles this with tracking state,
    /// hiding the whole subtree from the render backend.
    pub visible: bool,

    pub camera: Option<CameraKey>,
    pub light: Option<LightKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
            camera: None,
            light: None,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// World transformation matrix, updated by the scene each frame.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
