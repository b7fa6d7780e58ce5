use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::{CameraKey, LightKey, NodeHandle};

/// Scene graph container.
///
/// Pure data layer: stores the node hierarchy and the camera/light
/// component pools. Mutated only by the experience flow (model attach,
/// anchor pose sync, animation sampling) and read by the render backend,
/// so no locking is involved.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    /// Node whose camera component the render call uses.
    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            active_camera: None,
        }
    }

    /// Creates an unnamed root-level node.
    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::default())
    }

    /// Creates a named root-level node.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::new(name))
    }

    /// Adds a node to the scene at root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Inserts a node directly under `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Re-parents `child` under `parent`, keeping both sides of the
    /// hierarchy in sync. Attaching a node to itself is a no-op.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself");
            return;
        }

        // Detach from the old parent (or the root list).
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // Attach to the new parent.
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found during attach");
            self.root_nodes.push(child);
            return;
        }

        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes a node and its whole subtree, releasing any components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let children = if let Some(node) = self.nodes.get(handle) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        let parent = self.nodes.get(handle).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(node) = self.nodes.get_mut(p)
                && let Some(i) = node.children.iter().position(|&x| x == handle)
            {
                node.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(i);
        }

        if let Some(node) = self.nodes.get(handle) {
            if let Some(cam) = node.camera {
                self.cameras.remove(cam);
            }
            if let Some(light) = node.light {
                self.lights.remove(light);
            }
        }

        self.nodes.remove(handle);
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Whether `handle` sits anywhere in the subtree rooted at `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, handle: NodeHandle, ancestor: NodeHandle) -> bool {
        let mut current = self.nodes.get(handle).and_then(|n| n.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes.get(p).and_then(|n| n.parent);
        }
        false
    }

    /// Finds a node by name inside the subtree rooted at `root`
    /// (depth-first, `root` included).
    #[must_use]
    pub fn find_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(root)?;
        if node.name == name {
            return Some(root);
        }
        for &child in &node.children {
            if let Some(found) = self.find_by_name(child, name) {
                return Some(found);
            }
        }
        None
    }

    // ========================================================================
    // Component management
    // ========================================================================

    /// Creates a node carrying a camera component.
    pub fn add_camera(&mut self, camera: Camera) -> NodeHandle {
        let mut node = Node::new("Camera");
        node.camera = Some(self.cameras.insert(camera));
        self.add_node(node)
    }

    /// Creates a root-level node carrying a light component.
    pub fn add_light(&mut self, light: Light) -> NodeHandle {
        let mut node = Node::new("Light");
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Camera component of the active camera node, if any.
    #[must_use]
    pub fn active_camera_component(&self) -> Option<&Camera> {
        let key = self.nodes.get(self.active_camera?)?.camera?;
        self.cameras.get(key)
    }

    // ========================================================================
    // World-matrix propagation
    // ========================================================================

    /// Updates world matrices for the whole scene.
    ///
    /// Iterative traversal, so deep imported hierarchies cannot overflow
    /// the stack. Also refreshes the view matrix of any camera component
    /// from its node's world transform.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A)> = self
            .root_nodes
            .iter()
            .map(|&h| (h, Affine3A::IDENTITY))
            .collect();

        while let Some((handle, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };

            node.transform.update_local_matrix();
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);

            if let Some(cam_key) = node.camera
                && let Some(camera) = self.cameras.get_mut(cam_key)
            {
                camera.update_view(&world);
            }

            let node = &self.nodes[handle];
            for &child in &node.children {
                stack.push((child, world));
            }
        }
    }
}
