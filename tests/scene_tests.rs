//! Scene Integration Tests
//!
//! Tests for:
//! - Scene: create/remove nodes, attach/detach hierarchy
//! - Descendant and name queries
//! - Component management: camera, light, active camera

use glam::Vec3;

use mirage::scene::{Camera, Light, Node, Scene};

// ============================================================================
// Node creation & removal
// ============================================================================

#[test]
fn scene_create_node() {
    let mut scene = Scene::new();
    let handle = scene.create_node();
    assert!(scene.get_node(handle).is_some());
}

#[test]
fn scene_create_node_with_name() {
    let mut scene = Scene::new();
    let handle = scene.create_node_with_name("anchor_0");
    assert_eq!(scene.get_node(handle).unwrap().name, "anchor_0");
}

#[test]
fn scene_add_node_to_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("n"));
    assert!(scene.root_nodes.contains(&handle));
}

#[test]
fn scene_remove_node_removes_from_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("n"));

    scene.remove_node(handle);
    assert!(!scene.root_nodes.contains(&handle));
    assert!(scene.get_node(handle).is_none());
}

#[test]
fn scene_remove_node_removes_subtree() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.create_node();
    let grandchild = scene.create_node();

    scene.attach(child, parent);
    scene.attach(grandchild, child);

    scene.remove_node(parent);

    assert!(scene.get_node(parent).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
}

// ============================================================================
// Hierarchy: attach / queries
// ============================================================================

#[test]
fn scene_attach_sets_parent_child() {
    let mut scene = Scene::new();
    let parent = scene.create_node();
    let child = scene.create_node();

    scene.attach(child, parent);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert!(scene.get_node(parent).unwrap().children().contains(&child));
}

#[test]
fn scene_attach_removes_from_old_parent() {
    let mut scene = Scene::new();
    let parent1 = scene.create_node();
    let parent2 = scene.create_node();
    let child = scene.create_node();

    scene.attach(child, parent1);
    scene.attach(child, parent2);

    assert!(
        !scene.get_node(parent1).unwrap().children().contains(&child),
        "Child should be removed from old parent"
    );
    assert!(
        scene.get_node(parent2).unwrap().children().contains(&child),
        "Child should be in new parent"
    );
}

#[test]
fn scene_attach_to_self_is_noop() {
    let mut scene = Scene::new();
    let node = scene.create_node();

    scene.attach(node, node);

    assert_eq!(scene.get_node(node).unwrap().parent(), None);
}

#[test]
fn scene_is_descendant_of_transitive() {
    let mut scene = Scene::new();
    let a = scene.create_node();
    let b = scene.create_node();
    let c = scene.create_node();

    scene.attach(b, a);
    scene.attach(c, b);

    assert!(scene.is_descendant_of(c, a));
    assert!(scene.is_descendant_of(c, b));
    assert!(!scene.is_descendant_of(a, c));
    assert!(!scene.is_descendant_of(a, a), "A node is not its own descendant");
}

#[test]
fn scene_find_by_name_depth_first() {
    let mut scene = Scene::new();
    let root = scene.create_node_with_name("root");
    let child = scene.add_to_parent(Node::new("limb"), root);
    let grandchild = scene.add_to_parent(Node::new("tip"), child);

    assert_eq!(scene.find_by_name(root, "tip"), Some(grandchild));
    assert_eq!(scene.find_by_name(root, "root"), Some(root));
    assert_eq!(scene.find_by_name(child, "root"), None, "Search is scoped to the subtree");
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn scene_add_camera_sets_component() {
    let mut scene = Scene::new();
    let cam_node = scene.add_camera(Camera::new_perspective(45.0, 16.0 / 9.0, 0.01, 1000.0));
    scene.active_camera = Some(cam_node);

    assert!(scene.get_node(cam_node).unwrap().camera.is_some());
    assert!(scene.active_camera_component().is_some());
}

#[test]
fn scene_active_camera_component_none_without_active() {
    let scene = Scene::new();
    assert!(scene.active_camera_component().is_none());
}

#[test]
fn scene_add_light_creates_node() {
    let mut scene = Scene::new();
    let light_node = scene.add_light(Light::new_hemisphere(Vec3::ONE, Vec3::splat(0.7), 1.0));

    assert!(scene.get_node(light_node).unwrap().light.is_some());
    assert_eq!(scene.lights.len(), 1);
}

#[test]
fn scene_remove_node_releases_components() {
    let mut scene = Scene::new();
    let light_node = scene.add_light(Light::new_directional(Vec3::ONE, 1.0));

    scene.remove_node(light_node);
    assert_eq!(scene.lights.len(), 0);
}
