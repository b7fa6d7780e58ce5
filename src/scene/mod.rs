//! Scene graph module.
//!
//! Manages the hierarchy the experience mutates and the render backend reads:
//! - `Node`: scene node (parent/child relations and a transform)
//! - `Transform`: position, rotation, scale with cached matrices
//! - `Scene`: node arena plus camera/light component pools
//! - `Camera`: perspective camera component
//! - `Light`: light component (hemisphere, directional)

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] in a [`Scene`].
    pub struct NodeHandle;
    /// Handle to a [`Camera`] component.
    pub struct CameraKey;
    /// Handle to a [`Light`] component.
    pub struct LightKey;
}
