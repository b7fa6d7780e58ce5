use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::{NodeHandle, Scene};

pub struct Binder;

impl Binder {
    /// Resolves a clip's tracks to node handles inside the subtree rooted
    /// at `root_node`. Tracks whose node name does not resolve are skipped;
    /// the clip still plays with the bindings that did resolve.
    #[must_use]
    pub fn bind(scene: &Scene, root_node: NodeHandle, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut bindings = Vec::with_capacity(clip.tracks.len());

        for (track_idx, track) in clip.tracks.iter().enumerate() {
            let node_name = &track.meta.node_name;

            if let Some(node_handle) = scene.find_by_name(root_node, node_name) {
                bindings.push(PropertyBinding {
                    track_index: track_idx,
                    node_handle,
                    target: track.meta.target,
                });
            } else {
                log::debug!("Animation track targets unknown node '{node_name}', skipping");
            }
        }

        bindings
    }
}
