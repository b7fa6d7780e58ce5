use std::sync::Arc;

use glam::Vec3;

use crate::animation::{AnimationAction, AnimationClip, AnimationMixer, Binder};
use crate::assets::io::AssetReader;
use crate::assets::loaders::GltfLoader;
use crate::errors::AssetLoadError;
use crate::scene::{NodeHandle, Scene};

/// A model loaded into the scene, ready to be bound to an anchor.
pub struct LoadedModel {
    /// Root of the imported hierarchy; attach this under an anchor group.
    pub root: NodeHandle,
    /// The model's animation clips.
    pub clips: Vec<Arc<AnimationClip>>,
    /// Mixer driving one action per clip, every action already playing.
    pub mixer: AnimationMixer,
}

/// Fetches and decodes a model, applies the requested root transform, and
/// starts every bundled animation clip.
///
/// The clips begin playing from their start state as soon as this returns;
/// nothing advances them until the mixer is handed to the frame loop, so a
/// model whose anchor bind later fails never shows a flash of animation.
///
/// Any fetch or decode failure aborts the load; no partial hierarchy is
/// left behind in the scene on the error path.
pub async fn load_model<R: AssetReader>(
    reader: &R,
    uri: &str,
    scene: &mut Scene,
    scale: Vec3,
    position: Vec3,
) -> Result<LoadedModel, AssetLoadError> {
    let bytes = reader.read_bytes(uri).await?;
    let (root, clips) = GltfLoader::load_from_slice(&bytes, uri, scene)?;

    if let Some(node) = scene.get_node_mut(root) {
        node.transform.scale = scale;
        node.transform.position = position;
        node.transform.mark_dirty();
    }

    let clips: Vec<Arc<AnimationClip>> = clips.into_iter().map(Arc::new).collect();

    let mut mixer = AnimationMixer::new();
    for clip in &clips {
        let bindings = Binder::bind(scene, root, clip);

        // Start every clip unconditionally; selection by name is a caller
        // concern this flow does not have.
        let mut action = AnimationAction::new(Arc::clone(clip));
        action.bindings = bindings;
        mixer.add_action(action);
    }

    Ok(LoadedModel { root, clips, mixer })
}

/// Blocking wrapper around [`load_model`] for synchronous entry points.
pub fn load_model_blocking<R: AssetReader>(
    reader: &R,
    uri: &str,
    scene: &mut Scene,
    scale: Vec3,
    position: Vec3,
) -> Result<LoadedModel, AssetLoadError> {
    pollster::block_on(load_model(reader, uri, scene, scale, position))
}
