use base64::Engine as _;
use glam::{Quat, Vec3};

use crate::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::animation::binding::TargetPath;
use crate::errors::AssetLoadError;
use crate::scene::{Node, NodeHandle, Scene};

/// glTF model importer.
///
/// Builds the document's node hierarchy (names and TRS transforms) inside
/// a [`Scene`] under a fresh root node and extracts the document's
/// animation clips. Mesh geometry, materials, and textures are the render
/// backend's concern and are not decoded here.
pub struct GltfLoader;

impl GltfLoader {
    /// Parses `bytes` (binary `.glb` or JSON `.gltf`) and inserts the
    /// default scene's hierarchy under a new root node named after `uri`.
    ///
    /// Returns the root handle and the document's animation clips.
    pub fn load_from_slice(
        bytes: &[u8],
        uri: &str,
        scene: &mut Scene,
    ) -> Result<(NodeHandle, Vec<AnimationClip>), AssetLoadError> {
        let gltf = gltf::Gltf::from_slice_without_validation(bytes)?;
        let buffers = Self::resolve_buffers(&gltf)?;

        // Everything fallible happens before the first scene mutation, so
        // a failed load leaves no partial hierarchy behind.
        let clips = Self::load_animations(&gltf, &buffers)?;
        let default_scene = gltf
            .default_scene()
            .or_else(|| gltf.scenes().next())
            .ok_or_else(|| AssetLoadError::EmptyDocument(uri.to_string()))?;

        // Create every node shallow first, so hierarchy wiring can refer
        // to handles in document order.
        let mut node_mapping = Vec::with_capacity(gltf.nodes().count());
        for node in gltf.nodes() {
            let name = node
                .name()
                .map_or_else(|| format!("Node_{}", node.index()), str::to_string);

            let mut engine_node = Node::new(&name);
            let (translation, rotation, node_scale) = node.transform().decomposed();
            engine_node.transform.position = Vec3::from_array(translation);
            engine_node.transform.rotation = Quat::from_array(rotation);
            engine_node.transform.scale = Vec3::from_array(node_scale);

            node_mapping.push(scene.add_node(engine_node));
        }

        for node in gltf.nodes() {
            let parent_handle = node_mapping[node.index()];
            for child in node.children() {
                scene.attach(node_mapping[child.index()], parent_handle);
            }
        }

        let root_name = source_stem(uri);
        let root_handle = scene.create_node_with_name(&root_name);

        for node in default_scene.nodes() {
            scene.attach(node_mapping[node.index()], root_handle);
        }

        log::info!(
            "Loaded '{uri}': {} nodes, {} animation clip(s)",
            node_mapping.len(),
            clips.len()
        );

        Ok((root_handle, clips))
    }

    /// Resolves buffer data for the document: the GLB binary chunk and
    /// base64 data URIs. External buffer files are not fetched here;
    /// distribute models as self-contained `.glb`.
    fn resolve_buffers(gltf: &gltf::Gltf) -> Result<Vec<Vec<u8>>, AssetLoadError> {
        let mut buffers = Vec::new();

        for buffer in gltf.buffers() {
            match buffer.source() {
                gltf::buffer::Source::Bin => {
                    let blob = gltf
                        .blob
                        .as_deref()
                        .ok_or_else(|| AssetLoadError::UnresolvedBuffer("missing GLB binary chunk".to_string()))?;
                    buffers.push(blob.to_vec());
                }
                gltf::buffer::Source::Uri(uri) => {
                    if let Some(encoded) = uri.strip_prefix("data:").and_then(|rest| rest.split_once("base64,")).map(|(_, data)| data) {
                        let data = base64::engine::general_purpose::STANDARD.decode(encoded)?;
                        buffers.push(data);
                    } else {
                        return Err(AssetLoadError::UnresolvedBuffer(uri.to_string()));
                    }
                }
            }
        }

        Ok(buffers)
    }

    fn load_animations(
        gltf: &gltf::Gltf,
        buffers: &[Vec<u8>],
    ) -> Result<Vec<AnimationClip>, AssetLoadError> {
        let mut animations = Vec::new();

        for anim in gltf.animations() {
            let mut tracks = Vec::new();

            for channel in anim.channels() {
                let reader = channel.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
                let target = channel.target();
                let gltf_node = target.node();

                let node_name = gltf_node
                    .name()
                    .map_or_else(|| format!("Node_{}", gltf_node.index()), str::to_string);

                let times: Vec<f32> = reader
                    .read_inputs()
                    .ok_or_else(|| AssetLoadError::Gltf("animation sampler missing input accessor".to_string()))?
                    .collect();

                // Cubic-spline samplers carry [in-tangent, value, out-tangent]
                // triples; we keep the values and interpolate them linearly.
                let (interpolation, cubic) = match channel.sampler().interpolation() {
                    gltf::animation::Interpolation::Linear => (InterpolationMode::Linear, false),
                    gltf::animation::Interpolation::Step => (InterpolationMode::Step, false),
                    gltf::animation::Interpolation::CubicSpline => (InterpolationMode::Linear, true),
                };

                let outputs = reader
                    .read_outputs()
                    .ok_or_else(|| AssetLoadError::Gltf("animation sampler missing output accessor".to_string()))?;

                let track = match target.property() {
                    gltf::animation::Property::Translation => {
                        let gltf::animation::util::ReadOutputs::Translations(iter) = outputs else {
                            continue;
                        };
                        let values = strip_tangents(iter.map(Vec3::from_array).collect(), cubic);
                        Track {
                            meta: TrackMeta {
                                node_name,
                                target: TargetPath::Translation,
                            },
                            data: TrackData::Vector3(KeyframeTrack::new(times, values, interpolation)),
                        }
                    }
                    gltf::animation::Property::Rotation => {
                        let gltf::animation::util::ReadOutputs::Rotations(iter) = outputs else {
                            continue;
                        };
                        let values =
                            strip_tangents(iter.into_f32().map(Quat::from_array).collect(), cubic);
                        Track {
                            meta: TrackMeta {
                                node_name,
                                target: TargetPath::Rotation,
                            },
                            data: TrackData::Quaternion(KeyframeTrack::new(times, values, interpolation)),
                        }
                    }
                    gltf::animation::Property::Scale => {
                        let gltf::animation::util::ReadOutputs::Scales(iter) = outputs else {
                            continue;
                        };
                        let values = strip_tangents(iter.map(Vec3::from_array).collect(), cubic);
                        Track {
                            meta: TrackMeta {
                                node_name,
                                target: TargetPath::Scale,
                            },
                            data: TrackData::Vector3(KeyframeTrack::new(times, values, interpolation)),
                        }
                    }
                    gltf::animation::Property::MorphTargetWeights => {
                        // Morph playback is a render-backend concern.
                        continue;
                    }
                };

                tracks.push(track);
            }

            animations.push(AnimationClip::new(
                anim.name().unwrap_or("anim").to_string(),
                tracks,
            ));
        }

        Ok(animations)
    }
}

/// Keeps only the value of each cubic-spline keyframe triple.
fn strip_tangents<T: Copy>(values: Vec<T>, cubic: bool) -> Vec<T> {
    if !cubic {
        return values;
    }
    values.chunks_exact(3).map(|triple| triple[1]).collect()
}

/// File-name stem of a path or URL, for naming the imported root node.
fn source_stem(source: &str) -> String {
    let file = source.rsplit('/').next().unwrap_or(source);
    file.rsplit_once('.')
        .map_or(file, |(stem, _)| stem)
        .to_string()
}
