//! Asset acquisition and model loading.
//!
//! Byte acquisition goes through the [`AssetReader`] capability (local
//! file or HTTP); decoding is delegated to the `gltf` crate. The output of
//! [`load_model`] is a node hierarchy inserted into the scene, the model's
//! animation clips, and a mixer with every clip already playing.

pub mod io;
pub mod loaders;
pub mod model;

pub use io::{AssetReader, AssetReaderVariant, FileAssetReader, HttpAssetReader};
pub use loaders::GltfLoader;
pub use model::{LoadedModel, load_model, load_model_blocking};
