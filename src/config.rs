use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::session::SessionConfig;

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_viewport() -> ViewportConfig {
    ViewportConfig {
        width: 1280,
        height: 720,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

/// One model entry: which asset to load, how to place it, and which
/// anchor it follows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Asset path or URL, e.g. `./assets/model/page5.glb`.
    pub asset: String,

    /// Uniform scale applied to the model root.
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],

    /// Position applied to the model root, relative to its anchor.
    #[serde(default)]
    pub position: [f32; 3],

    /// Target index the model is bound to.
    #[serde(default)]
    pub anchor: usize,
}

impl ModelConfig {
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        Vec3::from_array(self.scale)
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Declarative description of one AR experience.
///
/// ```json
/// {
///   "target_src": "./assets/target/goblin.mind",
///   "models": [
///     {
///       "asset": "./assets/model/page5.glb",
///       "scale": [0.15, 0.15, 0.15],
///       "position": [0.0, -0.4, 0.0],
///       "anchor": 0
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceConfig {
    /// Compiled image-target descriptor path or URL.
    pub target_src: String,

    #[serde(default = "default_viewport")]
    pub viewport: ViewportConfig,

    /// Models loaded and bound during startup, in order.
    pub models: Vec<ModelConfig>,
}

impl ExperienceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(crate::errors::AssetLoadError::Io)?;
        Self::from_json(&text)
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(
            self.target_src.as_str(),
            self.viewport.width,
            self.viewport.height,
        )
    }
}
