#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod driver;
pub mod errors;
pub mod experience;
pub mod notify;
pub mod render;
pub mod scene;
pub mod session;
pub mod utils;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, Binder, LoopMode};
pub use assets::{AssetReader, AssetReaderVariant, GltfLoader, LoadedModel, load_model};
pub use config::{ExperienceConfig, ModelConfig};
pub use driver::{CancellationToken, FrameLoop, FramePolicy, FrameTicker, IntervalTicker};
pub use errors::{AnchorBindError, AssetLoadError, FrameError, InitError, MirageError, Result};
pub use experience::{Experience, Phase};
pub use notify::{LogNotifier, Notifier};
pub use render::{HeadlessRenderer, RenderBackend};
pub use scene::{Camera, Light, Node, Scene, Transform};
pub use session::{Anchor, Session, SessionConfig, TargetPose, TrackingEngine, TrackingSession};
pub use utils::Timer;
