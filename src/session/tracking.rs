use std::path::PathBuf;

use glam::Affine3A;

use crate::errors::InitError;

/// Configuration for constructing a tracking session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path (or URL) of the compiled image-target descriptor.
    pub target_src: PathBuf,
    /// Display viewport in pixels; drives the camera's aspect ratio.
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl SessionConfig {
    #[must_use]
    pub fn new(target_src: impl Into<PathBuf>, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            target_src: target_src.into(),
            viewport_width,
            viewport_height,
        }
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport_height == 0 {
            1.0
        } else {
            self.viewport_width as f32 / self.viewport_height as f32
        }
    }
}

/// Latest pose estimate for one tracked target.
#[derive(Debug, Clone, Copy)]
pub struct TargetPose {
    /// Camera-space pose of the target.
    pub transform: Affine3A,
    /// Whether the target is currently visible in the feed. A lost target
    /// keeps its last pose with `tracked = false`.
    pub tracked: bool,
}

/// Image-tracking engine capability.
///
/// Injected into session construction so a test double (or an alternate
/// engine) can stand in. Construction is where device support and the
/// target descriptor are validated; an unreachable descriptor must fail
/// here, before any asset loading begins.
pub trait TrackingEngine {
    type Session: TrackingSession;

    fn create_session(&self, config: &SessionConfig) -> Result<Self::Session, InitError>;
}

/// A live tracking session over one target descriptor.
pub trait TrackingSession {
    /// Number of targets the descriptor declares. Anchor indices at or
    /// beyond this count are rejected at bind time.
    fn target_count(&self) -> usize;

    /// Camera and tracking warm-up. One-shot; resolves once frames flow.
    fn start(&mut self) -> impl std::future::Future<Output = Result<(), InitError>> + Send;

    /// Latest pose estimate for `target_index`, or `None` before the
    /// first detection.
    fn poll_pose(&mut self, target_index: usize) -> Option<TargetPose>;
}
