use crate::errors::FrameError;
use crate::scene::{Camera, Scene};

/// Render backend capability.
///
/// The engine owns orchestration; submitting draw calls is the backend's
/// business. A GPU implementation traverses the visible scene graph and
/// draws it from the camera's view-projection; the frame loop only needs
/// one `render` per tick.
pub trait RenderBackend {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), FrameError>;
}

/// Backend that performs no drawing.
///
/// Stands in wherever frames must flow without a GPU: demos, CI, and
/// soak-testing the session flow. Counts the frames it was asked to
/// render.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames_rendered: u64,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl RenderBackend for HeadlessRenderer {
    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<(), FrameError> {
        self.frames_rendered += 1;
        log::trace!(
            "Headless frame {}: {} root node(s)",
            self.frames_rendered,
            scene.root_nodes.len()
        );
        Ok(())
    }
}
