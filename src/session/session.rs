use crate::errors::{AnchorBindError, FrameError, InitError};
use crate::render::RenderBackend;
use crate::scene::{Camera, Node, NodeHandle, Scene};
use crate::session::anchor::Anchor;
use crate::session::tracking::{SessionConfig, TrackingEngine, TrackingSession};

/// Default vertical field of view, matching common phone-camera feeds.
const DEFAULT_FOV_DEG: f32 = 45.0;
const NEAR_PLANE: f32 = 0.01;
const FAR_PLANE: f32 = 1000.0;

/// A live AR session: tracking, scene graph, camera, and render backend.
///
/// Created once at startup and kept for the whole run; teardown happens
/// when the value drops. The camera stays at the origin — tracked targets
/// move through camera space, so anchors carry all the motion.
pub struct Session<T: TrackingSession, R: RenderBackend> {
    tracking: T,
    pub renderer: R,
    pub scene: Scene,
    /// Node carrying the session camera.
    pub camera_node: NodeHandle,

    anchors: Vec<Anchor>,
    started: bool,
}

impl<T: TrackingSession, R: RenderBackend> Session<T, R> {
    /// Constructs the tracking session and the scene it will populate.
    ///
    /// Fails with [`InitError`] when the engine cannot be constructed
    /// (unsupported device, unreachable target descriptor). Callers must
    /// not begin asset loading on the error path.
    pub fn create<E>(engine: &E, renderer: R, config: &SessionConfig) -> Result<Self, InitError>
    where
        E: TrackingEngine<Session = T>,
    {
        let tracking = engine.create_session(config)?;

        let mut scene = Scene::new();
        let camera = Camera::new_perspective(DEFAULT_FOV_DEG, config.aspect(), NEAR_PLANE, FAR_PLANE);
        let camera_node = scene.add_camera(camera);
        scene.active_camera = Some(camera_node);

        log::info!(
            "Session ready: {} target(s) from {}",
            tracking.target_count(),
            config.target_src.display()
        );

        Ok(Self {
            tracking,
            renderer,
            scene,
            camera_node,
            anchors: Vec::new(),
            started: false,
        })
    }

    /// Number of targets the tracking session declares.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.tracking.target_count()
    }

    #[must_use]
    pub fn tracking(&self) -> &T {
        &self.tracking
    }

    pub fn tracking_mut(&mut self) -> &mut T {
        &mut self.tracking
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the anchor group node for `index`, creating it on first
    /// use. Fails fast when the index is not covered by the descriptor's
    /// target count — a silently accepted anchor would simply never fire.
    pub fn add_anchor(&mut self, index: usize) -> Result<NodeHandle, AnchorBindError> {
        let target_count = self.tracking.target_count();
        if index >= target_count {
            return Err(AnchorBindError::IndexOutOfRange {
                index,
                target_count,
            });
        }

        if let Some(anchor) = self.anchors.iter().find(|a| a.index == index) {
            return Ok(anchor.group);
        }

        let mut group = Node::new(&format!("anchor_{index}"));
        // Hidden until the target is first tracked.
        group.visible = false;
        let group = self.scene.add_node(group);

        self.anchors.push(Anchor {
            index,
            group,
            model: None,
        });

        log::debug!("Anchor {index} registered");
        Ok(group)
    }

    /// Attaches a loaded model's root under the anchor group for `index`.
    ///
    /// Exactly one model per anchor: a second bind to the same index is
    /// rejected. Binds are independent; no ordering is implied across
    /// anchors.
    pub fn bind_model(
        &mut self,
        index: usize,
        model_root: NodeHandle,
    ) -> Result<NodeHandle, AnchorBindError> {
        if self.scene.get_node(model_root).is_none() {
            return Err(AnchorBindError::ModelNotInScene);
        }

        if self
            .anchors
            .iter()
            .any(|a| a.index == index && a.model.is_some())
        {
            return Err(AnchorBindError::AlreadyBound { index });
        }

        let group = self.add_anchor(index)?;
        self.scene.attach(model_root, group);

        if let Some(anchor) = self.anchors.iter_mut().find(|a| a.index == index) {
            anchor.model = Some(model_root);
        }

        log::info!("Model bound to anchor {index}");
        Ok(group)
    }

    /// Camera / tracking warm-up. One-shot await on the startup path; the
    /// frame loop must not run before this resolves.
    pub async fn start(&mut self) -> Result<(), InitError> {
        self.tracking.start().await?;
        self.started = true;
        log::info!("Tracking session started");
        Ok(())
    }

    /// Copies the latest tracking poses into the anchor group nodes and
    /// toggles their visibility on tracking state.
    pub fn sync_anchors(&mut self) {
        for anchor in &mut self.anchors {
            let Some(node) = self.scene.get_node_mut(anchor.group) else {
                continue;
            };

            if let Some(pose) = self.tracking.poll_pose(anchor.index) {
                node.transform.set_from_affine(pose.transform);
                node.visible = pose.tracked;
            } else {
                node.visible = false;
            }
        }
    }

    /// Propagates world matrices and issues one render of the scene
    /// against the session camera.
    pub fn render_frame(&mut self) -> Result<(), FrameError> {
        self.scene.update_world_matrices();

        let Some(camera) = self.scene.active_camera_component() else {
            return Err(FrameError::Render("no active camera".to_string()));
        };
        self.renderer.render(&self.scene, camera)
    }
}
