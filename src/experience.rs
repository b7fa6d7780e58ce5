//! Experience orchestration.
//!
//! The single coordinating flow: construct the session, decorate the
//! scene, load and place each configured model, bind it to its anchor,
//! start tracking, then hand everything to the frame loop. Entered once;
//! a startup failure aborts the remaining sequence, surfaces through the
//! [`Notifier`], and the only recovery is a full relaunch.

use glam::Vec3;

use crate::animation::AnimationMixer;
use crate::assets::io::AssetReader;
use crate::assets::model::load_model;
use crate::config::ExperienceConfig;
use crate::driver::{CancellationToken, FrameLoop, FrameTicker};
use crate::errors::{MirageError, Result};
use crate::notify::Notifier;
use crate::render::RenderBackend;
use crate::scene::{Light, Scene};
use crate::session::tracking::{TrackingEngine, TrackingSession};
use crate::session::Session;

/// Lifecycle of one experience run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    SessionReady,
    AssetsLoaded,
    AnchorsBound,
    Running,
    /// Terminal: a startup phase or a halted frame loop failed.
    Failed,
    /// Terminal: the loop was cancelled.
    Terminated,
}

/// A fully started experience: the session plus the animation mixers that
/// must be registered with the frame loop before it runs.
pub struct Experience<T: TrackingSession, R: RenderBackend> {
    pub session: Session<T, R>,
    mixers: Vec<AnimationMixer>,
    phase: Phase,
}

impl<T: TrackingSession, R: RenderBackend> Experience<T, R> {
    /// Runs the whole startup sequence.
    ///
    /// Order is load-bearing: models load only after the session exists,
    /// each bind only after its model loaded, and tracking starts only
    /// after every bind — so the frame loop can never observe a
    /// half-started session. Every failure is reported through `notifier`
    /// and the log, then returned.
    pub async fn launch<E, A, N>(
        engine: &E,
        renderer: R,
        reader: &A,
        notifier: &N,
        config: &ExperienceConfig,
    ) -> Result<Self>
    where
        E: TrackingEngine<Session = T>,
        A: AssetReader,
        N: Notifier,
    {
        let mut phase = Phase::Uninitialized;

        let mut session = Session::create(engine, renderer, &config.session_config())
            .map_err(|err| fail(notifier, phase, "initialize the tracking session", err))?;
        phase = Phase::SessionReady;

        setup_lighting(&mut session.scene);

        let mut mixers = Vec::with_capacity(config.models.len());
        for model_cfg in &config.models {
            let loaded = load_model(
                reader,
                &model_cfg.asset,
                &mut session.scene,
                model_cfg.scale(),
                model_cfg.position(),
            )
            .await
            .map_err(|err| fail(notifier, phase, "load the 3D model", err))?;
            phase = Phase::AssetsLoaded;

            session
                .bind_model(model_cfg.anchor, loaded.root)
                .map_err(|err| fail(notifier, phase, "bind the anchor", err))?;
            phase = Phase::AnchorsBound;

            mixers.push(loaded.mixer);
        }

        session
            .start()
            .await
            .map_err(|err| fail(notifier, phase, "start the tracking session", err))?;

        log::info!(
            "Experience launched: {} model(s) across {} anchor(s)",
            mixers.len(),
            session.anchors().len()
        );

        Ok(Self {
            session,
            mixers,
            phase,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mixers(&self) -> &[AnimationMixer] {
        &self.mixers
    }

    /// Drives one synthetic frame. Test and headless entry point.
    pub fn step(&mut self, frame_loop: &mut FrameLoop, dt: f32) -> Result<()> {
        self.phase = Phase::Running;
        frame_loop
            .advance_frame(&mut self.session, &mut self.mixers, dt)
            .map_err(MirageError::from)
    }

    /// Enters the frame loop until `token` is cancelled.
    pub fn run<K: FrameTicker>(
        &mut self,
        frame_loop: FrameLoop,
        ticker: &mut K,
        token: &CancellationToken,
    ) -> Result<()> {
        self.phase = Phase::Running;

        let result = frame_loop.run(&mut self.session, &mut self.mixers, ticker, token);
        self.phase = match result {
            Ok(()) => Phase::Terminated,
            Err(_) => Phase::Failed,
        };

        result.map_err(MirageError::from)
    }
}

/// Hemisphere fill so overlay content reads against any camera feed.
fn setup_lighting(scene: &mut Scene) {
    let light = Light::new_hemisphere(
        Vec3::ONE,
        Vec3::new(0.733, 0.733, 1.0),
        1.0,
    );
    scene.add_light(light);
}

/// Common startup failure path: notify the user, log, mark the phase.
fn fail<E: Into<MirageError>>(
    notifier: &impl Notifier,
    phase: Phase,
    action: &str,
    err: E,
) -> MirageError {
    let err = err.into();
    notifier.fatal(&format!("Failed to {action}. See the log for details."));
    log::error!("Startup aborted in {phase:?} while trying to {action}: {err}");
    err
}
