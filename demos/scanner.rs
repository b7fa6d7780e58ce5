//! Headless scanner demo.
//!
//! Wires the full experience flow against a scripted tracking engine and
//! the headless render backend: one image target, one animated model,
//! bound to anchor 0 and driven for a few seconds of frames. Swap in a
//! real tracking engine and a GPU backend to put it on screen.

use std::collections::HashMap;

use glam::{Affine3A, Vec3};

use mirage::driver::{CancellationToken, FrameLoop, FrameTicker, IntervalTicker};
use mirage::errors::InitError;
use mirage::experience::Experience;
use mirage::notify::LogNotifier;
use mirage::render::HeadlessRenderer;
use mirage::session::{SessionConfig, TargetPose, TrackingEngine, TrackingSession};
use mirage::{AssetReaderVariant, ExperienceConfig};

/// Tracking engine that "detects" every target half a meter in front of
/// the camera, drifting slowly so anchor pose sync has something to do.
struct ScriptedEngine {
    target_count: usize,
}

struct ScriptedSession {
    target_count: usize,
    frame: u64,
    poses: HashMap<usize, TargetPose>,
}

impl TrackingEngine for ScriptedEngine {
    type Session = ScriptedSession;

    fn create_session(&self, config: &SessionConfig) -> Result<ScriptedSession, InitError> {
        log::info!("Scripted engine tracking {}", config.target_src.display());
        Ok(ScriptedSession {
            target_count: self.target_count,
            frame: 0,
            poses: HashMap::new(),
        })
    }
}

impl TrackingSession for ScriptedSession {
    fn target_count(&self) -> usize {
        self.target_count
    }

    async fn start(&mut self) -> Result<(), InitError> {
        log::info!("Camera feed warmed up");
        Ok(())
    }

    fn poll_pose(&mut self, target_index: usize) -> Option<TargetPose> {
        self.frame += 1;
        let sway = (self.frame as f32 * 0.01).sin() * 0.05;
        let pose = TargetPose {
            transform: Affine3A::from_translation(Vec3::new(sway, 0.0, -0.5)),
            tracked: true,
        };
        self.poses.insert(target_index, pose);
        Some(pose)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ExperienceConfig::from_json(
        r#"{
            "target_src": "./demos/assets/target/goblin.mind",
            "models": [
                {
                    "asset": "page5.glb",
                    "scale": [0.15, 0.15, 0.15],
                    "position": [0.0, -0.4, 0.0],
                    "anchor": 0
                }
            ]
        }"#,
    )?;

    let engine = ScriptedEngine { target_count: 1 };
    let reader = AssetReaderVariant::from_source("./demos/assets/model");
    let notifier = LogNotifier;

    let mut experience = pollster::block_on(Experience::launch(
        &engine,
        HeadlessRenderer::new(),
        &reader,
        &notifier,
        &config,
    ))?;

    // Run five seconds of frames, then cancel from the ticker side.
    let token = CancellationToken::new();
    let mut ticker = BoundedTicker {
        inner: IntervalTicker::from_hz(60.0),
        remaining: 300,
        token: token.clone(),
    };

    experience.run(FrameLoop::new(), &mut ticker, &token)?;

    for (i, mixer) in experience.mixers().iter().enumerate() {
        log::info!(
            "Mixer {i}: {:.2}s of animation advanced",
            mixer.accumulated_seconds()
        );
    }

    Ok(())
}

/// Interval ticker that cancels the loop after a frame budget.
struct BoundedTicker {
    inner: IntervalTicker,
    remaining: u32,
    token: CancellationToken,
}

impl FrameTicker for BoundedTicker {
    fn wait_frame(&mut self) {
        if self.remaining == 0 {
            self.token.cancel();
            return;
        }
        self.remaining -= 1;
        self.inner.wait_frame();
    }
}
