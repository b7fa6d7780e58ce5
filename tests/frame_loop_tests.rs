//! Frame Loop Tests
//!
//! Tests for:
//! - Synthetic frame driving: render counts and mixer delta sums
//! - Bad-delta rejection
//! - FramePolicy: resilient continue vs. halt
//! - Cancellation-bounded run()

mod common;

use std::sync::Arc;

use glam::Vec3;

use common::{FakeEngine, FakeSession, FlakyRenderer, RecordingRenderer};
use mirage::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use mirage::animation::binding::TargetPath;
use mirage::animation::tracks::{InterpolationMode, KeyframeTrack};
use mirage::animation::{AnimationAction, AnimationMixer};
use mirage::driver::{CancellationToken, FrameLoop, FramePolicy, FrameTicker};
use mirage::errors::FrameError;
use mirage::render::RenderBackend;
use mirage::session::{Session, SessionConfig};

fn config() -> SessionConfig {
    SessionConfig::new("./assets/target/goblin.mind", 1280, 720)
}

fn new_session<R: RenderBackend>(renderer: R) -> Session<FakeSession, R> {
    Session::create(&FakeEngine::with_targets(1), renderer, &config()).unwrap()
}

fn looping_mixer() -> AnimationMixer {
    let clip = Arc::new(AnimationClip::new(
        "spin".to_string(),
        vec![Track {
            meta: TrackMeta {
                node_name: "tip".to_string(),
                target: TargetPath::Translation,
            },
            data: TrackData::Vector3(KeyframeTrack::new(
                vec![0.0, 1.0],
                vec![Vec3::ZERO, Vec3::X],
                InterpolationMode::Linear,
            )),
        }],
    ));

    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(clip));
    mixer
}

/// Ticker that cancels the shared token after a fixed number of frames.
struct CountingTicker {
    remaining: u32,
    token: CancellationToken,
}

impl FrameTicker for CountingTicker {
    fn wait_frame(&mut self) {
        if self.remaining == 0 {
            self.token.cancel();
        } else {
            self.remaining -= 1;
        }
    }
}

// ============================================================================
// Synthetic frames
// ============================================================================

#[test]
fn three_frames_three_renders_and_summed_deltas() {
    let mut session = new_session(RecordingRenderer::default());
    let mut mixers = vec![looping_mixer(), looping_mixer()];
    let mut frame_loop = FrameLoop::new();

    for _ in 0..3 {
        frame_loop
            .advance_frame(&mut session, &mut mixers, 0.016)
            .unwrap();
    }

    assert_eq!(session.renderer.frames, 3, "Exactly one render per frame");
    for mixer in &mixers {
        assert!(
            (mixer.accumulated_seconds() - 0.048).abs() < 1e-9,
            "Every registered driver advances by the delta sum, got {}",
            mixer.accumulated_seconds()
        );
    }
}

#[test]
fn zero_delta_frame_still_renders() {
    let mut session = new_session(RecordingRenderer::default());
    let mut mixers = vec![looping_mixer()];
    let mut frame_loop = FrameLoop::new();

    frame_loop
        .advance_frame(&mut session, &mut mixers, 0.0)
        .unwrap();

    assert_eq!(session.renderer.frames, 1);
    assert!(mixers[0].accumulated_seconds().abs() < 1e-12);
}

#[test]
fn bad_delta_is_a_frame_error() {
    let mut session = new_session(RecordingRenderer::default());
    let mut mixers = vec![looping_mixer()];
    let mut frame_loop = FrameLoop::new();

    let result = frame_loop.advance_frame(&mut session, &mut mixers, f32::NAN);
    assert!(matches!(result, Err(FrameError::Animation(_))));

    let result = frame_loop.advance_frame(&mut session, &mut mixers, -0.5);
    assert!(matches!(result, Err(FrameError::Animation(_))));

    assert_eq!(session.renderer.frames, 0, "Bad frames must not render");
}

// ============================================================================
// Policy & cancellation
// ============================================================================

#[test]
fn resilient_loop_survives_a_failing_frame() {
    let mut session = new_session(FlakyRenderer::failing_on(2));
    let mut mixers = vec![looping_mixer()];

    let token = CancellationToken::new();
    let mut ticker = CountingTicker {
        remaining: 4,
        token: token.clone(),
    };

    let result = FrameLoop::new().with_policy(FramePolicy::Resilient).run(
        &mut session,
        &mut mixers,
        &mut ticker,
        &token,
    );

    assert!(result.is_ok(), "Resilient policy swallows the bad frame");
    assert_eq!(
        session.renderer.attempts,
        5,
        "Loop kept rendering after the failure"
    );
}

#[test]
fn halt_loop_stops_on_first_failing_frame() {
    let mut session = new_session(FlakyRenderer::failing_on(2));
    let mut mixers = vec![looping_mixer()];

    let token = CancellationToken::new();
    let mut ticker = CountingTicker {
        remaining: 10,
        token: token.clone(),
    };

    let result = FrameLoop::new().with_policy(FramePolicy::Halt).run(
        &mut session,
        &mut mixers,
        &mut ticker,
        &token,
    );

    assert!(matches!(result, Err(FrameError::Render(_))));
    assert_eq!(session.renderer.attempts, 2, "Halted at the failing frame");
}

#[test]
fn cancelled_token_stops_the_loop() {
    let mut session = new_session(RecordingRenderer::default());
    let mut mixers = vec![looping_mixer()];

    let token = CancellationToken::new();
    token.cancel();

    let mut ticker = CountingTicker {
        remaining: 0,
        token: token.clone(),
    };

    FrameLoop::new()
        .run(&mut session, &mut mixers, &mut ticker, &token)
        .unwrap();

    assert_eq!(session.renderer.frames, 0, "Pre-cancelled loop never ticks");
}

#[test]
fn first_real_tick_uses_zero_delta() {
    let mut session = new_session(RecordingRenderer::default());
    let mut mixers = vec![looping_mixer()];
    let mut frame_loop = FrameLoop::new();

    frame_loop.tick(&mut session, &mut mixers).unwrap();

    assert_eq!(session.renderer.frames, 1);
    assert!(
        mixers[0].accumulated_seconds().abs() < 1e-12,
        "First invocation must not advance animation state"
    );
}
