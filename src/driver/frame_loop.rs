use std::time::Duration;

use crate::animation::AnimationMixer;
use crate::driver::cancel::CancellationToken;
use crate::driver::ticker::FrameTicker;
use crate::errors::FrameError;
use crate::render::RenderBackend;
use crate::session::Session;
use crate::session::tracking::TrackingSession;
use crate::utils::fps::FpsCounter;
use crate::utils::time::Timer;

/// Largest delta one frame may consume. A process that was suspended (or
/// a clock hiccup) otherwise fast-forwards every animation in one step.
const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(250);

/// What to do when a single frame raises a [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePolicy {
    /// Log the failure and keep the loop alive. The default: a visual
    /// session should survive one bad frame.
    Resilient,
    /// Stop the loop and surface the error.
    Halt,
}

/// Per-frame driver.
///
/// Each frame: measure the delta since the previous frame (the first
/// frame uses zero), advance every registered mixer by it in registration
/// order, sync anchor poses from tracking, render once. The loop never
/// exits on its own; it stops when the [`CancellationToken`] fires or,
/// under [`FramePolicy::Halt`], on the first failing frame.
pub struct FrameLoop {
    timer: Timer,
    policy: FramePolicy,
    max_delta: Duration,
    ticked_once: bool,
    fps: FpsCounter,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timer: Timer::new(),
            policy: FramePolicy::Resilient,
            max_delta: DEFAULT_MAX_DELTA,
            ticked_once: false,
            fps: FpsCounter::new(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FramePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count
    }

    /// One real-time frame: measures the wall-clock delta and advances.
    pub fn tick<T, R>(
        &mut self,
        session: &mut Session<T, R>,
        mixers: &mut [AnimationMixer],
    ) -> Result<(), FrameError>
    where
        T: TrackingSession,
        R: RenderBackend,
    {
        self.timer.tick();

        let dt = if self.ticked_once {
            self.timer
                .delta
                .min(self.max_delta)
                .as_secs_f32()
        } else {
            // First invocation: nothing elapsed that animations should see.
            self.ticked_once = true;
            0.0
        };

        self.advance_frame(session, mixers, dt)
    }

    /// One frame with an explicit delta, for synthetic/bounded driving.
    pub fn advance_frame<T, R>(
        &mut self,
        session: &mut Session<T, R>,
        mixers: &mut [AnimationMixer],
        dt: f32,
    ) -> Result<(), FrameError>
    where
        T: TrackingSession,
        R: RenderBackend,
    {
        if !dt.is_finite() || dt < 0.0 {
            return Err(FrameError::Animation(format!("bad frame delta: {dt}")));
        }

        // Registration order is the advance order.
        for mixer in mixers.iter_mut() {
            mixer.advance(dt, &mut session.scene);
        }

        session.sync_anchors();
        session.render_frame()?;

        if let Some(fps) = self.fps.update() {
            log::debug!("{fps:.1} fps");
        }

        Ok(())
    }

    /// Runs until the token is cancelled, paced by `ticker`.
    ///
    /// Frame failures follow the configured [`FramePolicy`]; every
    /// occurrence is logged either way.
    pub fn run<T, R, K>(
        mut self,
        session: &mut Session<T, R>,
        mixers: &mut [AnimationMixer],
        ticker: &mut K,
        token: &CancellationToken,
    ) -> Result<(), FrameError>
    where
        T: TrackingSession,
        R: RenderBackend,
        K: FrameTicker,
    {
        while !token.is_cancelled() {
            ticker.wait_frame();

            if let Err(err) = self.tick(session, mixers) {
                log::error!("Frame {} failed: {err}", self.timer.frame_count);
                if self.policy == FramePolicy::Halt {
                    return Err(err);
                }
            }
        }

        log::info!("Frame loop cancelled after {} frame(s)", self.timer.frame_count);
        Ok(())
    }
}
