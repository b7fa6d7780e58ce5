use std::time::{Duration, Instant};

/// Host-provided frame pacing.
///
/// Stands in for a display's refresh callback registration: the loop asks
/// the ticker to block until the next frame slot. A windowing integration
/// would wait on vsync here.
pub trait FrameTicker {
    fn wait_frame(&mut self);
}

/// Fixed-rate ticker that sleeps out the remainder of each frame slot.
pub struct IntervalTicker {
    interval: Duration,
    last: Option<Instant>,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Ticker targeting `hz` frames per second.
    #[must_use]
    pub fn from_hz(hz: f32) -> Self {
        Self::new(Duration::from_secs_f32(1.0 / hz.max(1.0)))
    }
}

impl FrameTicker for IntervalTicker {
    fn wait_frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last {
            let elapsed = now - last;
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
