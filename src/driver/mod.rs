//! Frame loop driving.
//!
//! The per-frame callback is modeled as an explicit scheduling
//! abstraction: a [`FrameLoop`] runs until its [`CancellationToken`] is
//! cancelled, paced by whatever [`FrameTicker`] the host provides. Tests
//! drive a bounded number of synthetic frames through
//! [`FrameLoop::advance_frame`] instead.

pub mod cancel;
pub mod frame_loop;
pub mod ticker;

pub use cancel::CancellationToken;
pub use frame_loop::{FrameLoop, FramePolicy};
pub use ticker::{FrameTicker, IntervalTicker};
