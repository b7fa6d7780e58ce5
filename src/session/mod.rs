//! Tracking session management.
//!
//! The tracking engine is an injected capability, never a reachable
//! global: [`TrackingEngine`] constructs a [`TrackingSession`], and
//! [`Session`] wires the session together with the scene graph, the
//! camera, and the render backend. Anchors are group nodes whose pose
//! follows the engine's per-frame tracking results.

pub mod anchor;
pub mod session;
pub mod tracking;

pub use anchor::Anchor;
pub use session::Session;
pub use tracking::{SessionConfig, TargetPose, TrackingEngine, TrackingSession};
