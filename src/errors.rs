//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! Failures are grouped by the startup phase (or loop) that raises them:
//!
//! - [`InitError`] — tracking-session construction or warm-up failed
//! - [`AssetLoadError`] — model fetch or decode failed
//! - [`AnchorBindError`] — anchor index invalid or already occupied
//! - [`FrameError`] — an exception inside the per-frame callback
//!
//! All startup-phase errors are unrecoverable within a single run: they
//! abort the remaining startup sequence. [`FrameError`] is handled by the
//! frame loop's policy (see [`crate::driver::FramePolicy`]).
//!
//! # Usage
//!
//! Public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, MirageError>`. Phase-specific functions return
//! the phase error directly; `?` widens it at the orchestration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Session construction or startup failure.
#[derive(Error, Debug)]
pub enum InitError {
    /// The underlying tracking engine could not be constructed
    /// (unsupported device, missing camera, ...).
    #[error("Tracking engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The target-image descriptor could not be found or read.
    #[error("Target descriptor not reachable: {0}")]
    TargetUnreachable(PathBuf),

    /// The session configuration is not usable as given.
    #[error("Invalid session config: {0}")]
    InvalidConfig(String),

    /// Camera / tracking warm-up failed after construction.
    #[error("Session start failed: {0}")]
    StartFailed(String),
}

/// Asset fetch or decode failure.
#[derive(Error, Debug)]
pub enum AssetLoadError {
    /// File I/O error while reading a local asset.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error.
    #[error("HTTP error for '{uri}': {message}")]
    Http {
        /// Requested resource
        uri: String,
        /// Transport-level description
        message: String,
    },

    /// HTTP response with a non-success status code.
    #[error("HTTP status {status} for '{uri}'")]
    HttpStatus {
        /// Requested resource
        uri: String,
        /// Response status code
        status: u16,
    },

    /// glTF parsing or validation error.
    #[error("glTF error: {0}")]
    Gltf(String),

    /// A buffer the document references could not be resolved.
    #[error("Unresolved glTF buffer: {0}")]
    UnresolvedBuffer(String),

    /// Data URI decoding error.
    #[error("Data URI error: {0}")]
    DataUri(#[from] base64::DecodeError),

    /// The document contains no usable scene.
    #[error("Asset contains no scene: {0}")]
    EmptyDocument(String),
}

/// Anchor registration or model attachment failure.
#[derive(Error, Debug)]
pub enum AnchorBindError {
    /// The anchor index is not covered by the session's target count.
    #[error("Anchor index {index} out of range (session tracks {target_count} targets)")]
    IndexOutOfRange {
        /// Requested anchor index
        index: usize,
        /// Number of targets the session was configured with
        target_count: usize,
    },

    /// The anchor already has a model attached.
    #[error("Anchor {index} is already bound to a model")]
    AlreadyBound {
        /// Occupied anchor index
        index: usize,
    },

    /// The model root handle does not resolve to a live scene node.
    #[error("Model root node is not in the scene")]
    ModelNotInScene,
}

/// An exception raised inside one frame of the render loop.
#[derive(Error, Debug)]
pub enum FrameError {
    /// The render backend rejected the frame.
    #[error("Render failed: {0}")]
    Render(String),

    /// Advancing an animation mixer failed.
    #[error("Animation advance failed: {0}")]
    Animation(String),
}

/// The unified error type for the engine.
#[derive(Error, Debug)]
pub enum MirageError {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),

    #[error(transparent)]
    AnchorBind(#[from] AnchorBindError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Experience configuration could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<gltf::Error> for AssetLoadError {
    fn from(err: gltf::Error) -> Self {
        AssetLoadError::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, MirageError>`.
pub type Result<T> = std::result::Result<T, MirageError>;
