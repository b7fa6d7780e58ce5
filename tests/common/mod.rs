//! Shared test doubles: a scriptable tracking engine, recording render
//! backends, an in-memory asset reader, and a capturing notifier.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use base64::Engine as _;
use glam::Affine3A;

use mirage::errors::{AssetLoadError, FrameError, InitError};
use mirage::notify::Notifier;
use mirage::render::RenderBackend;
use mirage::scene::{Camera, Scene};
use mirage::session::{SessionConfig, TargetPose, TrackingEngine, TrackingSession};
use mirage::assets::AssetReader;

// ============================================================================
// Tracking doubles
// ============================================================================

/// Engine double. `fail_create` simulates an unreachable target
/// descriptor or unsupported device.
pub struct FakeEngine {
    pub target_count: usize,
    pub fail_create: bool,
}

impl FakeEngine {
    pub fn with_targets(target_count: usize) -> Self {
        Self {
            target_count,
            fail_create: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            target_count: 0,
            fail_create: true,
        }
    }
}

impl TrackingEngine for FakeEngine {
    type Session = FakeSession;

    fn create_session(&self, config: &SessionConfig) -> Result<FakeSession, InitError> {
        if self.fail_create {
            return Err(InitError::TargetUnreachable(config.target_src.clone()));
        }
        Ok(FakeSession {
            target_count: self.target_count,
            started: false,
            poses: HashMap::new(),
        })
    }
}

/// Session double with scriptable per-target poses.
pub struct FakeSession {
    pub target_count: usize,
    pub started: bool,
    pub poses: HashMap<usize, TargetPose>,
}

impl TrackingSession for FakeSession {
    fn target_count(&self) -> usize {
        self.target_count
    }

    async fn start(&mut self) -> Result<(), InitError> {
        self.started = true;
        Ok(())
    }

    fn poll_pose(&mut self, target_index: usize) -> Option<TargetPose> {
        self.poses.get(&target_index).copied()
    }
}

pub fn tracked_pose(transform: Affine3A) -> TargetPose {
    TargetPose {
        transform,
        tracked: true,
    }
}

// ============================================================================
// Render doubles
// ============================================================================

/// Backend that counts render calls.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: u64,
}

impl RenderBackend for RecordingRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &Camera) -> Result<(), FrameError> {
        self.frames += 1;
        Ok(())
    }
}

/// Backend that fails on one specific frame (1-based) and succeeds on
/// every other.
pub struct FlakyRenderer {
    pub attempts: u64,
    pub fail_on: u64,
}

impl FlakyRenderer {
    pub fn failing_on(fail_on: u64) -> Self {
        Self {
            attempts: 0,
            fail_on,
        }
    }
}

impl RenderBackend for FlakyRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &Camera) -> Result<(), FrameError> {
        self.attempts += 1;
        if self.attempts == self.fail_on {
            return Err(FrameError::Render("injected failure".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Asset reader doubles
// ============================================================================

/// Serves canned bytes per URI and records every request.
pub struct RecordingReader {
    pub responses: HashMap<String, Vec<u8>>,
    pub requests: Mutex<Vec<String>>,
}

impl RecordingReader {
    pub fn serving(uri: &str, bytes: Vec<u8>) -> Self {
        let mut responses = HashMap::new();
        responses.insert(uri.to_string(), bytes);
        Self {
            responses,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl AssetReader for RecordingReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>, AssetLoadError> {
        self.requests.lock().unwrap().push(uri.to_string());
        self.responses.get(uri).cloned().ok_or_else(|| {
            AssetLoadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                uri.to_string(),
            ))
        })
    }
}

// ============================================================================
// Notifier double
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn fatal(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// ============================================================================
// Test assets
// ============================================================================

/// Builds a minimal animated glTF document: a two-node hierarchy
/// (`wing` -> `tip`) and one clip, `flap`, translating `tip` from the
/// origin to (1, 2, 3) over one second.
pub fn animated_gltf() -> Vec<u8> {
    let times: [f32; 2] = [0.0, 1.0];
    let translations: [f32; 6] = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];

    let mut buffer = Vec::with_capacity(32);
    for t in times {
        buffer.extend_from_slice(&t.to_le_bytes());
    }
    for v in translations {
        buffer.extend_from_slice(&v.to_le_bytes());
    }
    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);

    let json = format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [
    {{ "name": "wing", "children": [1] }},
    {{ "name": "tip" }}
  ],
  "buffers": [{{ "uri": "data:application/octet-stream;base64,{encoded}", "byteLength": 32 }}],
  "bufferViews": [
    {{ "buffer": 0, "byteOffset": 0, "byteLength": 8 }},
    {{ "buffer": 0, "byteOffset": 8, "byteLength": 24 }}
  ],
  "accessors": [
    {{ "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] }},
    {{ "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" }}
  ],
  "animations": [{{
    "name": "flap",
    "samplers": [{{ "input": 0, "output": 1, "interpolation": "LINEAR" }}],
    "channels": [{{ "sampler": 0, "target": {{ "node": 1, "path": "translation" }} }}]
  }}]
}}"#
    );

    json.into_bytes()
}

/// A glTF document with no scenes at all.
pub fn sceneless_gltf() -> Vec<u8> {
    br#"{ "asset": { "version": "2.0" }, "nodes": [ { "name": "orphan" } ] }"#.to_vec()
}
