use crate::animation::action::AnimationAction;
use crate::animation::binding::TargetPath;
use crate::animation::clip::TrackData;
use crate::scene::Scene;

/// Drives the actions of one loaded model.
///
/// `advance` moves every action's time accumulator by the frame delta and
/// samples resolved bindings into node transforms. The mixer also keeps a
/// running total of all deltas it has consumed, which diagnostics (and the
/// frame-loop contract) rely on.
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
    accumulated: f64,
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            accumulated: 0.0,
        }
    }

    pub fn add_action(&mut self, action: AnimationAction) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut [AnimationAction] {
        &mut self.actions
    }

    /// Puts every action in the playing state.
    pub fn play_all(&mut self) {
        for action in &mut self.actions {
            action.play();
        }
    }

    /// Pauses every action; their time accumulators hold.
    pub fn pause_all(&mut self) {
        for action in &mut self.actions {
            action.pause();
        }
    }

    /// Total seconds this mixer has been advanced by.
    #[must_use]
    pub fn accumulated_seconds(&self) -> f64 {
        self.accumulated
    }

    /// Advances all actions by `dt` seconds and writes sampled track values
    /// into the scene. Actions are processed in registration order.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene) {
        self.accumulated += f64::from(dt);

        for action in &mut self.actions {
            action.update(dt);
        }

        for action in &mut self.actions {
            if !action.is_playing() {
                continue;
            }

            for binding in &action.bindings {
                let track = &action.clip().tracks[binding.track_index];
                let mut cursor = action.track_cursors[binding.track_index].clone();

                match (&track.data, binding.target) {
                    (TrackData::Vector3(t), TargetPath::Translation) => {
                        if let Some(node) = scene.get_node_mut(binding.node_handle) {
                            node.transform.position = t.sample_with_cursor(action.time, &mut cursor);
                            node.transform.mark_dirty();
                        }
                    }
                    (TrackData::Vector3(t), TargetPath::Scale) => {
                        if let Some(node) = scene.get_node_mut(binding.node_handle) {
                            node.transform.scale = t.sample_with_cursor(action.time, &mut cursor);
                            node.transform.mark_dirty();
                        }
                    }
                    (TrackData::Quaternion(t), TargetPath::Rotation) => {
                        if let Some(node) = scene.get_node_mut(binding.node_handle) {
                            node.transform.rotation = t.sample_with_cursor(action.time, &mut cursor);
                            node.transform.mark_dirty();
                        }
                    }
                    _ => {}
                }

                action.track_cursors[binding.track_index] = cursor;
            }
        }
    }
}
