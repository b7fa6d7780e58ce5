use glam::{Quat, Vec3};

/// Value types a keyframe track can interpolate.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

// Forward/backward scan window before falling back to binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last sampled keyframe so sequential playback finds the
/// next interval in O(1) instead of a search per sample.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Stateless sample at `time`. Clamps outside the keyframe range.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        assert!(!self.times.is_empty(), "Track is empty");

        // partition_point returns the first index with t > time, i.e. the
        // next keyframe; the interval starts one before it.
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);
        self.sample_at_frame(idx, time)
    }

    /// Sample at `time`, updating `cursor` for the next call.
    ///
    /// Sequential playback (time moving slightly forward or backward) hits
    /// a short linear scan around the cursor; large jumps (scrubbing, loop
    /// wrap) fall back to a binary search.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        assert!(!self.times.is_empty(), "Track is empty");

        let len = self.times.len();
        if len == 1 {
            return self.values[0];
        }

        let i = cursor.last_index;
        // Cursor may be stale if the clip was swapped underneath it.
        let t_curr = *self.times.get(i).unwrap_or(&self.times[0]);

        let found_index = if time >= t_curr {
            // Forward scan: check intervals [i, i+1), [i+1, i+2), ...
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1);
                    }
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward scan from the cursor.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = if let Some(idx) = found_index {
            cursor.last_index = idx;
            idx
        } else {
            let next_idx = self.times.partition_point(|&t| t <= time);
            let idx = next_idx.saturating_sub(1);
            cursor.last_index = idx;
            idx
        };

        self.sample_at_frame(final_index, time)
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        // No next frame: clamp to the last value.
        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        }
    }
}
