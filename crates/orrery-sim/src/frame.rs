//! Frame delta measurement.

/// Turns monotonically sampled timestamps into per-frame deltas.
///
/// The first sample measures from zero, matching a clock that starts when the
/// window opens.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last: f64,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now_seconds` and return the time since the previous sample.
    /// A clock that steps backwards yields a delta of zero.
    pub fn sample(&mut self, now_seconds: f64) -> f32 {
        let delta = (now_seconds - self.last).max(0.0);
        self.last = now_seconds;
        self.frames += 1;
        delta as f32
    }

    /// Number of samples taken so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
