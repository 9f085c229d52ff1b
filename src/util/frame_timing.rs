use web_time::{Duration, Instant};

/// Longest frame delta handed to the simulation. A window that was hidden
/// or dragged can stall for seconds; clamping keeps a transition from
/// finishing in a single jump.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Per-frame clock: measures the delta since the previous tick and keeps a
/// smoothed FPS estimate.
pub struct FrameClock {
    /// Timestamp of the previous tick.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
    /// Number of ticks since creation.
    frames: u64,
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start a clock at an explicit instant.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_tick: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Advance to `now` and return the (clamped) frame delta.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(MAX_FRAME_DELTA)
    }

    /// Advance to the current instant and return the frame delta.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames ticked so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(dt, Duration::from_millis(16));
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(dt, MAX_FRAME_DELTA);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let mut now = start;
        for _ in 0..200 {
            now += Duration::from_millis(33);
            let _ = clock.tick_at(now);
        }
        assert!((clock.fps() - 30.3).abs() < 1.0, "fps = {}", clock.fps());
    }
}
