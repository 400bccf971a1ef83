//! Frame pacing and FPS smoothing for the render loop.

use std::time::Duration;

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Timestamps come from the caller's [`Clock`](super::clock::Clock) so the
/// loop can be driven in virtual time.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timestamp of the last rendered frame, if any
    last_frame: Option<Duration>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames rendered so far
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self, now: Duration) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.is_none_or(|last| {
            now.saturating_sub(last) >= self.min_frame_duration
        })
    }

    /// Record a rendered frame at `now`. Returns the time since the
    /// previous frame (zero for the first one).
    pub fn end_frame(&mut self, now: Duration) -> Duration {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);
        self.frame_count += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
