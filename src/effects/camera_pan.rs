//! Eased camera moves between focus points.

use std::time::Duration;

use glam::Vec3;

use crate::camera::CameraController;
use crate::util::easing::EasingFunction;

/// Moves the camera focus and orbit distance toward a target.
///
/// The starting pose is captured on the first advance, so a pan created
/// while another camera move is settling starts from wherever the camera
/// actually is.
#[derive(Debug, Clone)]
pub struct CameraPan {
    target: Vec3,
    distance: f32,
    duration: Duration,
    easing: EasingFunction,
    from: Option<(Vec3, f32)>,
    started: Option<Duration>,
    progress: f32,
}

impl CameraPan {
    /// Pan toward `target`, ending `distance` away from it.
    #[must_use]
    pub fn new(target: Vec3, duration: Duration, distance: f32) -> Self {
        Self {
            target,
            distance,
            duration,
            easing: EasingFunction::CubicInOut,
            from: None,
            started: None,
            progress: 0.0,
        }
    }

    /// Move the camera to its pose at `now`.
    pub fn advance(&mut self, now: Duration, camera: &mut CameraController) {
        let start = *self.started.get_or_insert(now);
        let (from_focus, from_distance) = *self
            .from
            .get_or_insert((camera.focus_point(), camera.distance()));

        let elapsed = now.saturating_sub(start);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.progress = t;

        let e = self.easing.evaluate(t);
        camera.set_view(
            from_focus.lerp(self.target, e),
            from_distance + (self.distance - from_distance) * e,
        );
    }

    /// Destination focus point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Destination orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether the pan reached its destination.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}
