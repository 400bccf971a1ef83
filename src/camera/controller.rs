//! Orbit controller: focus point, distance and orientation, with the
//! animated pans step transitions use.

use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Orbit camera around a focus point.
///
/// The explainer moves the focus between molecule anchors during step
/// transitions; the user can additionally orbit and zoom.
#[derive(Debug, Clone)]
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// Current camera pose and projection.
    pub camera: Camera,

    rotate_speed: f32,
    zoom_speed: f32,
}

impl CameraController {
    /// Camera looking at `focus_point` from the configured orbit distance.
    #[must_use]
    pub fn new(options: &CameraOptions, focus_point: Vec3, aspect: f32) -> Self {
        let distance = options.orbit_distance;
        let camera = Camera {
            eye: focus_point + Vec3::new(0.0, 0.0, distance),
            target: focus_point,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            orientation: Quat::IDENTITY,
            distance,
            focus_point,
            camera,
            rotate_speed: options.rotate_speed * 0.01,
            zoom_speed: options.zoom_speed,
        }
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Orbit distance from the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Move the focus and orbit distance, keeping the orientation.
    pub fn set_view(&mut self, focus_point: Vec3, distance: f32) {
        self.focus_point = focus_point;
        self.distance = distance.clamp(1.0, 1000.0);
        self.update_camera_pos();
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit by `delta` pixels of pointer movement.
    pub fn rotate(&mut self, delta: Vec2) {
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal_rotation * self.orientation;

        let right = self.orientation * Vec3::X;
        let vertical_rotation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Zoom in (positive) or out (negative).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(1.0, 1000.0);
        self.update_camera_pos();
    }

    /// Adjust camera to fit the given positions, centering on their centroid
    /// and setting distance so all points are visible.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        // 1.5x padding for comfortable view
        self.set_view(centroid, fit_distance * 1.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), Vec3::ZERO, 1.0)
    }

    #[test]
    fn set_view_moves_eye_along_orbit() {
        let mut c = controller();
        c.set_view(Vec3::new(6.0, 0.0, 0.0), 12.0);
        assert!((c.camera.eye - Vec3::new(6.0, 0.0, 12.0)).length() < 1e-5);
        assert_eq!(c.camera.target, Vec3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut c = controller();
        for _ in 0..500 {
            c.zoom(5.0);
        }
        assert!(c.distance() >= 1.0);
    }

    #[test]
    fn rotate_preserves_distance() {
        let mut c = controller();
        let before = c.distance();
        c.rotate(Vec2::new(40.0, -25.0));
        let actual = (c.camera.eye - c.focus_point()).length();
        assert!((actual - before).abs() < 1e-3);
    }

    #[test]
    fn fit_centers_on_centroid() {
        let mut c = controller();
        c.fit_to_positions(&[Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
        assert!(c.focus_point().length() < 1e-5);
        assert!(c.distance() > 2.0);
    }
}
