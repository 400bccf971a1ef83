//! Perspective camera math and picking rays.

use glam::{Mat4, Vec3, Vec4};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Camera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x and y in -1..1, y up).
    #[must_use]
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        let world_near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray {
            origin,
            direction: (far - origin).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let ray = camera().ray_through(0.0, 0.0);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(ray.origin.z < 10.0 && ray.origin.z > 9.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let clip = camera().build_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }
}
