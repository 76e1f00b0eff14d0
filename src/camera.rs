//! Perspective camera with screen-point-to-ray unprojection.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::geometry::Ray;

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

impl Camera {
    /// Build the combined view-projection matrix.
    ///
    /// `perspective_rh` already uses [0,1] depth range (wgpu/Vulkan
    /// convention).
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Cast a ray from the camera through a screen point.
    ///
    /// `point` is in screen space (origin bottom-left, Y up, physical
    /// pixels); `screen` is the viewport size in the same units. The ray
    /// origin lies on the near plane and the direction is normalized.
    #[must_use]
    pub fn screen_point_to_ray(&self, screen: Vec2, point: Vec2) -> Ray {
        // Convert to NDC (-1 to 1). Screen space is already Y-up, so no
        // flip is needed.
        let ndc_x = (point.x / screen.x) * 2.0 - 1.0;
        let ndc_y = (point.y / screen.y) * 2.0 - 1.0;

        let inv_view_proj = self.build_matrix().inverse();

        // Unproject near and far points ([0,1] depth range)
        let ndc_near = Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let ndc_far = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let world_near = inv_view_proj * ndc_near;
        let world_far = inv_view_proj * ndc_far;

        // Perspective divide
        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray::new(origin, far - origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
