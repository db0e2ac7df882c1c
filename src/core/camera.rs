//! Camera used for picking rays into the terrain
//!
//! Rendering is external to this crate; the camera exists so spatial queries
//! can turn a normalized screen coordinate into a world-space ray.

use crate::core::types::{Mat4, Quat, Vec2, Vec3};
use crate::math::Ray;

/// Camera with position, rotation, and projection parameters
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Rotation as quaternion
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Create camera looking at a target
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        let rotation = Quat::from_mat3(&glam::Mat3::from_cols(right, up, -forward));

        Self {
            position,
            rotation,
            fov_y: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-self.position);
        rotation_matrix * translation_matrix
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get inverse view-projection matrix (for ray generation)
    pub fn view_projection_inverse(&self) -> Mat4 {
        self.view_projection().inverse()
    }

    /// Get forward direction (negative Z in camera space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Build a world-space picking ray through a normalized screen coordinate.
    ///
    /// `ndc` is in [-1, 1] on both axes, +y up. The ray starts at the camera
    /// position and passes through the unprojected point on the near plane.
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection_inverse();
        // perspective_rh maps the near plane to depth 0
        let on_near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        Ray::new(self.position, (on_near - self.position).normalize())
    }

    /// Update aspect ratio (call on window resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 50.0, 80.0), 60.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_forward() {
        let camera = Camera::look_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO, Vec3::Y);
        let forward = camera.forward();
        let expected = (Vec3::ZERO - Vec3::new(0.0, 10.0, 10.0)).normalize();
        assert!((forward - expected).length() < 1e-4);
    }

    #[test]
    fn test_projection_inverse() {
        let camera = Camera::default();
        let vp = camera.view_projection();
        let vp_inv = camera.view_projection_inverse();

        // VP * VP^-1 should be identity
        let identity = vp * vp_inv;
        assert!((identity.w_axis.w - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_center_screen_ray_matches_forward() {
        let camera = Camera::look_at(Vec3::new(0.0, 20.0, 20.0), Vec3::ZERO, Vec3::Y);
        let ray = camera.screen_ray(Vec2::ZERO);
        assert!((ray.origin - camera.position).length() < 1e-4);
        assert!((ray.direction - camera.forward()).length() < 1e-3);
    }

    #[test]
    fn test_off_center_ray_deviates() {
        let camera = Camera::look_at(Vec3::new(0.0, 20.0, 20.0), Vec3::ZERO, Vec3::Y);
        let ray = camera.screen_ray(Vec2::new(0.5, 0.0));
        assert!(ray.direction.dot(camera.forward()) < 0.9999);
        assert!(ray.direction.is_normalized());
    }
}
