//! Orbit camera for the 3D viewport
//!
//! The camera orbits a target in a Y-up world. Everything downstream of
//! the camera consumes a [`CameraView`] snapshot and never mutates orbit
//! state.

use glam::{Mat4, Vec2, Vec3};
use sk_core::Ray;
use sk_core::geometry::{screen_ray, world_per_pixel_at_view_z, world_to_pixel};

use crate::config::CameraConfig;
use crate::constants::camera::{MIN_RADIUS, PITCH_LIMIT};

/// Orbit camera. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub mouse_sensitivity: f32,
    pub scroll_speed: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            target: Vec3::from(config.target),
            radius: config.radius.max(MIN_RADIUS),
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
            mouse_sensitivity: config.mouse_sensitivity,
            scroll_speed: config.scroll_speed,
        }
    }

    /// Eye position on the orbit sphere
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        self.target + self.radius * Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
    }

    /// Orbit by a mouse delta in pixels. Dragging down lowers the eye.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Change the orbit radius by scroll steps
    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius + scroll * self.scroll_speed).max(MIN_RADIUS);
    }

    /// Place the eye, keeping the target
    pub fn set_position(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.radius = offset.length().max(MIN_RADIUS);
        let Some(dir) = offset.try_normalize() else {
            return;
        };
        self.pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees().clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = dir.z.atan2(dir.x).to_degrees();
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or_zero()
    }

    /// Camera up, orthogonal to the view direction
    pub fn up(&self) -> Vec3 {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        right.cross(forward).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, self.up())
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }

    /// Snapshot for a framebuffer of `viewport` pixels
    pub fn view(&self, viewport: Vec2) -> CameraView {
        let aspect = if viewport.y > 0.0 { viewport.x / viewport.y } else { 1.0 };
        CameraView::new(
            self.view_matrix(),
            self.projection_matrix(aspect),
            self.fov_degrees,
            viewport,
        )
    }
}

/// Read-only camera state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub view: Mat4,
    pub proj: Mat4,
    pub view_proj: Mat4,
    pub inv_view_proj: Mat4,
    pub eye: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Framebuffer size in pixels
    pub viewport: Vec2,
}

impl CameraView {
    /// Build from explicit matrices. `view` must be rigid.
    pub fn new(view: Mat4, proj: Mat4, fov_y_degrees: f32, viewport: Vec2) -> Self {
        let view_proj = proj * view;
        let camera_to_world = view.inverse();
        Self {
            view,
            proj,
            view_proj,
            inv_view_proj: view_proj.inverse(),
            eye: camera_to_world.w_axis.truncate(),
            forward: -camera_to_world.z_axis.truncate().normalize_or_zero(),
            up: camera_to_world.y_axis.truncate().normalize_or_zero(),
            fov_y: fov_y_degrees.to_radians(),
            viewport,
        }
    }

    pub fn ray(&self, pixel: Vec2) -> Ray {
        screen_ray(pixel, self.viewport, &self.inv_view_proj)
    }

    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        world_to_pixel(world, &self.view_proj, self.viewport)
    }

    /// View-space Z of a world point (negative in front of the camera)
    pub fn view_z(&self, world: Vec3) -> f32 {
        self.view.transform_point3(world).z
    }

    pub fn world_per_pixel(&self, view_z: f32) -> f32 {
        world_per_pixel_at_view_z(view_z, self.fov_y, self.viewport.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_from_angles() {
        let mut camera = Camera::default();
        camera.yaw = 90.0;
        camera.pitch = 0.0;
        camera.radius = 5.0;
        let p = camera.position();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut camera = Camera::default();
        camera.orbit(0.0, -10_000.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.orbit(0.0, 10_000.0);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_orbit_sensitivity() {
        let mut camera = Camera::default();
        let (yaw, pitch) = (camera.yaw, camera.pitch);
        camera.orbit(10.0, 20.0);
        assert_relative_eq!(camera.yaw, yaw + 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.pitch, pitch - 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_min_radius() {
        let mut camera = Camera::default();
        camera.zoom(2.0);
        assert_relative_eq!(camera.radius, 4.0);
        camera.zoom(-100.0);
        assert_eq!(camera.radius, MIN_RADIUS);
    }

    #[test]
    fn test_set_position_roundtrip() {
        let mut camera = Camera::default();
        let eye = Vec3::new(1.0, 2.0, -3.0);
        camera.set_position(eye);
        let p = camera.position();
        assert_relative_eq!(p.x, eye.x, epsilon = 1e-4);
        assert_relative_eq!(p.y, eye.y, epsilon = 1e-4);
        assert_relative_eq!(p.z, eye.z, epsilon = 1e-4);
    }

    #[test]
    fn test_view_snapshot_matches_camera() {
        let camera = Camera::default();
        let view = camera.view(Vec2::new(800.0, 600.0));
        assert_relative_eq!(view.eye.distance(camera.position()), 0.0, epsilon = 1e-4);
        assert_relative_eq!(view.forward.dot(camera.forward()), 1.0, epsilon = 1e-5);
        assert_relative_eq!(view.up.dot(view.forward), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_target_projects_to_center() {
        let view = Camera::default().view(Vec2::new(800.0, 600.0));
        let center = view.project(Vec3::ZERO).unwrap();
        assert_relative_eq!(center.x, 400.0, epsilon = 1e-2);
        assert_relative_eq!(center.y, 300.0, epsilon = 1e-2);
        assert!(view.view_z(Vec3::ZERO) < 0.0);
    }
}
