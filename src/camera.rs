use glam::{Vec2, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::math::Ray;
use crate::types::CameraUniform;

pub const CAMERA_SPEED: f32 = 0.8;
pub const CAMERA_ROTATION_SPEED: f32 = 0.02;

/// Clip plane pair where near can never reach far: setting near pushes far
/// up to keep at least `min_gap` between them, setting far re-applies the
/// near clamp.
#[derive(Debug, Clone, Copy)]
pub struct DepthRange {
    near: f32,
    far: f32,
    min_gap: f32,
}

impl DepthRange {
    pub fn new(near: f32, far: f32, min_gap: f32) -> Self {
        let mut range = Self {
            near,
            far,
            min_gap,
        };
        range.set_near(near);
        range
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
        self.far = self.far.max(near + self.min_gap);
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
        let near = self.near.min(far);
        self.set_near(near);
    }
}

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }

    const fn rotation_velocity(&self) -> f32 {
        self.to_direction(self.rotate_right, self.rotate_left)
    }
}

/// First-person camera. Also the source of picking rays: `screen_ray` is
/// the CPU mirror of the ray generation the trace shader performs, so a
/// click and the pixel under it agree on what was hit.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    fov_y: f32,
    depth: DepthRange,
    pub movement: MovementState,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            fov_y: 75_f32.to_radians(),
            depth: DepthRange::new(0.1, 1000.0, 0.1),
            movement: MovementState::default(),
        }
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y.clamp(1_f32.to_radians(), 150_f32.to_radians());
    }

    pub fn depth(&self) -> DepthRange {
        self.depth
    }

    pub fn depth_mut(&mut self) -> &mut DepthRange {
        &mut self.depth
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn update(&mut self) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();

        let displacement = self.forward() * fwd * CAMERA_SPEED
            + self.right() * right_dir * CAMERA_SPEED
            + Vec3::Y * up_dir * CAMERA_SPEED;

        self.position += displacement;
        self.yaw += self.movement.rotation_velocity() * CAMERA_ROTATION_SPEED;
    }

    /// World-space ray through a point given in normalized device
    /// coordinates.
    pub fn screen_ray(&self, ndc: Vec2, aspect: f32) -> Ray {
        let tan_half = (self.fov_y * 0.5).tan();
        let dir = self.forward()
            + self.right() * ndc.x * tan_half * aspect
            + self.up() * ndc.y * tan_half;
        Ray::new(self.position, dir)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            tan_half_fov: (self.fov_y * 0.5).tan(),
            forward: self.forward().to_array(),
            near: self.depth.near(),
            right: self.right().to_array(),
            far: self.depth.far(),
            up: self.up().to_array(),
            _pad: 0.0,
        }
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::ShiftLeft => self.movement.down = is_pressed,
                KeyCode::KeyQ => self.movement.rotate_left = is_pressed,
                KeyCode::KeyE => self.movement.rotate_right = is_pressed,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_is_the_forward_axis() {
        let camera = Camera::new(Vec3::ZERO, std::f32::consts::PI, 0.0);
        let ray = camera.screen_ray(Vec2::ZERO, 16.0 / 9.0);
        assert!((ray.dir - camera.forward()).length() < 1e-5);
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn right_edge_ray_leans_right() {
        let camera = Camera::new(Vec3::ZERO, std::f32::consts::PI, 0.0);
        let ray = camera.screen_ray(Vec2::new(1.0, 0.0), 1.0);
        assert!(ray.dir.dot(camera.right()) > 0.0);
        assert!((ray.dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn top_edge_ray_leans_up() {
        let camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        let ray = camera.screen_ray(Vec2::new(0.0, 1.0), 1.0);
        assert!(ray.dir.dot(camera.up()) > 0.0);
    }

    #[test]
    fn depth_range_near_pushes_far() {
        let mut range = DepthRange::new(0.1, 10.0, 0.1);
        range.set_near(15.0);
        assert_eq!(range.near(), 15.0);
        assert!(range.far() >= 15.1);
    }

    #[test]
    fn depth_range_far_pulls_near() {
        let mut range = DepthRange::new(5.0, 50.0, 0.1);
        range.set_far(2.0);
        assert_eq!(range.near(), 2.0);
        assert!(range.far() >= 2.1);
    }

    #[test]
    fn fov_is_clamped_to_sane_degrees() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        camera.set_fov_y(500_f32.to_radians());
        assert!(camera.fov_y() <= 150_f32.to_radians() + 1e-6);
        camera.set_fov_y(0.0);
        assert!(camera.fov_y() >= 1_f32.to_radians() - 1e-6);
    }
}
