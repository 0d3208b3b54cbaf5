//! A single spinning cube viewed through a fly camera.

use glam::{Mat4, Vec3};

use crate::config::Config;
use crate::engine::input::DirectionalInput;
use crate::game::world::camera::{Camera, MouseLook};

pub struct CubeScene {
    pub camera: Camera,
    pub mouse_look: MouseLook,
    rotation_rate: f32,
    angle: f32,
}

impl CubeScene {
    pub fn new(config: &Config) -> Self {
        Self {
            camera: Camera::new(
                config.camera_position,
                config.camera_yaw,
                config.camera_pitch,
                config.camera_speed,
            ),
            mouse_look: MouseLook::new(config.mouse_sensitivity),
            rotation_rate: config.cube_rotation_rate,
            angle: 0.0,
        }
    }

    /// Current spin in degrees, kept within one turn.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn update(&mut self, input: &DirectionalInput, delta_time: f32) {
        self.camera.fly(input);
        self.angle = (self.angle + self.rotation_rate * delta_time).rem_euclid(360.0);
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.mouse_look.cursor_moved(x, y, &mut self.camera);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(Vec3::new(0.5, 1.0, 0.0).normalize(), self.angle.to_radians())
    }

    pub fn mvp(&self, aspect: f32) -> Mat4 {
        self.camera.view_projection(aspect) * self.model_matrix()
    }
}
