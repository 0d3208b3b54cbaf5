use glam::{Mat4, Vec3};

use crate::engine::input::DirectionalInput;

pub const PITCH_LIMIT: f32 = 89.0;

/// First-person fly camera. Angles are kept in degrees.
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    pub up: Vec3,
    pub speed: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, speed: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch: 0.0,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            speed,
        };
        camera.set_angles(yaw, pitch);
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Adds to yaw and pitch. Yaw is left unbounded, pitch is clamped to avoid flipping over the pole.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_angles(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    fn update_front(&mut self) {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(cy * cp, sp, sy * cp).normalize();
    }

    pub fn move_forward(&mut self) {
        self.position += self.front * self.speed;
    }

    pub fn move_backward(&mut self) {
        self.position -= self.front * self.speed;
    }

    pub fn move_left(&mut self) {
        self.position -= self.right() * self.speed;
    }

    pub fn move_right(&mut self) {
        self.position += self.right() * self.speed;
    }

    /// Free flight: up/down keys move along the view direction, left/right strafe.
    pub fn fly(&mut self, input: &DirectionalInput) {
        if input.is_idle() {
            return;
        }
        if input.up {
            self.move_forward();
        }
        if input.down {
            self.move_backward();
        }
        if input.left {
            self.move_left();
        }
        if input.right {
            self.move_right();
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(45.0_f32.to_radians(), aspect, 0.1, 100.0)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Turns absolute cursor positions into camera rotation.
pub struct MouseLook {
    pub sensitivity: f32,
    last: Option<(f64, f64)>,
}

impl MouseLook {
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity, last: None }
    }

    /// The next cursor sample becomes the new reference instead of rotating the camera.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64, camera: &mut Camera) {
        let Some((last_x, last_y)) = self.last.replace((x, y)) else {
            return;
        };
        // Screen y grows downward; moving the cursor up looks up.
        let dx = (x - last_x) as f32 * self.sensitivity;
        let dy = (last_y - y) as f32 * self.sensitivity;
        camera.rotate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0, 0.05)
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = camera();
        assert!(approx(cam.front(), Vec3::NEG_Z));
        assert!(approx(cam.right(), Vec3::X));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = camera();
        cam.rotate(0.0, 200.0);
        assert_eq!(cam.pitch(), 89.0);
        cam.rotate(0.0, -1000.0);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn yaw_is_not_clamped() {
        let mut cam = camera();
        cam.rotate(720.0, 0.0);
        assert_eq!(cam.yaw(), 630.0);
        assert!(approx(cam.front(), Vec3::NEG_Z));
    }

    #[test]
    fn first_cursor_sample_only_sets_reference() {
        let mut cam = camera();
        let mut look = MouseLook::new(0.1);
        look.cursor_moved(400.0, 300.0, &mut cam);
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);

        look.cursor_moved(410.0, 280.0, &mut cam);
        assert!((cam.yaw() - -89.0).abs() < EPS);
        assert!((cam.pitch() - 2.0).abs() < EPS);
    }

    #[test]
    fn reset_rearms_first_sample() {
        let mut cam = camera();
        let mut look = MouseLook::new(0.1);
        look.cursor_moved(0.0, 0.0, &mut cam);
        look.reset();
        look.cursor_moved(5000.0, 5000.0, &mut cam);
        assert_eq!(cam.yaw(), -90.0);
    }

    #[test]
    fn cumulative_mouse_input_clamps_pitch() {
        let mut cam = camera();
        let mut look = MouseLook::new(0.1);
        look.cursor_moved(0.0, 1000.0, &mut cam);
        // 2000 pixels upward at 0.1 deg/pixel is +200 degrees.
        for step in 1..=20 {
            look.cursor_moved(0.0, 1000.0 - 100.0 * step as f64, &mut cam);
            assert!(cam.pitch() <= PITCH_LIMIT && cam.pitch() >= -PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), 89.0);
    }

    #[test]
    fn front_stays_unit_length() {
        let mut cam = camera();
        let mut look = MouseLook::new(0.37);
        look.cursor_moved(0.0, 0.0, &mut cam);
        let mut x = 0.0;
        let mut y = 0.0;
        for i in 0..500 {
            x += ((i * 7919) % 61) as f64 - 30.0;
            y += ((i * 104_729) % 43) as f64 - 21.0;
            look.cursor_moved(x, y, &mut cam);
            assert!((cam.front().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn fly_moves_along_front_and_strafes() {
        let mut cam = camera();
        let start = cam.position;
        cam.fly(&DirectionalInput { up: true, ..DirectionalInput::none() });
        assert!(approx(cam.position, start + Vec3::new(0.0, 0.0, -0.05)));

        cam.fly(&DirectionalInput { right: true, ..DirectionalInput::none() });
        assert!(approx(cam.position, start + Vec3::new(0.05, 0.0, -0.05)));

        cam.fly(&DirectionalInput { left: true, down: true, ..DirectionalInput::none() });
        assert!(approx(cam.position, start));
    }

    #[test]
    fn flying_while_looking_up_climbs() {
        let mut cam = camera();
        cam.rotate(0.0, 45.0);
        cam.fly(&DirectionalInput { up: true, ..DirectionalInput::none() });
        assert!(cam.position.y > 0.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let vp = camera().view_projection(800.0 / 600.0);
        assert!(vp.is_finite());
    }
}
