//! Orbit camera driven by mouse and arrow keys.

use macroquad::prelude::*;

/// Camera circling `target` at `distance`, steered by yaw and pitch angles.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Camera looking at the origin from the given distance and angles.
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: Vec3::ZERO,
            zoom_speed: 2.0,
            min_distance: 5.0,
            max_distance: 120.0,
        }
    }

    /// Applies one frame of input.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        let step = 1.2 * get_frame_time();
        if is_key_down(KeyCode::Left) {
            self.yaw += step;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= step;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += step;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= step;
        }

        // stay clear of the poles
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        self.distance -= mouse_wheel().1 * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + vec3(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// The macroquad camera for the current orbit.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: Vec3::Y,
            target: self.target,
            ..Default::default()
        }
    }
}
