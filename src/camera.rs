//! Orbit camera looking at the grid center. The grid lies in the XY plane
//! with block height along +Z, so the camera orbits around Z.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::{Mat4, Vec3};

use crate::schema::CameraConfig;

const MIN_PITCH: f32 = -1.55;
const MAX_PITCH: f32 = 1.55;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 400.0;

pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    orbit_rate: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            yaw: config.yaw_degrees.to_radians(),
            pitch: config
                .pitch_degrees
                .to_radians()
                .clamp(MIN_PITCH, MAX_PITCH),
            distance: config.distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            orbit_rate: config.orbit_degrees_per_frame.to_radians(),
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Z)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FRAC_PI_4, aspect.max(1e-4), 1.0, 1000.0)
    }

    /// Advances the idle orbit by one frame.
    pub fn tick(&mut self) {
        self.yaw = (self.yaw + self.orbit_rate).rem_euclid(TAU);
    }

    /// Mouse-drag orbit: horizontal motion spins, vertical motion tilts.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw = (self.yaw - delta_x * 0.005).rem_euclid(TAU);
        self.pitch = (self.pitch + delta_y * 0.005).clamp(MIN_PITCH, MAX_PITCH);
    }

    pub fn apply_zoom(&mut self, scroll_lines: f32) {
        let factor = (1.0 - scroll_lines * 0.1).clamp(0.5, 2.0);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * cos_yaw,
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
        )
    }
}
