//! Scene configuration schema. Everything is optional in the YAML; defaults
//! reproduce the original 55x55 block field.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub heights: HeightRange,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            grid: GridConfig::default(),
            heights: HeightRange::default(),
            animation: AnimationConfig::default(),
            camera: CameraConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Scene {
    pub fn cell_count(&self) -> usize {
        let row = self.grid.row_length as usize;
        row * row
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.row_length == 0 {
            bail!("grid.row_length must be at least 1");
        }
        if self.grid.row_length > MAX_ROW_LENGTH {
            bail!(
                "grid.row_length {} exceeds the supported maximum {}",
                self.grid.row_length,
                MAX_ROW_LENGTH
            );
        }

        if !self.heights.min.is_finite() || !self.heights.max.is_finite() {
            bail!("heights bounds must be finite");
        }
        if self.heights.min <= 0.0 {
            bail!("heights.min must be strictly positive to avoid zero-height geometry");
        }
        if self.heights.min >= self.heights.max {
            bail!(
                "heights.min ({}) must be below heights.max ({})",
                self.heights.min,
                self.heights.max
            );
        }

        if !(0.0..1.0).contains(&self.animation.max_delay) {
            bail!(
                "animation.max_delay ({}) must be in [0, 1): the stagger rescale divides by 1 - max_delay",
                self.animation.max_delay
            );
        }
        if !self.animation.time_factor.is_finite() || self.animation.time_factor <= 0.0 {
            bail!(
                "animation.time_factor ({}) must be a positive finite number",
                self.animation.time_factor
            );
        }

        if !self.camera.distance.is_finite() || self.camera.distance <= 0.0 {
            bail!("camera.distance must be positive");
        }

        if self.output.resolution.width == 0 || self.output.resolution.height == 0 {
            bail!(
                "output.resolution must be non-zero, got {}x{}",
                self.output.resolution.width,
                self.output.resolution.height
            );
        }
        if self.output.fps == 0 {
            bail!("output.fps must be at least 1");
        }

        Ok(())
    }
}

const MAX_ROW_LENGTH: u32 = 512;

fn default_seed() -> u64 {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    #[serde(default = "default_row_length")]
    pub row_length: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_length: default_row_length(),
        }
    }
}

fn default_row_length() -> u32 {
    55
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightRange {
    #[serde(default = "default_min_height")]
    pub min: f32,
    #[serde(default = "default_max_height")]
    pub max: f32,
}

impl Default for HeightRange {
    fn default() -> Self {
        Self {
            min: default_min_height(),
            max: default_max_height(),
        }
    }
}

fn default_min_height() -> f32 {
    0.001
}

fn default_max_height() -> f32 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Largest stagger delay as a fraction of the eased-progress interval.
    #[serde(default = "default_max_delay")]
    pub max_delay: f32,
    /// Seconds-to-progress scale: 0.5 means a transition spans two seconds.
    #[serde(default = "default_time_factor")]
    pub time_factor: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_delay: default_max_delay(),
            time_factor: default_time_factor(),
        }
    }
}

fn default_max_delay() -> f32 {
    0.6
}

fn default_time_factor() -> f32 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    #[serde(default = "default_camera_distance")]
    pub distance: f32,
    #[serde(default = "default_camera_pitch")]
    pub pitch_degrees: f32,
    #[serde(default)]
    pub yaw_degrees: f32,
    /// Auto-orbit applied once per frame; 0 disables the drift.
    #[serde(default = "default_orbit_rate")]
    pub orbit_degrees_per_frame: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: default_camera_distance(),
            pitch_degrees: default_camera_pitch(),
            yaw_degrees: 0.0,
            orbit_degrees_per_frame: default_orbit_rate(),
        }
    }
}

fn default_camera_distance() -> f32 {
    70.0
}

fn default_camera_pitch() -> f32 {
    40.0
}

fn default_orbit_rate() -> f32 {
    0.04
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            fps: default_fps(),
        }
    }
}

fn default_fps() -> u32 {
    60
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;

    #[test]
    fn defaults_validate_and_match_the_reference_field() {
        let scene = Scene::default();
        scene.validate().expect("defaults should validate");
        assert_eq!(scene.grid.row_length, 55);
        assert_eq!(scene.cell_count(), 3025);
        assert_eq!(scene.animation.max_delay, 0.6);
        assert_eq!(scene.animation.time_factor, 0.5);
        assert_eq!(scene.heights.min, 0.001);
        assert_eq!(scene.heights.max, 5.0);
    }

    #[test]
    fn rejects_zero_row_length() {
        let mut scene = Scene::default();
        scene.grid.row_length = 0;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn rejects_max_delay_of_one_or_more() {
        let mut scene = Scene::default();
        scene.animation.max_delay = 1.0;
        let error = scene.validate().unwrap_err();
        assert!(error.to_string().contains("max_delay"));

        scene.animation.max_delay = 1.5;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_height_floor() {
        let mut scene = Scene::default();
        scene.heights.min = 0.0;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn rejects_inverted_height_range() {
        let mut scene = Scene::default();
        scene.heights.min = 6.0;
        scene.heights.max = 5.0;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_time_factor() {
        let mut scene = Scene::default();
        scene.animation.time_factor = 0.0;
        assert!(scene.validate().is_err());
        scene.animation.time_factor = -0.5;
        assert!(scene.validate().is_err());
    }
}
