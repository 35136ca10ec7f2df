use glam::Vec3;

use crate::color::Color;
use crate::constants::{default_surface_position, DEFAULT_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::ConfigError;
use crate::gaze::GazeSmoothing;
use crate::mapping::SurfaceMapper;

/// Session start-up parameters. `Default` reproduces the stock whiteboard.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub initial_position: Vec3,
    pub initial_color: Color,
    pub gaze_smoothing: GazeSmoothing,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            initial_position: default_surface_position(),
            initial_color: DEFAULT_COLOR,
            gaze_smoothing: GazeSmoothing::Snap,
        }
    }
}

impl SessionConfig {
    pub fn with_surface_size(mut self, width: f32, height: f32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    pub fn with_initial_position(mut self, position: Vec3) -> Self {
        self.initial_position = position;
        self
    }

    pub fn with_initial_color(mut self, color: Color) -> Self {
        self.initial_color = color;
        self
    }

    pub fn with_gaze_smoothing(mut self, smoothing: GazeSmoothing) -> Self {
        self.gaze_smoothing = smoothing;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.surface_width) || !positive(self.surface_height) {
            return Err(ConfigError::InvalidSurfaceSize {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if !self.initial_position.is_finite() {
            return Err(ConfigError::InvalidPosition(self.initial_position.to_array()));
        }
        if let GazeSmoothing::Exponential { alpha } = self.gaze_smoothing {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ConfigError::InvalidSmoothing(alpha));
            }
        }
        Ok(())
    }

    pub fn mapper(&self) -> SurfaceMapper {
        SurfaceMapper::new(self.surface_width, self.surface_height)
    }
}
