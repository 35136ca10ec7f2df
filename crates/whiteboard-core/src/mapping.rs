//! Sensor space to surface space.
//!
//! Landmark sources report points normalised to \[0, 1\] x \[0, 1\] with Y growing
//! downward. The surface frame has its origin at the surface centre and Y growing
//! upward, scaled by the surface's physical size. Every caller goes through
//! [`SurfaceMapper::map`] so the transform exists in exactly one place.

use glam::{Vec2, Vec3};

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMapper {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceMapper {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl SurfaceMapper {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a normalised sensor point into surface-local coordinates.
    #[inline]
    pub fn map(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - 0.5) * self.width,
            (0.5 - point.y) * self.height, // input Y grows down, surface Y grows up
        )
    }

    /// Place a surface-local point in world space for a surface centred at `position`.
    #[inline]
    pub fn local_to_world(&self, local: Vec2, position: Vec3) -> Vec3 {
        position + local.extend(0.0)
    }

    /// World-space corners of the surface rectangle, counter-clockwise from bottom-left.
    pub fn corners(&self, position: Vec3) -> [Vec3; 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [
            self.local_to_world(Vec2::new(-hw, -hh), position),
            self.local_to_world(Vec2::new(hw, -hh), position),
            self.local_to_world(Vec2::new(hw, hh), position),
            self.local_to_world(Vec2::new(-hw, hh), position),
        ]
    }
}

/// [`SurfaceMapper::map`] for the default surface size.
#[inline]
pub fn map_to_surface(point: Vec2) -> Vec2 {
    SurfaceMapper::default().map(point)
}
