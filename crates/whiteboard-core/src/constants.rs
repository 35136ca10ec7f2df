use glam::Vec3;

use crate::color::Color;

// Shared surface/interaction tuning constants used by the engine and the hosts.

// Surface geometry (arbitrary linear units; the surface is twice as wide as tall)
pub const SURFACE_WIDTH: f32 = 1.0;
pub const SURFACE_HEIGHT: f32 = 0.5;

// Surface placement: half a unit in front of the viewer
pub const DEFAULT_SURFACE_POSITION: [f32; 3] = [0.0, 0.0, -0.5];

// Ink
pub const DEFAULT_COLOR: Color = Color::RED;
pub const SURFACE_COLOR: Color = Color::WHITE;

// Palette offered by the UI collaborator, in button order
pub const DEFAULT_PALETTE: [Color; 4] = [Color::RED, Color::BLUE, Color::GREEN, Color::BLACK];

// Gaze following
pub const DEFAULT_GAZE_SMOOTHING_ALPHA: f32 = 0.25; // used only when smoothing is enabled

#[inline]
pub fn default_surface_position() -> Vec3 {
    Vec3::from(DEFAULT_SURFACE_POSITION)
}
