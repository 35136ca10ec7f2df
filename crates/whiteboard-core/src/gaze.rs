//! Gaze-driven horizontal placement of the surface.
//!
//! Only X follows the gaze target; Y and Z keep whatever placement the surface
//! already has. The default policy snaps straight to the target. An optional
//! exponential moving average trades latency for stability.

use glam::Vec3;

/// Whether the host can deliver gaze samples at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GazeSupport {
    #[default]
    Available,
    Unsupported,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GazeSmoothing {
    /// Replace X with the target's X on every update.
    #[default]
    Snap,
    /// Move X a fraction `alpha` of the way to the target per update.
    /// `alpha` is in (0, 1]; 1 behaves like `Snap`.
    Exponential { alpha: f32 },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GazeFollower {
    smoothing: GazeSmoothing,
    support: GazeSupport,
    primed: bool,
}

impl GazeFollower {
    pub fn new(smoothing: GazeSmoothing) -> Self {
        Self {
            smoothing,
            support: GazeSupport::Available,
            primed: false,
        }
    }

    pub fn smoothing(&self) -> GazeSmoothing {
        self.smoothing
    }

    pub fn support(&self) -> GazeSupport {
        self.support
    }

    pub fn set_support(&mut self, support: GazeSupport) {
        self.support = support;
        self.primed = false;
    }

    /// Compute the surface position for a new gaze target.
    ///
    /// Returns `current` unchanged when gaze is unsupported or the target is
    /// not finite.
    pub fn on_gaze_update(&mut self, gaze_target: Vec3, current: Vec3) -> Vec3 {
        if self.support == GazeSupport::Unsupported {
            return current;
        }
        if !gaze_target.x.is_finite() {
            log::debug!("[gaze] ignoring non-finite target {:?}", gaze_target);
            return current;
        }
        let x = match self.smoothing {
            GazeSmoothing::Snap => gaze_target.x,
            GazeSmoothing::Exponential { alpha } if self.primed => {
                current.x + alpha * (gaze_target.x - current.x)
            }
            // First sample snaps so the surface does not crawl in from its start position.
            GazeSmoothing::Exponential { .. } => gaze_target.x,
        };
        self.primed = true;
        Vec3::new(x, current.y, current.z)
    }
}
