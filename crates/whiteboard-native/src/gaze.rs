// Gaze source selection for the desktop host.
//
// A desktop has no face tracker, so gaze is either reported as unsupported or
// simulated on its own thread, the way a face-tracking callback would arrive
// off the render thread.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec3;
use whiteboard_core::{GazeSmoothing, SharedSession, DEFAULT_GAZE_SMOOTHING_ALPHA};

pub const GAZE_ENV_VAR: &str = "WHITEBOARD_GAZE";

const SWEEP_AMPLITUDE: f32 = 0.3;
const SWEEP_RAD_PER_SEC: f32 = 0.5;
const SAMPLE_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GazeMode {
    #[default]
    Off,
    Snap,
    Smooth,
}

impl GazeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" | "" => Some(Self::Off),
            "snap" => Some(Self::Snap),
            "smooth" => Some(Self::Smooth),
            _ => None,
        }
    }

    /// Read `WHITEBOARD_GAZE`; unset or unrecognised values fall back to `Off`.
    pub fn from_env() -> Self {
        match std::env::var(GAZE_ENV_VAR) {
            Ok(v) => Self::parse(&v).unwrap_or_else(|| {
                log::warn!("{GAZE_ENV_VAR}={v:?} not recognised (off|snap|smooth); gaze off");
                Self::Off
            }),
            Err(_) => Self::Off,
        }
    }

    pub fn smoothing(self) -> GazeSmoothing {
        match self {
            Self::Smooth => GazeSmoothing::Exponential {
                alpha: DEFAULT_GAZE_SMOOTHING_ALPHA,
            },
            Self::Off | Self::Snap => GazeSmoothing::Snap,
        }
    }
}

/// Look-at target of the simulated viewer `t` seconds in: a slow sideways sweep.
#[inline]
pub fn simulated_target(t: f32) -> Vec3 {
    Vec3::new(SWEEP_AMPLITUDE * (t * SWEEP_RAD_PER_SEC).sin(), 0.0, -1.0)
}

pub fn spawn_simulated_gaze(session: SharedSession) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("gaze-sim".into())
        .spawn(move || {
            let start = Instant::now();
            loop {
                let target = simulated_target(start.elapsed().as_secs_f32());
                session.with(|s| s.on_gaze_update(target));
                thread::sleep(SAMPLE_INTERVAL);
            }
        })
}
