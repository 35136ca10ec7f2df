use std::fmt;

use thiserror::Error;

/// Rejected session configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("surface size must be finite and positive, got {width} x {height}")]
    InvalidSurfaceSize { width: f32, height: f32 },

    #[error("gaze smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),

    #[error("initial surface position must be finite, got {0:?}")]
    InvalidPosition([f32; 3]),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unknown colour name `{0}`")]
    UnknownName(String),

    #[error("invalid hex colour `{0}` (expected #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
}

/// Non-fatal conditions reported to the host once; the session keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// The device cannot track gaze; the surface stays where it was placed.
    GazeUnsupported,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::GazeUnsupported => {
                f.write_str("gaze tracking is not supported on this device; surface will not follow gaze")
            }
        }
    }
}
