//! Gesture-to-stroke drawing engine for a whiteboard floating in 3D space.
//!
//! Platform-free: hosts feed fingertip, pinch and gaze observations into a
//! [`WhiteboardSession`] and render whatever [`SurfaceEvent`]s come out.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gaze;
pub mod gesture;
pub mod mapping;
pub mod observation;
pub mod session;
pub mod stroke;
pub mod surface;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gaze::*;
pub use gesture::*;
pub use mapping::*;
pub use observation::*;
pub use session::*;
pub use stroke::*;
pub use surface::*;
