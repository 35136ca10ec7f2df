// Mouse and keyboard stand-ins for the hand tracker and the UI buttons.
//
// The pointer plays the role of the index fingertip: its window position,
// normalised to [0, 1] with Y down, is reported once per frame tick.

use std::time::{Duration, Instant};

use glam::Vec2;
use whiteboard_core::{HandFrame, HandObservation};

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(350);

/// Normalise a pixel position against the window size. `None` outside the window.
#[inline]
pub fn normalized_pointer(x: f64, y: f64, width: u32, height: u32) -> Option<Vec2> {
    if width == 0 || height == 0 {
        return None;
    }
    let u = (x / width as f64) as f32;
    let v = (y / height as f64) as f32;
    ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some(Vec2::new(u, v))
}

/// Palette slot for the number keys `1`..`4`.
#[inline]
pub fn palette_index_for_key(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        _ => None,
    }
}

#[inline]
pub fn is_clear_key(key: &str) -> bool {
    matches!(key, "c" | "C")
}

/// Turns pointer movement into numbered per-frame hand observations.
#[derive(Debug, Default)]
pub struct PointerLandmarks {
    pointer: Option<Vec2>,
    frame: u64,
    last_press: Option<Instant>,
}

impl PointerLandmarks {
    pub fn pointer_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        self.pointer = normalized_pointer(x, y, width, height);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Observation for the next frame tick; no hands while the pointer is away.
    pub fn next_frame(&mut self) -> HandFrame {
        self.frame += 1;
        match self.pointer {
            Some(p) => HandFrame::single(
                self.frame,
                HandObservation {
                    index_tip: Some(p),
                },
            ),
            None => HandFrame::empty(self.frame),
        }
    }

    /// Record a button press; true when it completes a double click.
    pub fn register_press(&mut self, now: Instant) -> bool {
        let double = self
            .last_press
            .is_some_and(|prev| now.duration_since(prev) <= DOUBLE_CLICK_WINDOW);
        // A double click consumes both presses
        self.last_press = if double { None } else { Some(now) };
        double
    }
}
