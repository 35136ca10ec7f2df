//! The drawing surface: segments, ink colour and world position.
//!
//! `SurfaceController` is the only writer of [`DrawingSurfaceState`]. Once a
//! renderer has subscribed, every mutation is also queued as a [`SurfaceEvent`]
//! so it can mirror the surface incrementally instead of rebuilding it each
//! frame.

use glam::Vec3;

use crate::color::Color;
use crate::stroke::{StrokeSegment, TrackingCursor};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawingSurfaceState {
    /// Append-only, except for [`SurfaceController::clear`].
    pub segments: Vec<StrokeSegment>,
    pub active_color: Color,
    pub position: Vec3,
}

/// Change notification for the renderer collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    SegmentAppended(StrokeSegment),
    Cleared,
    ColorChanged(Color),
    Moved(Vec3),
}

#[derive(Clone, Debug)]
pub struct SurfaceController {
    state: DrawingSurfaceState,
    // Index of the first segment of every stroke, ascending
    stroke_starts: Vec<usize>,
    stroke_open: bool,
    subscribed: bool,
    pending: Vec<SurfaceEvent>,
}

impl SurfaceController {
    pub fn new(active_color: Color, position: Vec3) -> Self {
        Self {
            state: DrawingSurfaceState {
                segments: Vec::new(),
                active_color,
                position,
            },
            stroke_starts: Vec::new(),
            stroke_open: false,
            subscribed: false,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &DrawingSurfaceState {
        &self.state
    }

    pub fn segments(&self) -> &[StrokeSegment] {
        &self.state.segments
    }

    pub fn active_color(&self) -> Color {
        self.state.active_color
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Append to the open stroke, or start a new one after [`Self::break_stroke`].
    pub fn append_segment(&mut self, segment: StrokeSegment) {
        if !self.stroke_open {
            self.stroke_starts.push(self.state.segments.len());
            self.stroke_open = true;
        }
        self.state.segments.push(segment);
        self.emit(SurfaceEvent::SegmentAppended(segment));
    }

    /// End the stroke in progress; the next appended segment starts a new one
    /// even if it begins where the last one ended.
    pub fn break_stroke(&mut self) {
        self.stroke_open = false;
    }

    /// Remove all segments and break the stroke in progress.
    pub fn clear(&mut self, cursor: &mut TrackingCursor) {
        let removed = self.state.segments.len();
        self.state.segments.clear();
        self.stroke_starts.clear();
        self.stroke_open = false;
        cursor.reset();
        self.emit(SurfaceEvent::Cleared);
        log::info!("[surface] cleared {} segments", removed);
    }

    /// Only affects segments emitted after this call.
    pub fn set_color(&mut self, color: Color) {
        if self.state.active_color == color {
            return;
        }
        self.state.active_color = color;
        self.emit(SurfaceEvent::ColorChanged(color));
        log::info!("[surface] colour {}", color);
    }

    pub fn update_position(&mut self, position: Vec3) {
        if self.state.position == position {
            return;
        }
        self.state.position = position;
        self.emit(SurfaceEvent::Moved(position));
    }

    /// Start queueing change notifications. Changes made before subscribing are
    /// not replayed; read [`Self::segments`] for the current picture.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Move queued change notifications into `out`, oldest first.
    ///
    /// A subscriber must drain regularly: the queue holds every change since the
    /// last drain.
    pub fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        out.append(&mut self.pending);
    }

    fn emit(&mut self, event: SurfaceEvent) {
        if self.subscribed {
            self.pending.push(event);
        }
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Group the segment list into strokes. A stroke ends at every recorded
    /// break and wherever consecutive segments do not join.
    pub fn strokes(&self) -> Vec<&[StrokeSegment]> {
        let segments = &self.state.segments;
        let mut out = Vec::new();
        let mut start = 0;
        for i in 1..segments.len() {
            let broken = self.stroke_starts.binary_search(&i).is_ok();
            if broken || !segments[i - 1].connects_to(&segments[i]) {
                out.push(&segments[start..i]);
                start = i;
            }
        }
        if start < segments.len() {
            out.push(&segments[start..]);
        }
        out
    }
}
