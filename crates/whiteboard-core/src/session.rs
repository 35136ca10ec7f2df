//! Top-level owner of all whiteboard state.
//!
//! The host delivers discrete events (`on_gesture`, `on_frame`/`on_observation`,
//! `on_gaze_update`, `set_color`, `clear`) and each one runs to completion
//! before the next. The session never initiates I/O.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::{Vec2, Vec3};

use crate::color::Color;
use crate::config::SessionConfig;
use crate::error::{ConfigError, Diagnostic};
use crate::gaze::{GazeFollower, GazeSupport};
use crate::gesture::{GestureEvent, GestureState, GestureStateMachine};
use crate::observation::{FrameSequencer, HandFrame};
use crate::stroke::{StrokeBuilder, StrokeSegment, TrackingCursor};
use crate::surface::{SurfaceController, SurfaceEvent};

pub struct WhiteboardSession {
    surface: SurfaceController,
    gesture: GestureStateMachine,
    cursor: TrackingCursor,
    builder: StrokeBuilder,
    gaze: GazeFollower,
    frames: FrameSequencer,
    diagnostics: Vec<Diagnostic>,
}

impl WhiteboardSession {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            surface: SurfaceController::new(config.initial_color, config.initial_position),
            gesture: GestureStateMachine::new(),
            cursor: TrackingCursor::default(),
            builder: StrokeBuilder::new(config.mapper()),
            gaze: GazeFollower::new(config.gaze_smoothing),
            frames: FrameSequencer::default(),
            diagnostics: Vec::new(),
        })
    }

    // ---------------- Queries ----------------

    pub fn surface(&self) -> &SurfaceController {
        &self.surface
    }

    pub fn segments(&self) -> &[StrokeSegment] {
        self.surface.segments()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn cursor(&self) -> TrackingCursor {
        self.cursor
    }

    pub fn builder(&self) -> &StrokeBuilder {
        &self.builder
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // ---------------- Host events ----------------

    /// Declare whether the host can track gaze. Call once at session start.
    /// `Unsupported` is recorded as a diagnostic and gaze updates become no-ops.
    pub fn set_gaze_support(&mut self, support: GazeSupport) {
        self.gaze.set_support(support);
        if support == GazeSupport::Unsupported {
            self.report(Diagnostic::GazeUnsupported);
        }
    }

    /// Leaving `Drawing` breaks the stroke on the surface together with the
    /// cursor, so a new pinch never extends the old stroke.
    pub fn on_gesture(&mut self, event: GestureEvent) -> GestureState {
        let was_drawing = self.gesture.is_drawing();
        let state = self.gesture.handle(event, &mut self.cursor);
        if was_drawing && state == GestureState::Idle {
            self.surface.break_stroke();
        }
        state
    }

    /// Process one camera frame. Stale frames, frames without hands and hands
    /// without a resolvable fingertip are skipped without breaking the stroke.
    pub fn on_frame(&mut self, frame: &HandFrame) -> Option<StrokeSegment> {
        if !self.frames.accept(frame.frame) {
            log::debug!(
                "[frame] dropping out-of-order frame {} (last {:?})",
                frame.frame,
                self.frames.last_frame()
            );
            return None;
        }
        let Some(tip) = frame.primary_tip() else {
            log::trace!("[frame] {} has no fingertip", frame.frame);
            return None;
        };
        self.on_observation(tip)
    }

    /// Process one fingertip sample (normalised sensor space). Any emitted
    /// segment is appended to the surface and returned.
    pub fn on_observation(&mut self, raw_point: Vec2) -> Option<StrokeSegment> {
        let segment = self.builder.on_observation(
            self.gesture.state(),
            &mut self.cursor,
            raw_point,
            self.surface.active_color(),
        )?;
        self.surface.append_segment(segment);
        Some(segment)
    }

    /// Returns the resulting surface position.
    pub fn on_gaze_update(&mut self, gaze_target: Vec3) -> Vec3 {
        let position = self.gaze.on_gaze_update(gaze_target, self.surface.position());
        self.surface.update_position(position);
        position
    }

    pub fn set_color(&mut self, color: Color) {
        self.surface.set_color(color);
    }

    pub fn clear(&mut self) {
        self.surface.clear(&mut self.cursor);
    }

    /// Start queueing [`SurfaceEvent`]s for a renderer. Without a subscriber
    /// nothing is queued.
    pub fn subscribe_events(&mut self) {
        self.surface.subscribe();
    }

    pub fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        self.surface.drain_events(out);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.contains(&diagnostic) {
            return;
        }
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// A session shared between host threads (e.g. camera and face-tracking
/// callbacks). All access is serialised through one lock.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<WhiteboardSession>>,
}

impl SharedSession {
    pub fn new(session: WhiteboardSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut WhiteboardSession) -> R) -> R {
        f(&mut self.lock())
    }

    /// A panic on another thread leaves the session in a consistent state
    /// (every operation is a single synchronous update), so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, WhiteboardSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
