//! Pinch-driven draw/no-draw state.

use crate::stroke::TrackingCursor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing,
}

/// Discrete pinch phases reported by the gesture input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    Began,
    Ended,
    /// Recogniser gave up mid-gesture; treated like `Ended`.
    Cancelled,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GestureStateMachine {
    state: GestureState,
}

impl GestureStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == GestureState::Drawing
    }

    /// Apply a pinch event. Leaving `Drawing` clears `cursor` in the same call,
    /// so a later pinch cannot join onto a point from the previous one.
    ///
    /// Returns the state after the event.
    pub fn handle(&mut self, event: GestureEvent, cursor: &mut TrackingCursor) -> GestureState {
        let next = match event {
            GestureEvent::Began => GestureState::Drawing,
            GestureEvent::Ended | GestureEvent::Cancelled => GestureState::Idle,
        };
        if self.state == GestureState::Drawing && next == GestureState::Idle {
            cursor.reset();
        }
        if self.state != next {
            log::debug!("[gesture] {:?} -> {:?} ({:?})", self.state, next, event);
        }
        self.state = next;
        next
    }

    /// Force `Idle`, clearing the cursor if a stroke was in progress.
    pub fn reset(&mut self, cursor: &mut TrackingCursor) {
        self.handle(GestureEvent::Cancelled, cursor);
    }
}
