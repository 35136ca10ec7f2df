//! Per-frame landmark observations as delivered by the hand tracker.

use glam::Vec2;
use smallvec::SmallVec;

/// One detected hand. `index_tip` is `None` when the detector found the hand
/// but could not resolve the index fingertip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandObservation {
    pub index_tip: Option<Vec2>,
}

impl HandObservation {
    pub fn with_tip(x: f32, y: f32) -> Self {
        Self {
            index_tip: Some(Vec2::new(x, y)),
        }
    }
}

/// All hands detected in one camera frame. `frame` increases monotonically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub frame: u64,
    pub hands: SmallVec<[HandObservation; 2]>,
}

impl HandFrame {
    pub fn empty(frame: u64) -> Self {
        Self {
            frame,
            hands: SmallVec::new(),
        }
    }

    pub fn single(frame: u64, hand: HandObservation) -> Self {
        let mut hands = SmallVec::new();
        hands.push(hand);
        Self { frame, hands }
    }

    /// Fingertip of the first hand, if it has one. Further hands are ignored.
    pub fn primary_tip(&self) -> Option<Vec2> {
        self.hands.first().and_then(|h| h.index_tip)
    }
}

/// Rejects frames that arrive out of order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSequencer {
    last: Option<u64>,
}

impl FrameSequencer {
    /// Returns false (and leaves state unchanged) for a frame at or before the
    /// last accepted one.
    pub fn accept(&mut self, frame: u64) -> bool {
        match self.last {
            Some(last) if frame <= last => false,
            _ => {
                self.last = Some(frame);
                true
            }
        }
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.last
    }
}
