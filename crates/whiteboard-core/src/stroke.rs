//! Turning fingertip samples into line segments.

use glam::Vec2;

use crate::color::Color;
use crate::gesture::GestureState;
use crate::mapping::SurfaceMapper;

/// One rendered line primitive in surface-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

impl StrokeSegment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// True when `next` continues this segment's stroke.
    #[inline]
    pub fn connects_to(&self, next: &StrokeSegment) -> bool {
        self.to == next.from
    }
}

/// Last mapped point of the stroke in progress, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackingCursor {
    pub last_point: Option<Vec2>,
}

impl TrackingCursor {
    /// Break the current stroke; the next accepted point anchors a new one.
    #[inline]
    pub fn reset(&mut self) {
        self.last_point = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.last_point.is_some()
    }
}

/// Ordered reducer over the fingertip stream.
///
/// Holds no stroke state of its own: the cursor and gesture state are owned by
/// the session and passed in on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeBuilder {
    mapper: SurfaceMapper,
}

impl StrokeBuilder {
    pub fn new(mapper: SurfaceMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &SurfaceMapper {
        &self.mapper
    }

    /// Feed one fingertip sample.
    ///
    /// Outside `Drawing`, or for a sample with a non-finite coordinate, this is a
    /// no-op and leaves `cursor` untouched. Otherwise the sample becomes the new
    /// cursor and, if a previous point existed, the segment joining them is
    /// returned.
    pub fn on_observation(
        &self,
        gesture: GestureState,
        cursor: &mut TrackingCursor,
        raw_point: Vec2,
        color: Color,
    ) -> Option<StrokeSegment> {
        if gesture != GestureState::Drawing {
            return None;
        }
        if !raw_point.is_finite() {
            log::debug!("[stroke] skipping non-finite fingertip {:?}", raw_point);
            return None;
        }
        let current = self.mapper.map(raw_point);
        let segment = cursor.last_point.map(|from| StrokeSegment {
            from,
            to: current,
            color,
        });
        cursor.last_point = Some(current);
        segment
    }
}
