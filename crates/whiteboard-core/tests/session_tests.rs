// Host-side integration tests for the whiteboard session: gesture gating,
// clear/colour semantics, frame handling and gaze placement end to end.

use glam::{Vec2, Vec3};
use std::thread;
use whiteboard_core::*;

fn make_session() -> WhiteboardSession {
    WhiteboardSession::new(SessionConfig::default()).unwrap()
}

fn feed(session: &mut WhiteboardSession, pts: &[(f32, f32)]) {
    for &(x, y) in pts {
        session.on_observation(Vec2::new(x, y));
    }
}

#[test]
fn horizontal_line_end_to_end() {
    let mut s = make_session();
    assert_eq!(s.gesture_state(), GestureState::Idle);
    assert!(s.segments().is_empty());

    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.5, 0.5), (0.6, 0.5), (0.7, 0.5)]);
    s.on_gesture(GestureEvent::Ended);

    let segs = s.segments();
    assert_eq!(segs.len(), 2);
    for seg in segs {
        assert_eq!(seg.color, DEFAULT_COLOR);
        assert_eq!(seg.from.y, 0.0);
        assert_eq!(seg.to.y, 0.0);
        assert!(seg.to.x > seg.from.x);
    }
    assert!(segs[0].connects_to(&segs[1]));
    assert_eq!(s.surface().strokes().len(), 1);
    assert_eq!(s.cursor().last_point, None);
}

#[test]
fn observations_while_idle_draw_nothing() {
    let mut s = make_session();
    feed(&mut s, &[(0.1, 0.1), (0.2, 0.2), (0.3, 0.3)]);
    assert!(s.segments().is_empty());
    assert!(!s.cursor().is_tracking());
}

#[test]
fn regrip_starts_a_fresh_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.2, 0.2)]);
    s.on_gesture(GestureEvent::Ended);
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.8, 0.8)]);
    assert_eq!(s.segments().len(), 0);

    // The second grip's stroke continues normally from its own anchor
    feed(&mut s, &[(0.9, 0.8)]);
    assert_eq!(s.segments().len(), 1);
    assert_eq!(s.segments()[0].from, map_to_surface(Vec2::new(0.8, 0.8)));
}

#[test]
fn clear_empties_surface_and_breaks_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5), (0.3, 0.5)]);
    assert_eq!(s.segments().len(), 2);

    s.clear();
    assert_eq!(s.segments().len(), 0);

    // Still pinching: the next point anchors a new stroke instead of joining (0.3, 0.5)
    feed(&mut s, &[(0.6, 0.6)]);
    assert_eq!(s.segments().len(), 0);
    feed(&mut s, &[(0.7, 0.6)]);
    assert_eq!(s.segments().len(), 1);
    assert_eq!(s.segments()[0].from, map_to_surface(Vec2::new(0.6, 0.6)));
}

#[test]
fn colour_change_mid_stroke_only_affects_later_segments() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5)]);
    s.set_color(Color::BLUE);
    feed(&mut s, &[(0.3, 0.5)]);

    let segs = s.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].color, Color::RED);
    assert_eq!(segs[1].color, Color::BLUE);
    // Still one continuous, multi-coloured stroke
    assert_eq!(s.surface().strokes().len(), 1);
}

#[test]
fn gaze_moves_only_surface_x() {
    let mut s = make_session();
    let before = s.surface().position();
    let after = s.on_gaze_update(Vec3::new(0.3, 9.0, 9.0));
    assert_eq!(after.x, 0.3);
    assert_eq!(after.y, before.y);
    assert_eq!(after.z, before.z);
    assert_eq!(s.surface().position(), after);
}

#[test]
fn gaze_does_not_disturb_stroke_in_progress() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5)]);
    s.on_gaze_update(Vec3::new(-0.2, 0.0, 0.0));
    feed(&mut s, &[(0.2, 0.5)]);
    assert_eq!(s.segments().len(), 1);
}

#[test]
fn unsupported_gaze_reports_once_and_degrades() {
    let mut s = make_session();
    s.set_gaze_support(GazeSupport::Unsupported);
    s.set_gaze_support(GazeSupport::Unsupported);
    assert_eq!(s.diagnostics(), &[Diagnostic::GazeUnsupported]);

    let before = s.surface().position();
    assert_eq!(s.on_gaze_update(Vec3::new(0.5, 0.0, 0.0)), before);

    // Drawing is unaffected
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5)]);
    assert_eq!(s.segments().len(), 1);
}

#[test]
fn frames_without_fingertip_do_not_break_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    assert!(s.on_frame(&HandFrame::single(1, HandObservation::with_tip(0.1, 0.5))).is_none());
    assert!(s.on_frame(&HandFrame::empty(2)).is_none());
    assert!(s
        .on_frame(&HandFrame::single(3, HandObservation { index_tip: None }))
        .is_none());
    let seg = s
        .on_frame(&HandFrame::single(4, HandObservation::with_tip(0.2, 0.5)))
        .unwrap();
    assert_eq!(seg.from, map_to_surface(Vec2::new(0.1, 0.5)));
    assert_eq!(s.segments().len(), 1);
}

#[test]
fn non_finite_fingertip_is_skipped_without_breaking_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(
        &mut s,
        &[(0.1, 0.5), (f32::NAN, 0.5), (0.3, f32::INFINITY), (0.3, 0.5)],
    );
    assert_eq!(s.segments().len(), 1);
    let seg = s.segments()[0];
    assert!(seg.from.is_finite() && seg.to.is_finite());
    assert_eq!(seg.from, map_to_surface(Vec2::new(0.1, 0.5)));
    assert_eq!(seg.to, map_to_surface(Vec2::new(0.3, 0.5)));

    assert!(s
        .on_frame(&HandFrame::single(1, HandObservation::with_tip(f32::NAN, 0.2)))
        .is_none());
    assert_eq!(s.cursor().last_point, Some(map_to_surface(Vec2::new(0.3, 0.5))));
}

#[test]
fn regrip_at_the_same_spot_is_a_separate_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5)]);
    s.on_gesture(GestureEvent::Ended);
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.2, 0.5), (0.2, 0.7)]);

    assert_eq!(s.segments().len(), 2);
    // Geometrically continuous, but two pinches
    assert!(s.segments()[0].connects_to(&s.segments()[1]));
    assert_eq!(s.surface().strokes().len(), 2);
}

#[test]
fn repeated_begin_does_not_split_stroke() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5)]);
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.3, 0.5)]);
    assert_eq!(s.surface().strokes().len(), 1);
}

#[test]
fn out_of_order_frames_are_dropped() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    s.on_frame(&HandFrame::single(5, HandObservation::with_tip(0.1, 0.5)));
    assert!(s
        .on_frame(&HandFrame::single(4, HandObservation::with_tip(0.9, 0.9)))
        .is_none());
    assert!(s
        .on_frame(&HandFrame::single(5, HandObservation::with_tip(0.9, 0.9)))
        .is_none());
    assert_eq!(s.cursor().last_point, Some(map_to_surface(Vec2::new(0.1, 0.5))));
}

#[test]
fn only_first_hand_is_tracked() {
    let mut s = make_session();
    s.on_gesture(GestureEvent::Began);
    let mut frame = HandFrame::single(1, HandObservation::with_tip(0.2, 0.5));
    frame.hands.push(HandObservation::with_tip(0.9, 0.1));
    s.on_frame(&frame);
    assert_eq!(s.cursor().last_point, Some(map_to_surface(Vec2::new(0.2, 0.5))));
}

#[test]
fn drained_events_mirror_session_activity() {
    let mut s = make_session();
    s.subscribe_events();
    s.on_gesture(GestureEvent::Began);
    feed(&mut s, &[(0.1, 0.5), (0.2, 0.5)]);
    s.set_color(Color::BLACK);
    s.clear();

    let mut events = Vec::new();
    s.drain_events(&mut events);
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], SurfaceEvent::SegmentAppended(_)));
    assert_eq!(events[1], SurfaceEvent::ColorChanged(Color::BLACK));
    assert_eq!(events[2], SurfaceEvent::Cleared);
}

#[test]
fn shared_session_serialises_gaze_and_landmark_threads() {
    let shared = SharedSession::new(make_session());
    shared.with(|s| s.on_gesture(GestureEvent::Began));

    let gaze = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..100 {
                shared.with(|s| s.on_gaze_update(Vec3::new(i as f32 * 0.01, 0.0, 0.0)));
            }
        })
    };
    for i in 0..=100 {
        shared.with(|s| s.on_observation(Vec2::new(i as f32 * 0.01, 0.5)));
    }
    gaze.join().unwrap();

    shared.with(|s| {
        assert_eq!(s.segments().len(), 100);
        assert_eq!(s.surface().strokes().len(), 1);
        assert!((s.surface().position().x - 0.99).abs() < 1e-6);
        assert_eq!(s.surface().position().z, default_surface_position().z);
    });
}
