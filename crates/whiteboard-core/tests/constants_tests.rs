// Host-side tests for the shared constants and their relationships.

use whiteboard_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn surface_dimensions_are_positive() {
    assert!(SURFACE_WIDTH > 0.0);
    assert!(SURFACE_HEIGHT > 0.0);
    // Landscape board, twice as wide as tall
    assert!((SURFACE_WIDTH / SURFACE_HEIGHT - 2.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_smoothing_is_a_valid_fraction() {
    assert!(DEFAULT_GAZE_SMOOTHING_ALPHA > 0.0 && DEFAULT_GAZE_SMOOTHING_ALPHA <= 1.0);
}

#[test]
fn surface_starts_in_front_of_viewer() {
    let p = default_surface_position();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    assert!(p.z < 0.0);
}

#[test]
fn palette_starts_with_default_ink_and_has_no_duplicates() {
    assert_eq!(DEFAULT_PALETTE[0], DEFAULT_COLOR);
    for (i, a) in DEFAULT_PALETTE.iter().enumerate() {
        for b in &DEFAULT_PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
    // Ink must be visible on the surface
    assert!(!DEFAULT_PALETTE.contains(&SURFACE_COLOR));
}
