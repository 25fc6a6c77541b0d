// Host-side tests for layout constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_within_reasonable_bounds() {
    assert!(CANVAS_MIN_HEIGHT > 0.0);
    assert!(GRID_SPACING > 0.0);
    assert!(CANVAS_VIEWPORT_FRACTION > 0.0 && CANVAS_VIEWPORT_FRACTION < 1.0);
}

#[test]
fn canvas_height_tracks_tall_viewports() {
    assert_eq!(canvas_height_for_viewport(1000.0), 600.0);
    assert_eq!(canvas_height_for_viewport(2000.0), 1200.0);
}

#[test]
fn canvas_height_floors_on_short_viewports() {
    assert_eq!(canvas_height_for_viewport(500.0), 420.0);
    assert_eq!(canvas_height_for_viewport(0.0), 420.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_fits_inside_the_smallest_canvas() {
    assert!(GRID_SPACING < CANVAS_MIN_HEIGHT);
}
