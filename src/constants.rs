// Canvas layout and grid tuning for the background renderer.

// Canvas height tracks the viewport but never collapses below this.
pub const CANVAS_MIN_HEIGHT: f32 = 420.0;
// Fraction of the viewport height the canvas occupies.
pub const CANVAS_VIEWPORT_FRACTION: f32 = 0.6;

// Spacing of the faint background grid, in canvas units.
pub const GRID_SPACING: f32 = 60.0;

#[inline]
pub fn canvas_height_for_viewport(viewport_height: f32) -> f32 {
    (viewport_height * CANVAS_VIEWPORT_FRACTION).max(CANVAS_MIN_HEIGHT)
}
