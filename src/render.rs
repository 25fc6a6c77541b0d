//! 2D canvas painting for the particle background.

use crate::constants::GRID_SPACING;
use crate::core::{Palette, ParticleField};
use web_sys as web;

/// Repaint the whole canvas: gradient backdrop, faint grid, particles.
pub fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField, palette: &Palette) {
    let w = f64::from(field.width);
    let h = f64::from(field.height);
    ctx.clear_rect(0.0, 0.0, w, h);

    // Diagonal gradient, top-left to bottom-right.
    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
    let _ = gradient.add_color_stop(0.0, palette.bg_top);
    let _ = gradient.add_color_stop(1.0, palette.bg_bottom);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_grid(ctx, w, h, palette.grid);

    let [r, g, b] = palette.particle_rgb;
    for p in &field.particles {
        ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {:.2})", r, g, b, p.opacity));
        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(p.x),
            f64::from(p.y),
            f64::from(p.radius),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

fn draw_grid(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64, stroke: &str) {
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(1.0);
    let spacing = f64::from(GRID_SPACING);
    let mut x = 0.0;
    while x <= w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
        x += spacing;
    }
    let mut y = 0.0;
    while y <= h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        y += spacing;
    }
}
