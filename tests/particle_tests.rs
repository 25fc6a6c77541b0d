// Host-side tests for the pure particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;

#[test]
fn count_scales_with_area() {
    // 480000 / 80000 = 6, floored below the minimum
    assert_eq!(particle_count(800.0, 600.0), 30);
    // 3000000 / 80000 = 37.5, floored to 37
    assert_eq!(particle_count(2000.0, 1500.0), 37);
}

#[test]
fn count_never_drops_below_minimum() {
    assert_eq!(particle_count(1.0, 1.0), MIN_PARTICLES);
    assert_eq!(particle_count(320.0, 480.0), MIN_PARTICLES);
}

#[test]
fn new_field_spawns_within_bounds_and_ranges() {
    let field = ParticleField::new(800.0, 600.0, 7);
    assert_eq!(field.particles.len(), 30);
    for p in &field.particles {
        assert!(p.x >= 0.0 && p.x < 800.0);
        assert!(p.y >= 0.0 && p.y < 600.0);
        assert!(RADIUS_RANGE.contains(&p.radius));
        assert!(VELOCITY_RANGE.contains(&p.vx));
        assert!(VELOCITY_RANGE.contains(&p.vy));
        assert!(OPACITY_RANGE.contains(&p.opacity));
    }
}

#[test]
fn same_seed_yields_same_field() {
    let a = ParticleField::new(800.0, 600.0, 42);
    let b = ParticleField::new(800.0, 600.0, 42);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn step_moves_by_velocity_without_touching_it() {
    let mut field = ParticleField::new(800.0, 600.0, 11);
    field.particles[0] = Particle {
        x: 100.0,
        y: 200.0,
        radius: 1.0,
        vx: 0.1,
        vy: -0.2,
        opacity: 0.5,
    };
    field.step();
    let p = field.particles[0];
    assert!((p.x - 100.1).abs() < 1e-4);
    assert!((p.y - 199.8).abs() < 1e-4);
    assert_eq!(p.vx, 0.1);
    assert_eq!(p.vy, -0.2);
}

#[test]
fn far_out_of_bounds_reflects_velocity() {
    let mut field = ParticleField::new(800.0, 600.0, 3);
    field.particles[0] = Particle {
        x: -15.0,
        y: 300.0,
        radius: 1.0,
        vx: 0.2,
        vy: 0.0,
        opacity: 0.3,
    };
    field.step();
    assert_eq!(field.particles[0].vx, -0.2);
}

#[test]
fn reflection_does_not_clamp_position() {
    let mut field = ParticleField::new(800.0, 600.0, 3);
    field.particles[0] = Particle {
        x: -15.0,
        y: 300.0,
        radius: 1.0,
        vx: 0.2,
        vy: 0.0,
        opacity: 0.3,
    };
    field.step();
    // Moved by the old velocity, still outside the canvas.
    assert!((field.particles[0].x + 14.8).abs() < 1e-4);
}

#[test]
fn inside_the_margin_keeps_velocity() {
    // -5 is past the edge but within the 10-unit margin.
    let mut field = ParticleField::new(800.0, 600.0, 3);
    field.particles[0] = Particle {
        x: -5.0,
        y: 300.0,
        radius: 1.0,
        vx: -0.2,
        vy: 0.0,
        opacity: 0.3,
    };
    field.step();
    assert_eq!(field.particles[0].vx, -0.2);
}

#[test]
fn vertical_bounds_reflect_too() {
    let mut field = ParticleField::new(800.0, 600.0, 3);
    field.particles[0] = Particle {
        x: 400.0,
        y: 615.0,
        radius: 1.0,
        vx: 0.0,
        vy: 0.1,
        opacity: 0.3,
    };
    field.step();
    assert_eq!(field.particles[0].vy, -0.1);
}

#[test]
fn reseed_rebuilds_for_new_bounds() {
    let mut field = ParticleField::new(800.0, 600.0, 5);
    field.reseed(2000.0, 1500.0);
    assert_eq!(field.width, 2000.0);
    assert_eq!(field.height, 1500.0);
    assert_eq!(field.particles.len(), 37);
    for p in &field.particles {
        assert!(p.x >= 0.0 && p.x < 2000.0);
        assert!(p.y >= 0.0 && p.y < 1500.0);
    }
}

#[test]
fn reseed_replaces_every_particle() {
    let mut field = ParticleField::new(800.0, 600.0, 5);
    let before = field.particles.clone();
    field.reseed(800.0, 600.0);
    assert_eq!(field.particles.len(), before.len());
    assert_ne!(field.particles, before);
}
