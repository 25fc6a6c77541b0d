use rand::prelude::*;

// Field tuning. Count scales with canvas area so wide desktop viewports
// get more dots than phones; the floor keeps small screens from looking
// empty.
pub const AREA_PER_PARTICLE: f32 = 80_000.0;
pub const MIN_PARTICLES: usize = 30;

// How far past an edge a particle may drift before its velocity reflects.
pub const BOUNCE_MARGIN: f32 = 10.0;

// Spawn ranges (half-open, fed straight to gen_range).
pub const RADIUS_RANGE: std::ops::Range<f32> = 0.6..2.6;
pub const VELOCITY_RANGE: std::ops::Range<f32> = -0.25..0.25;
pub const OPACITY_RANGE: std::ops::Range<f32> = 0.2..0.65;

/// One drifting dot. Plain data; the field owns all behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub opacity: f32,
}

/// Number of particles for a canvas of the given pixel dimensions.
#[inline]
pub fn particle_count(width: f32, height: f32) -> usize {
    ((width * height / AREA_PER_PARTICLE).floor() as usize).max(MIN_PARTICLES)
}

/// The animated particle collection for one canvas.
///
/// Owns its RNG so a given construction seed yields a deterministic
/// sequence of fields across reseeds; the wasm boundary supplies the seed.
pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Drop every particle and rebuild the set for the given bounds.
    /// Used on resize and on theme change; nothing survives either event.
    pub fn reseed(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn populate(&mut self) {
        let count = particle_count(self.width, self.height);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                radius: rng.gen_range(RADIUS_RANGE),
                vx: rng.gen_range(VELOCITY_RANGE),
                vy: rng.gen_range(VELOCITY_RANGE),
                opacity: rng.gen_range(OPACITY_RANGE),
            })
            .collect();
    }

    /// Advance every particle one frame: linear motion, then edge
    /// reflection once the margin is exceeded. Velocity flips sign but the
    /// position is not clamped, so a fast particle may drift a little
    /// further out before visibly turning back.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < -BOUNCE_MARGIN || p.x > self.width + BOUNCE_MARGIN {
                p.vx = -p.vx;
            }
            if p.y < -BOUNCE_MARGIN || p.y > self.height + BOUNCE_MARGIN {
                p.vy = -p.vy;
            }
        }
    }
}
