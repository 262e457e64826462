//! The particle field behind the thinking visualization.

use afterglow_types::{Particle, ParticleSeed, RandomSource, Rgb, Surface, Vec2};
use tracing::trace;

use crate::render::{draw_core_glow, draw_particles};

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Logical canvas of the core visualization.
pub const CORE_CANVAS: Vec2 = Vec2::new(300.0, 300.0);

/// A fixed-cardinality set of particles advanced once per frame.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    canvas: Vec2,
    color: Rgb,
    frames: u64,
}

impl ParticleField {
    /// Create `count` particles at the canvas center with randomized parameters.
    pub fn initialize(count: usize, canvas: Vec2, rng: &mut dyn RandomSource) -> Self {
        let particles = (0..count)
            .map(|_| Particle::new(Vec2::ZERO, ParticleSeed::sample(rng)))
            .collect();
        Self::from_particles(particles, canvas)
    }

    #[must_use]
    pub fn from_particles(particles: Vec<Particle>, canvas: Vec2) -> Self {
        Self {
            particles,
            canvas,
            color: Rgb::CORE_BLUE,
            frames: 0,
        }
    }

    /// Advance and render one frame.
    ///
    /// Without a surface the frame is skipped entirely: nothing moves and
    /// nothing is drawn. Returns whether the frame ran.
    pub fn tick(
        &mut self,
        pointer: Vec2,
        canvas: Vec2,
        surface: Option<&mut dyn Surface>,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(surface) = surface else {
            trace!("particle field skipped frame: surface unavailable");
            return false;
        };
        self.canvas = canvas;
        self.step(pointer, rng);
        self.render(surface);
        true
    }

    /// Update every particle without drawing.
    pub fn step(&mut self, pointer: Vec2, rng: &mut dyn RandomSource) {
        for particle in &mut self.particles {
            particle.update(pointer, self.canvas, rng);
        }
        self.frames = self.frames.wrapping_add(1);
    }

    /// Draw the current state, then remember it as the start of the next
    /// motion segment.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        draw_core_glow(surface, self.color);
        draw_particles(surface, &self.particles, self.color);
        for particle in &mut self.particles {
            particle.commit_frame();
        }
    }

    /// Draw without advancing, used when motion is reduced.
    pub fn render_static(&self, surface: &mut dyn Surface) {
        surface.clear();
        draw_core_glow(surface, self.color);
        draw_particles(surface, &self.particles, self.color);
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
