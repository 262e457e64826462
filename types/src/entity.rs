//! Temporal entities: data advanced once per animation frame.
//!
//! Entities hold state and their own update rule only. Drawing is done by a
//! separate render pass over a [`crate::Surface`], which keeps these rules
//! testable without any real drawing target.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::{RandomSource, lerp};

/// Glow points below this alpha are retired.
pub const GLOW_RETIRE_ALPHA: f32 = 0.01;

const ORBIT_SMOOTHING: f32 = 0.1;
const BRIGHTNESS_SMOOTHING: f32 = 0.05;
const BRIGHTNESS_RETARGET_GAP: f32 = 0.01;
const SELF_DRIFT: f32 = 0.2;
const POINTER_OFFSET_SCALE: f32 = 0.1;
const POINTER_DAMPING: f32 = 0.01;

const GLOW_SMOOTHING: f32 = 0.1;
const GLOW_DECAY: f32 = 0.95;

/// Anything with a position and a visual intensity that is advanced per frame.
pub trait TemporalEntity {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn alpha(&self) -> f32;
    fn target_alpha(&self) -> f32;

    /// Whether the owning collection should drop this entity.
    fn is_retired(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleMode {
    /// Smoothly chases a point rotating on a fixed circle.
    Orbiting,
    /// Self-oscillates, drifts with the pointer, wraps at the canvas edges.
    Free,
}

/// Randomized per-instance parameters of a [`Particle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub mode: ParticleMode,
    pub radius: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub orbit_radius: f32,
    pub brightness: f32,
    pub target_brightness: f32,
}

impl ParticleSeed {
    /// Draw from the documented ranges. The draw order is fixed so a seeded
    /// source always yields the same field.
    pub fn sample(rng: &mut dyn RandomSource) -> Self {
        let radius = rng.range(2.0, 5.0);
        let angle = rng.range(0.0, TAU);
        let angular_speed = rng.range(0.001, 0.003);
        let orbit_radius = rng.range(50.0, 100.0);
        let brightness = rng.next_unit();
        let target_brightness = rng.next_unit();
        let mode = if rng.above(0.5) {
            ParticleMode::Orbiting
        } else {
            ParticleMode::Free
        };
        Self {
            mode,
            radius,
            angle,
            angular_speed,
            orbit_radius,
            brightness,
            target_brightness,
        }
    }
}

/// A particle of the core field.
///
/// Positions are relative to the canvas center. The field never destroys
/// particles, so [`TemporalEntity::is_retired`] is always false.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    mode: ParticleMode,
    position: Vec2,
    last_position: Vec2,
    radius: f32,
    angle: f32,
    angular_speed: f32,
    orbit_radius: f32,
    brightness: f32,
    target_brightness: f32,
}

impl Particle {
    #[must_use]
    pub fn new(position: Vec2, seed: ParticleSeed) -> Self {
        Self {
            mode: seed.mode,
            position,
            last_position: position,
            radius: seed.radius.max(f32::EPSILON),
            angle: seed.angle,
            angular_speed: seed.angular_speed,
            orbit_radius: seed.orbit_radius,
            brightness: seed.brightness.clamp(0.0, 1.0),
            target_brightness: seed.target_brightness.clamp(0.0, 1.0),
        }
    }

    /// Advance one frame.
    ///
    /// `pointer` is in canvas-local coordinates (top-left origin) and
    /// `canvas` is the logical canvas size.
    pub fn update(&mut self, pointer: Vec2, canvas: Vec2, rng: &mut dyn RandomSource) {
        match self.mode {
            ParticleMode::Orbiting => {
                self.angle += self.angular_speed;
                let target = self.orbit_target();
                self.position = self.position.lerp(target, ORBIT_SMOOTHING);
            }
            ParticleMode::Free => {
                let offset = (pointer - canvas * 0.5) * POINTER_OFFSET_SCALE;
                let phase = self.angle + self.orbit_radius;
                self.position.x += phase.sin() * SELF_DRIFT + offset.x * POINTER_DAMPING;
                self.position.y += phase.cos() * SELF_DRIFT + offset.y * POINTER_DAMPING;

                let half = canvas * 0.5;
                self.position.x = wrap_axis(self.position.x, half.x);
                self.position.y = wrap_axis(self.position.y, half.y);
            }
        }

        self.brightness =
            lerp(self.brightness, self.target_brightness, BRIGHTNESS_SMOOTHING).clamp(0.0, 1.0);
        if (self.brightness - self.target_brightness).abs() < BRIGHTNESS_RETARGET_GAP {
            self.target_brightness = rng.next_unit().clamp(0.0, 1.0);
        }
    }

    /// Record the drawn position as the start of the next motion segment.
    pub fn commit_frame(&mut self) {
        self.last_position = self.position;
    }

    /// Current point on the orbit circle for this particle's angle.
    #[must_use]
    pub fn orbit_target(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.orbit_radius
    }

    #[must_use]
    pub fn mode(&self) -> ParticleMode {
        self.mode
    }

    #[must_use]
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[must_use]
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    #[must_use]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[must_use]
    pub fn target_brightness(&self) -> f32 {
        self.target_brightness
    }
}

impl TemporalEntity for Particle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn alpha(&self) -> f32 {
        1.0
    }

    fn target_alpha(&self) -> f32 {
        1.0
    }
}

/// Toroidal wrap: crossing one half-extent lands exactly on the opposite one.
#[must_use]
pub fn wrap_axis(value: f32, half_extent: f32) -> f32 {
    if value > half_extent {
        -half_extent
    } else if value < -half_extent {
        half_extent
    } else {
        value
    }
}

/// A fading glow left behind by the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowPoint {
    position: Vec2,
    radius: f32,
    alpha: f32,
    target_alpha: f32,
}

impl GlowPoint {
    #[must_use]
    pub fn new(position: Vec2, radius: f32, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            position,
            radius: radius.max(f32::EPSILON),
            alpha,
            target_alpha: alpha,
        }
    }

    /// Approach a target that itself decays exponentially.
    pub fn update(&mut self) {
        self.alpha = (self.alpha + (self.target_alpha - self.alpha) * GLOW_SMOOTHING).clamp(0.0, 1.0);
        self.target_alpha = (self.target_alpha * GLOW_DECAY).clamp(0.0, 1.0);
    }
}

impl TemporalEntity for GlowPoint {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn target_alpha(&self) -> f32 {
        self.target_alpha
    }

    fn is_retired(&self) -> bool {
        self.alpha < GLOW_RETIRE_ALPHA
    }
}
