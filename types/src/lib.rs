//! Core domain types for Afterglow.
//!
//! This crate contains pure simulation data with no IO, no async, and no
//! terminal dependency. Entities carry their own per-frame update rules;
//! drawing happens elsewhere through the [`Surface`] trait.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod color;
mod entity;
mod random;
mod surface;
mod timeline;
mod toast;
pub mod ui;

pub use glam::Vec2;

pub use color::Rgb;
pub use entity::{
    GLOW_RETIRE_ALPHA, GlowPoint, Particle, ParticleMode, ParticleSeed, TemporalEntity, wrap_axis,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use surface::{Surface, SurfaceError};
pub use timeline::{Phase, PhaseStatus, Timeline, TimelineError};
pub use toast::{Toast, ToastError, ToastId, ToastKind};

/// Linear interpolation: `start * (1 - t) + end * t`.
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::lerp;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert!((lerp(0.0, 10.0, 0.1) - 1.0).abs() < 1e-6);
    }
}
