//! Draw passes over a [`Surface`].
//!
//! Entities stay data-only; these functions are the only place that turns
//! simulation state into draw calls.

use afterglow_types::{GlowPoint, Particle, ParticleMode, Rgb, Surface, TemporalEntity, Vec2};

use crate::backdrop::GradientBackdrop;

const CORE_GLOW_RADIUS: f32 = 50.0;
const CORE_GLOW_ALPHA: f32 = 128.0 / 255.0;
/// Motion segments are drawn much fainter than the particle body.
const TRAIL_SEGMENT_ALPHA: f32 = 40.0 / 255.0;

/// The soft disc behind the particle field.
pub fn draw_core_glow(surface: &mut dyn Surface, color: Rgb) {
    let center = surface.size() * 0.5;
    surface.fill_radial(center, CORE_GLOW_RADIUS, color, CORE_GLOW_ALPHA);
}

/// Particles are stored relative to the canvas center.
pub fn draw_particles(surface: &mut dyn Surface, particles: &[Particle], color: Rgb) {
    let origin = surface.size() * 0.5;
    for particle in particles {
        let brightness = particle.brightness();
        let position = origin + particle.position();
        surface.fill_radial(
            position,
            particle.radius(),
            color,
            particle.alpha() * brightness,
        );

        if particle.mode() == ParticleMode::Orbiting {
            surface.stroke_line(
                origin + particle.last_position(),
                position,
                color,
                brightness * TRAIL_SEGMENT_ALPHA,
            );
        }
    }
}

pub fn draw_glow_points(surface: &mut dyn Surface, points: &[GlowPoint], color: Rgb) {
    for point in points {
        surface.fill_radial(point.position(), point.radius(), color, point.alpha());
    }
}

pub fn draw_backdrop(surface: &mut dyn Surface, backdrop: &GradientBackdrop) {
    let size = surface.size();
    let radius = size.x.min(size.y) * BACKDROP_RADIUS_FRACTION;
    for blob in backdrop.blobs() {
        let center = blob_center(size, blob.offset_percent(backdrop.elapsed()));
        surface.fill_radial(center, radius, blob.color(), blob.alpha());
    }
}

const BACKDROP_RADIUS_FRACTION: f32 = 0.35;

/// A blob is half the surface in each dimension and moves by a percentage of
/// its own size, so its center sits a quarter in from the origin at rest.
fn blob_center(size: Vec2, offset_percent: Vec2) -> Vec2 {
    let blob = size * 0.5;
    blob * 0.5 + blob * (offset_percent / 100.0)
}
