//! Pointer-reactive glow trail.

use std::time::Duration;

use afterglow_types::{GlowPoint, RandomSource, Rgb, Surface, TemporalEntity, Vec2};
use tracing::trace;

use crate::render::draw_glow_points;

pub const DEFAULT_SPAWN_INTERVAL: Duration = Duration::from_millis(50);

const SPAWN_ALPHA: f32 = 0.3;
const SPAWN_RADIUS_MIN: f32 = 30.0;
const SPAWN_RADIUS_MAX: f32 = 50.0;

/// Spawns glow points under the pointer at a throttled rate and lets them
/// fade out.
///
/// The throttle compares elapsed frame time against the last spawn, which is
/// a best-effort limit: a long frame still yields a single spawn.
#[derive(Debug, Clone)]
pub struct TrailEngine {
    points: Vec<GlowPoint>,
    active: bool,
    spawn_interval: Duration,
    clock: Duration,
    last_spawn: Option<Duration>,
    color: Rgb,
}

impl TrailEngine {
    #[must_use]
    pub fn new(spawn_interval: Duration) -> Self {
        Self {
            points: Vec::new(),
            active: true,
            spawn_interval,
            clock: Duration::ZERO,
            last_spawn: None,
            color: Rgb::CORE_BLUE,
        }
    }

    /// Stop or resume spawning. Existing points keep decaying either way.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            trace!(active, "cursor glow toggled");
        }
        self.active = active;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn advance(&mut self, delta: Duration) {
        self.clock = self.clock.saturating_add(delta);
    }

    /// Run one frame: maybe spawn, prune faded points, update the rest.
    ///
    /// `pointer` is `None` until the pointer has been observed at least once.
    /// Returns whether a point was spawned.
    pub fn frame(&mut self, pointer: Option<Vec2>, rng: &mut dyn RandomSource) -> bool {
        let spawned = match pointer {
            Some(position) if self.active && self.spawn_due() => {
                let radius = rng.range(SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX);
                self.points.push(GlowPoint::new(position, radius, SPAWN_ALPHA));
                self.last_spawn = Some(self.clock);
                true
            }
            _ => false,
        };

        self.points.retain(|point| !point.is_retired());
        for point in &mut self.points {
            point.update();
        }
        spawned
    }

    fn spawn_due(&self) -> bool {
        self.last_spawn
            .is_none_or(|last| self.clock.saturating_sub(last) >= self.spawn_interval)
    }

    /// Run one frame and draw it. Skips the frame without a surface.
    pub fn tick(
        &mut self,
        pointer: Option<Vec2>,
        surface: Option<&mut dyn Surface>,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(surface) = surface else {
            trace!("cursor glow skipped frame: surface unavailable");
            return false;
        };
        self.frame(pointer, rng);
        surface.clear();
        draw_glow_points(surface, &self.points, self.color);
        true
    }

    #[must_use]
    pub fn points(&self) -> &[GlowPoint] {
        &self.points
    }

    /// Inactive with nothing left to fade.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.active && self.points.is_empty()
    }
}

impl Default for TrailEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::TrailEngine;
    use crate::render::testing::RecordingSurface;
    use afterglow_types::{ScriptedRandom, TemporalEntity, Vec2};
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn spawns_only_after_pointer_seen() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.5);
        assert!(!trail.frame(None, &mut rng));
        assert!(trail.points().is_empty());
        assert!(trail.frame(Some(Vec2::new(10.0, 10.0)), &mut rng));
        assert_eq!(trail.points().len(), 1);
        assert_eq!(trail.points()[0].radius(), 40.0);
    }

    #[test]
    fn throttles_to_spawn_interval() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.5);
        let pointer = Some(Vec2::new(5.0, 5.0));
        let mut spawns = 0;
        // 20 frames of 16ms = 320ms of wall time.
        for _ in 0..20 {
            if trail.frame(pointer, &mut rng) {
                spawns += 1;
            }
            trail.advance(FRAME);
        }
        // Spawns land at 0, 64, 128, 192 and 256ms.
        assert_eq!(spawns, 5);
    }

    #[test]
    fn spawned_point_starts_at_point_three() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.0);
        trail.frame(Some(Vec2::ZERO), &mut rng);
        let point = &trail.points()[0];
        // First update keeps alpha while the target starts decaying.
        assert!((point.alpha() - 0.3).abs() < 1e-6);
        assert_eq!(point.radius(), 30.0);
    }

    #[test]
    fn inactive_engine_stops_spawning_but_keeps_fading() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.5);
        trail.frame(Some(Vec2::ZERO), &mut rng);
        trail.set_active(false);
        let mut frames = 0;
        while !trail.points().is_empty() {
            trail.advance(FRAME);
            assert!(!trail.frame(Some(Vec2::ZERO), &mut rng));
            frames += 1;
            assert!(frames < 200, "points never faded");
        }
        assert!(trail.is_settled());
    }

    #[test]
    fn faded_points_are_pruned_before_update() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.5);
        trail.frame(Some(Vec2::ZERO), &mut rng);
        trail.set_active(false);
        for _ in 0..200 {
            trail.frame(None, &mut rng);
            assert!(trail.points().iter().all(|p| p.alpha() >= 0.0));
            for point in trail.points() {
                // Anything still held was visible when this frame began.
                assert!(point.target_alpha() < 0.3);
            }
        }
        assert!(trail.points().is_empty());
    }

    #[test]
    fn tick_without_surface_skips() {
        let mut trail = TrailEngine::default();
        let mut rng = ScriptedRandom::constant(0.5);
        assert!(!trail.tick(Some(Vec2::ZERO), None, &mut rng));
        assert!(trail.points().is_empty());

        let mut surface = RecordingSurface::new(100.0, 100.0);
        assert!(trail.tick(Some(Vec2::ZERO), Some(&mut surface), &mut rng));
        assert_eq!(surface.radials(), 1);
    }
}
