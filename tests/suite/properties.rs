//! Behavioral properties of the animation model, driven frame by frame.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use afterglow_engine::afterglow_types::{
    GLOW_RETIRE_ALPHA, Particle, ParticleMode, ParticleSeed, PhaseStatus, ScriptedRandom,
    SeededRandom, TemporalEntity, Timeline, ToastKind, Vec2,
};
use afterglow_engine::{CORE_CANVAS, ParticleField, ToastQueue, TrailEngine, Typewriter};

use crate::common::CountingSurface;

fn seed(mode: ParticleMode) -> ParticleSeed {
    ParticleSeed {
        mode,
        radius: 3.0,
        angle: 0.0,
        angular_speed: 0.0,
        orbit_radius: 80.0,
        brightness: 0.5,
        target_brightness: 0.5,
    }
}

#[test]
fn particle_intensities_stay_in_unit_range() {
    let mut rng = SeededRandom::new(99);
    let mut field = ParticleField::initialize(50, CORE_CANVAS, &mut rng);
    let mut surface = CountingSurface::new(300.0, 300.0);
    let pointer = Vec2::new(280.0, 20.0);

    for _ in 0..2_000 {
        assert!(field.tick(pointer, CORE_CANVAS, Some(&mut surface), &mut rng));
        for particle in field.particles() {
            assert!((0.0..=1.0).contains(&particle.alpha()));
            assert!((0.0..=1.0).contains(&particle.brightness()));
            assert!((0.0..=1.0).contains(&particle.target_brightness()));
        }
    }
    assert_eq!(field.len(), 50);
    assert_eq!(surface.clears, 2_000);
}

#[test]
fn glow_point_fades_out_then_is_pruned() {
    let mut trail = TrailEngine::default();
    let mut rng = ScriptedRandom::constant(0.5);
    assert!(trail.frame(Some(Vec2::new(40.0, 40.0)), &mut rng));
    assert_eq!(trail.points()[0].target_alpha(), 0.3 * 0.95);

    let mut frames = 1;
    while trail.points()[0].alpha() >= GLOW_RETIRE_ALPHA {
        trail.frame(None, &mut rng);
        frames += 1;
        assert!(frames < 200, "glow never faded");
    }
    assert!((60..=90).contains(&frames), "faded after {frames} frames");

    trail.frame(None, &mut rng);
    assert!(trail.points().is_empty());
}

#[test]
fn orbiting_particle_closes_in_on_a_still_target() {
    let mut particle = Particle::new(Vec2::ZERO, seed(ParticleMode::Orbiting));
    let mut rng = ScriptedRandom::constant(0.5);
    let target = particle.orbit_target();
    let mut distance = particle.position().distance(target);

    for _ in 0..50 {
        particle.update(CORE_CANVAS * 0.5, CORE_CANVAS, &mut rng);
        assert_eq!(particle.orbit_target(), target);
        let next = particle.position().distance(target);
        assert!(next < distance, "{next} >= {distance}");
        distance = next;
    }
}

#[test]
fn free_particle_wraps_to_the_opposite_edge() {
    let mut seed = seed(ParticleMode::Free);
    // sin(angle + orbit_radius) = 1 drifts straight right.
    seed.orbit_radius = FRAC_PI_2;
    let mut particle = Particle::new(Vec2::new(149.9, 0.0), seed);
    let mut rng = ScriptedRandom::constant(0.5);

    particle.update(CORE_CANVAS * 0.5, CORE_CANVAS, &mut rng);
    assert_eq!(particle.position().x, -150.0);
}

#[test]
fn active_phase_is_never_completed() {
    let timeline = Timeline::thinking_checkpoints().unwrap();
    for step in 0..=6 {
        for (phase, status) in timeline.statuses(step) {
            if phase.id == step {
                assert_eq!(status, PhaseStatus::Active);
            } else {
                assert_ne!(status, PhaseStatus::Active);
            }
        }
        assert_eq!(
            timeline.active(step).map(|phase| phase.id),
            (1..=4).contains(&step).then_some(step)
        );
    }
}

#[test]
fn typewriter_reveals_one_char_per_interval() {
    let interval = Duration::from_millis(30);
    let mut typewriter = Typewriter::new(interval);
    typewriter.restart("Hi");
    typewriter.advance(interval);
    assert_eq!(typewriter.visible(), "H");
    typewriter.advance(interval);
    assert_eq!(typewriter.visible(), "Hi");
    typewriter.advance(interval * 10);
    assert_eq!(typewriter.visible(), "Hi");
}

#[test]
fn toast_expires_after_its_duration() {
    let mut queue = ToastQueue::default();
    queue.activate();
    queue
        .push_with_duration("hello", ToastKind::Info, Duration::from_millis(100))
        .unwrap();
    queue.advance(Duration::from_millis(150));
    assert!(queue.is_empty());
}

#[test]
fn dismissed_toast_ignores_its_late_timer() {
    let mut queue = ToastQueue::default();
    queue.activate();
    let id = queue.push("bye", ToastKind::Success).unwrap();
    assert!(queue.dismiss(id).unwrap());
    assert!(queue.is_empty());

    queue.advance(Duration::from_secs(5));
    assert!(queue.is_empty());
    assert_eq!(queue.pending_timers(), 0);
}
