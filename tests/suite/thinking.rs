//! The thinking sequence as driven through the app.

use std::time::Duration;

use afterglow_engine::afterglow_types::{PhaseStatus, Vec2};
use afterglow_engine::{CORE_CANVAS, FLICKER_DURATION, StepError, THOUGHT_PHASES};

use crate::common::{CountingSurface, seeded_app};

#[test]
fn stepping_through_every_phase() {
    let mut app = seeded_app(11);
    let mut seen = vec![app.thinking().active_phase().key];
    while app.next_step() {
        seen.push(app.thinking().active_phase().key);
    }
    let expected: Vec<_> = THOUGHT_PHASES.iter().map(|phase| phase.key).collect();
    assert_eq!(seen, expected);
    assert_eq!(app.thinking().progress(), 100.0);
}

#[test]
fn external_step_out_of_range_is_rejected() {
    let mut app = seeded_app(11);
    assert_eq!(
        app.set_step(THOUGHT_PHASES.len()),
        Err(StepError::OutOfRange { step: 5, last: 4 })
    );
    assert_eq!(app.thinking().step(), 0);
}

#[test]
fn timeline_tracks_the_step() {
    let mut app = seeded_app(11);
    app.set_step(1).unwrap();
    let statuses: Vec<_> = app
        .thinking()
        .timeline()
        .statuses(app.thinking().timeline_step())
        .map(|(_, status)| status)
        .collect();
    assert_eq!(
        statuses,
        [
            PhaseStatus::Completed,
            PhaseStatus::Active,
            PhaseStatus::Pending,
            PhaseStatus::Pending,
        ]
    );
}

#[test]
fn thought_retypes_after_a_step_change() {
    let mut app = seeded_app(11);
    app.tick(Duration::from_secs(3));
    assert_eq!(app.thinking().thought_text(), THOUGHT_PHASES[0].text);

    assert!(app.next_step());
    assert_eq!(app.thinking().thought_text(), "");
    app.tick(Duration::from_secs(3));
    assert_eq!(app.thinking().thought_text(), THOUGHT_PHASES[1].text);
}

#[test]
fn flicker_clears_after_its_duration() {
    let mut app = seeded_app(11);
    assert!(app.next_step());
    assert!(app.thinking().flicker().is_some());
    app.tick(FLICKER_DURATION / 2);
    assert!(app.thinking().flicker().is_some());
    app.tick(FLICKER_DURATION / 2);
    assert!(app.thinking().flicker().is_none());
}

#[test]
fn stepping_back_does_not_flicker() {
    let mut app = seeded_app(11);
    app.set_step(3).unwrap();
    app.tick(FLICKER_DURATION);
    assert!(app.prev_step());
    assert!(app.thinking().flicker().is_none());
}

#[test]
fn core_frame_needs_a_surface() {
    let mut app = seeded_app(11);
    let before = app.thinking().field().particles().to_vec();
    assert!(!app.render_core(None, CORE_CANVAS * 0.5));
    assert_eq!(app.thinking().field().particles(), before.as_slice());

    let mut surface = CountingSurface::new(300.0, 300.0);
    assert!(app.render_core(Some(&mut surface), Vec2::new(10.0, 10.0)));
    assert_eq!(surface.clears, 1);
    assert_eq!(app.thinking().field().frames(), 1);
}
