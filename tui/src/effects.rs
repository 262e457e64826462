//! Entrance and pulse effects for the animated widgets.

use std::f32::consts::TAU;
use std::time::Duration;

use afterglow_engine::afterglow_types::ui::{ease_in_out_sine, ease_out_cubic, normalized_progress};
use ratatui::layout::Rect;

/// How long a toast takes to settle after it is pushed.
pub const TOAST_ENTRANCE: Duration = Duration::from_millis(200);

/// Period of the active checkpoint's breathing pulse.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Slide a toast down from one row above while it grows from 90% width.
#[must_use]
pub fn toast_entrance(base: Rect, age: Duration, viewport: Rect) -> Rect {
    let t = ease_out_cubic(normalized_progress(age, TOAST_ENTRANCE));
    let scaled = scale_width(base, 0.9 + 0.1 * t);
    let lift = u16::from(t < 0.5 && scaled.y > viewport.y);
    Rect {
        y: scaled.y - lift,
        ..scaled
    }
}

fn scale_width(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    Rect {
        x: base.x + (base.width - width) / 2,
        width,
        ..base
    }
}

/// Breathing factor in `0..=1`: 0 at the start of each period, 1 half way.
#[must_use]
pub fn pulse(elapsed: Duration) -> f32 {
    let period = PULSE_PERIOD.as_secs_f32();
    let phase = (elapsed.as_secs_f32() % period) / period;
    (1.0 - (phase * TAU).cos()) * 0.5
}

/// Bubble fade-in factor from its entrance progress.
#[must_use]
pub fn bubble_opacity(progress: f32) -> f32 {
    ease_in_out_sine(progress)
}
