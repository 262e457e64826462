//! Checkpoint timeline: labels over a track with a progress fill.

use afterglow_engine::afterglow_types::{PhaseStatus, Timeline};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme::{Glyphs, Palette, mix, styles};

/// Everything the timeline needs for one frame.
pub(crate) struct TimelineFrame<'a> {
    pub timeline: &'a Timeline,
    pub current_step: u32,
    /// `0..=100`.
    pub progress: f32,
    /// Active marker breathing factor, `0..=1`.
    pub pulse: f32,
}

/// Column of a track position, `0..=100` mapped across `width` cells.
pub(crate) fn column_at(area: Rect, percent: f32) -> u16 {
    let span = f32::from(area.width.saturating_sub(1));
    area.x + (percent.clamp(0.0, 100.0) / 100.0 * span).round() as u16
}

/// Draw labels on the first row of `area` and the track on the second.
pub(crate) fn draw_timeline(
    buf: &mut Buffer,
    area: Rect,
    frame: &TimelineFrame<'_>,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width == 0 || area.height < 2 {
        return;
    }
    let labels = Rect { height: 1, ..area };
    let track = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };

    let filled_to = column_at(track, frame.progress);
    for x in track.left()..track.right() {
        let (symbol, color) = if frame.progress > 0.0 && x <= filled_to {
            (glyphs.fill, palette.primary)
        } else {
            (glyphs.track, palette.track)
        };
        buf[(x, track.y)]
            .set_symbol(symbol)
            .set_style(Style::default().fg(color));
    }

    for (phase, status) in frame.timeline.statuses(frame.current_step) {
        let x = column_at(track, phase.position_percent);
        let (symbol, style) = match status {
            PhaseStatus::Completed => (
                glyphs.marker_completed,
                Style::default().fg(palette.primary),
            ),
            PhaseStatus::Active => {
                // Half strength at rest, full strength at the peak.
                let color = mix(palette.bg_dark, palette.secondary, 0.5 + 0.5 * frame.pulse);
                let mut style = Style::default().fg(color);
                if frame.pulse > 0.5 {
                    style = style.add_modifier(Modifier::BOLD);
                }
                (glyphs.marker_active, style)
            }
            PhaseStatus::Pending => (glyphs.marker_pending, Style::default().fg(palette.track)),
        };
        buf[(x, track.y)].set_symbol(symbol).set_style(style);

        let label_style = match status {
            PhaseStatus::Active => styles::label_active(palette),
            PhaseStatus::Completed => styles::label_completed(palette),
            PhaseStatus::Pending => styles::label_pending(palette),
        };
        let width = u16::try_from(phase.label.width()).unwrap_or(u16::MAX);
        let width = width.min(labels.width);
        let start = x
            .saturating_sub(width / 2)
            .clamp(labels.left(), labels.right() - width);
        buf.set_stringn(
            start,
            labels.y,
            &phase.label,
            usize::from(width),
            label_style,
        );
    }
}
