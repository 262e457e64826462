//! The thinking panel: backdrop, particle core, thought bubble, timeline and
//! the edge flicker on step changes.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use afterglow_engine::afterglow_types::Vec2;
use afterglow_engine::{App, CORE_CANVAS, Edge, EdgeFlicker};

use crate::effects::{bubble_opacity, pulse};
use crate::surfaces::{Layer, Surfaces};
use crate::theme::{Glyphs, Palette, mix, styles};
use crate::timeline::{TimelineFrame, draw_timeline};

/// Flicker cells brighter than this get the heavy edge glyph.
const FLICKER_GLYPH_THRESHOLD: f32 = 0.3;

/// Largest rectangle of square pixel aspect centered in `area`.
pub(crate) fn core_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(crate) fn draw_thinking(
    buf: &mut Buffer,
    area: Rect,
    app: &mut App,
    surfaces: &mut Surfaces,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(palette))
        .style(styles::panel(palette));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    if let Some(raster) = surfaces.layer(Layer::Backdrop, inner) {
        app.render_backdrop(raster);
        raster.blend_into(inner, buf, palette.canvas());
    }

    let [core_area, _, bubble_area, _, timeline_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    draw_core(buf, core_rect(core_area), app, surfaces, palette);
    draw_bubble(buf, bubble_area, app, palette);

    let reduced_motion = app.ui_options().reduced_motion;
    let thinking = app.thinking();
    let frame = TimelineFrame {
        timeline: thinking.timeline(),
        current_step: thinking.timeline_step(),
        progress: thinking.displayed_progress(),
        pulse: if reduced_motion {
            1.0
        } else {
            pulse(app.elapsed())
        },
    };
    draw_timeline(
        buf,
        timeline_area.inner(Margin::new(2, 0)),
        &frame,
        palette,
        glyphs,
    );

    if let Some(flicker) = thinking.flicker() {
        draw_flicker(buf, area, flicker, palette, glyphs);
    }
}

fn draw_core(
    buf: &mut Buffer,
    area: Rect,
    app: &mut App,
    surfaces: &mut Surfaces,
    palette: &Palette,
) {
    let center: Vec2 = CORE_CANVAS * 0.5;
    let Some(raster) = surfaces.layer(Layer::Core, area) else {
        app.render_core(None, center);
        return;
    };
    let pointer = app.pointer().map_or(center, |sample| {
        raster.relative_logical(area, sample.column, sample.row)
    });
    if app.render_core(Some(&mut *raster), pointer) {
        raster.blend_into(area, buf, palette.canvas());
    }
}

fn draw_bubble(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let thinking = app.thinking();
    let phase = thinking.active_phase();
    let icon = if app.ui_options().ascii_only {
        phase.ascii_icon
    } else {
        phase.icon
    };
    let opacity = bubble_opacity(thinking.bubble_progress());
    let style = Style::default().fg(mix(palette.bg_dark, palette.text_primary, opacity));

    let line = Line::from(vec![
        Span::styled(icon, style),
        Span::raw(" "),
        Span::styled(thinking.thought_text(), styles::thought(palette).patch(style)),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Light the panel border along `flicker`'s edge, brightest in the middle.
fn draw_flicker(
    buf: &mut Buffer,
    area: Rect,
    flicker: &EdgeFlicker,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let opacity = flicker.opacity();
    let (cells, glyph): (Vec<(u16, u16)>, &str) = match flicker.edge() {
        Edge::Top => (
            (area.left() + 1..area.right() - 1).map(|x| (x, area.top())).collect(),
            glyphs.flicker_horizontal,
        ),
        Edge::Bottom => (
            (area.left() + 1..area.right() - 1)
                .map(|x| (x, area.bottom() - 1))
                .collect(),
            glyphs.flicker_horizontal,
        ),
        Edge::Left => (
            (area.top() + 1..area.bottom() - 1).map(|y| (area.left(), y)).collect(),
            glyphs.flicker_vertical,
        ),
        Edge::Right => (
            (area.top() + 1..area.bottom() - 1)
                .map(|y| (area.right() - 1, y))
                .collect(),
            glyphs.flicker_vertical,
        ),
    };

    let span = cells.len().saturating_sub(1).max(1) as f32;
    for (i, position) in cells.into_iter().enumerate() {
        let u = i as f32 / span;
        let intensity = opacity * (1.0 - (2.0 * u - 1.0).abs());
        let Some(cell) = buf.cell_mut(position) else {
            continue;
        };
        cell.set_fg(mix(palette.bg_border, palette.primary, intensity));
        if intensity > FLICKER_GLYPH_THRESHOLD {
            cell.set_symbol(glyph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{core_rect, draw_thinking};
    use crate::surfaces::Surfaces;
    use crate::theme::{Palette, glyphs};
    use afterglow_engine::afterglow_types::ui::UiOptions;
    use afterglow_engine::{App, Settings};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn settings() -> Settings {
        Settings {
            seed: Some(7),
            ..Settings::default()
        }
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn core_rect_is_square_in_pixels() {
        assert_eq!(core_rect(Rect::new(0, 0, 80, 20)), Rect::new(20, 0, 40, 20));
        assert_eq!(core_rect(Rect::new(0, 0, 20, 20)), Rect::new(0, 5, 20, 10));
    }

    #[test]
    fn panel_shows_bubble_and_timeline() {
        let mut app = App::new(settings()).unwrap();
        app.tick(Duration::from_secs(2));
        let mut surfaces = Surfaces::new(1.0);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let options = UiOptions::default();
        draw_thinking(
            &mut buf,
            area,
            &mut app,
            &mut surfaces,
            &Palette::standard(),
            &glyphs(options),
        );

        let screen = text(&buf);
        assert!(screen.contains("Reading and analyzing your document..."));
        assert!(screen.contains("Reading"));
        assert!(screen.contains("Finalizing"));
        assert!(screen.contains('◉'));
    }

    #[test]
    fn flicker_lights_an_edge_after_advancing() {
        let mut app = App::new(settings()).unwrap();
        assert!(app.next_step());
        app.tick(Duration::from_millis(250));
        assert!(app.thinking().flicker().is_some());

        let mut surfaces = Surfaces::new(1.0);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        draw_thinking(
            &mut buf,
            area,
            &mut app,
            &mut surfaces,
            &Palette::standard(),
            &glyphs(options),
        );
        let screen = text(&buf);
        assert!(screen.contains("----") || screen.contains('|'));
    }

    #[test]
    fn released_surfaces_still_draw_text() {
        let mut app = App::new(settings()).unwrap();
        let mut surfaces = Surfaces::new(1.0);
        surfaces.release();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        draw_thinking(
            &mut buf,
            area,
            &mut app,
            &mut surfaces,
            &Palette::standard(),
            &glyphs(UiOptions::default()),
        );
        assert!(text(&buf).contains("Reading"));
    }
}
