//! TUI rendering and input handling for Afterglow.

mod effects;
mod input;
mod raster;
mod surfaces;
mod theme;
mod thinking;
mod timeline;
mod toasts;

pub use effects::{PULSE_PERIOD, TOAST_ENTRANCE};
pub use input::{InputPump, apply_event, handle_events};
pub use raster::{HALF_BLOCK, Raster};
pub use surfaces::{Layer, OVERLAY_SCALE, Surfaces};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use toasts::draw_toasts;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use afterglow_engine::App;

use self::thinking::draw_thinking;

/// Key bindings shown under the panel.
const KEY_HINTS: [(&str, &str); 6] = [
    ("←/→", "step"),
    ("r", "reset"),
    ("s/e/i", "toast"),
    ("x", "dismiss"),
    ("g", "glow"),
    ("q", "quit"),
];

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App, surfaces: &mut Surfaces) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let [panel, hints] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .areas(area);

    draw_thinking(frame.buffer_mut(), panel, app, surfaces, &palette, &glyphs);
    draw_key_hints(frame, hints, &palette, options.ascii_only);
    draw_toasts(frame.buffer_mut(), area, app.toasts(), &palette, &glyphs);
    draw_overlay(frame, area, app, surfaces, &palette);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, ascii_only: bool) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
    for (i, &(key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let key = if ascii_only && key == "←/→" {
            "left/right"
        } else {
            key
        };
        spans.push(Span::styled(key, styles::label_active(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Cursor glow over the whole frame. Runs every frame so the trail fades out
/// even after the pointer leaves.
fn draw_overlay(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    surfaces: &mut Surfaces,
    palette: &Palette,
) {
    let Some(raster) = surfaces.layer(Layer::Overlay, area) else {
        app.render_trail(None, None);
        return;
    };
    let pointer = app
        .pointer()
        .and_then(|sample| raster.cell_to_logical(area, sample.column, sample.row));
    if app.render_trail(Some(&mut *raster), pointer) {
        raster.blend_into(area, frame.buffer_mut(), palette.canvas());
    }
}
