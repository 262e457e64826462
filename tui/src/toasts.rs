//! Stacked toast cards in the top-right corner.

use afterglow_engine::ToastQueue;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::effects::toast_entrance;
use crate::theme::{Glyphs, Palette};

const CARD_HEIGHT: u16 = 3;
const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;
/// Border, icon, spacing and the close glyph around the message.
const CHROME: u16 = 8;

/// Base rectangle for the `index`-th toast with a message `message_width`
/// columns wide. `None` once the stack runs past the bottom of `area`.
pub(crate) fn card_rect(area: Rect, index: usize, message_width: usize) -> Option<Rect> {
    if area.width < 3 {
        return None;
    }
    let message = u16::try_from(message_width).unwrap_or(u16::MAX);
    let width = message
        .saturating_add(CHROME)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(area.width - 2);
    let offset = u16::try_from(index).ok()?.checked_mul(CARD_HEIGHT)?;
    if offset + CARD_HEIGHT > area.height {
        return None;
    }
    Some(Rect {
        x: area.right() - width - 1,
        y: area.y + offset,
        width,
        height: CARD_HEIGHT,
    })
}

/// Draw every queued toast as a card stacked from the top-right of `area`.
pub fn draw_toasts(
    buf: &mut Buffer,
    area: Rect,
    queue: &ToastQueue,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    for (index, toast) in queue.toasts().enumerate() {
        let Some(base) = card_rect(area, index, toast.message.width()) else {
            break;
        };
        let age = queue.age(toast.id).unwrap_or_default();
        let rect = toast_entrance(base, age, area);
        let colors = palette.toast(toast.kind);
        let card = Style::default().bg(colors.bg).fg(colors.text);

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border).bg(colors.bg))
            .style(card);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                glyphs.toast_icon(toast.kind),
                Style::default()
                    .fg(colors.border)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(toast.message.as_str()),
        ]);
        let text_area = Rect {
            width: inner.width.saturating_sub(3),
            ..inner
        };
        Paragraph::new(line).style(card).render(text_area, buf);

        if inner.width >= 2 {
            buf.set_string(
                inner.x + inner.width - 2,
                inner.y,
                glyphs.close,
                card.add_modifier(Modifier::DIM),
            );
        }
    }
}
