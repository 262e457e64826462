//! Color theme and glyphs for the Afterglow TUI.
//!
//! A dark slate palette with blue/indigo accents by default, with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use afterglow_engine::afterglow_types::ui::UiOptions;
use afterglow_engine::afterglow_types::{Rgb, ToastKind};

mod colors {
    use super::Color;

    // === Backgrounds (slate) ===
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const BG_BORDER: Color = Color::Rgb(71, 85, 105); // slate-600

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(59, 130, 246); // blue-500
    pub const SECONDARY: Color = Color::Rgb(99, 102, 241); // indigo-500
    pub const TRACK: Color = Color::Rgb(30, 58, 110);

    // === Toasts (bg, border, text) ===
    pub const SUCCESS_BG: Color = Color::Rgb(6, 78, 59);
    pub const SUCCESS_BORDER: Color = Color::Rgb(52, 211, 153);
    pub const SUCCESS_TEXT: Color = Color::Rgb(209, 250, 229);
    pub const ERROR_BG: Color = Color::Rgb(127, 29, 29);
    pub const ERROR_BORDER: Color = Color::Rgb(248, 113, 113);
    pub const ERROR_TEXT: Color = Color::Rgb(254, 226, 226);
    pub const INFO_BG: Color = Color::Rgb(23, 37, 84);
    pub const INFO_BORDER: Color = Color::Rgb(59, 130, 246);
    pub const INFO_TEXT: Color = Color::Rgb(219, 234, 254);
}

/// Colors for one toast kind.
#[derive(Debug, Clone, Copy)]
pub struct ToastColors {
    pub bg: Color,
    pub border: Color,
    pub text: Color,
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub track: Color,
    pub success: ToastColors,
    pub error: ToastColors,
    pub info: ToastColors,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            secondary: colors::SECONDARY,
            track: colors::TRACK,
            success: ToastColors {
                bg: colors::SUCCESS_BG,
                border: colors::SUCCESS_BORDER,
                text: colors::SUCCESS_TEXT,
            },
            error: ToastColors {
                bg: colors::ERROR_BG,
                border: colors::ERROR_BORDER,
                text: colors::ERROR_TEXT,
            },
            info: ToastColors {
                bg: colors::INFO_BG,
                border: colors::INFO_BORDER,
                text: colors::INFO_TEXT,
            },
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Cyan,
            secondary: Color::White,
            track: Color::DarkGray,
            success: ToastColors {
                bg: Color::Black,
                border: Color::Green,
                text: Color::White,
            },
            error: ToastColors {
                bg: Color::Black,
                border: Color::Red,
                text: Color::White,
            },
            info: ToastColors {
                bg: Color::Black,
                border: Color::Cyan,
                text: Color::White,
            },
        }
    }

    #[must_use]
    pub fn toast(&self, kind: ToastKind) -> ToastColors {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
            ToastKind::Info => self.info,
        }
    }

    /// Base color the rasters composite onto.
    #[must_use]
    pub fn canvas(&self) -> Rgb {
        match self.bg_dark {
            Color::Rgb(r, g, b) => Rgb::new(r, g, b),
            _ => Rgb::BLACK,
        }
    }
}

/// Blend two RGB colors, `t = 0` giving `from`. Named colors can't be mixed,
/// so `to` wins past the halfway point.
#[must_use]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mixed = Rgb::new(r0, g0, b0).mix(Rgb::new(r1, g1, b1), t);
            Color::Rgb(mixed.r, mixed.g, mixed.b)
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub close: &'static str,
    pub track: &'static str,
    pub fill: &'static str,
    pub marker_completed: &'static str,
    pub marker_active: &'static str,
    pub marker_pending: &'static str,
    pub flicker_horizontal: &'static str,
    pub flicker_vertical: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            success: "+",
            error: "x",
            info: "i",
            close: "x",
            track: "-",
            fill: "=",
            marker_completed: "#",
            marker_active: "@",
            marker_pending: "o",
            flicker_horizontal: "-",
            flicker_vertical: "|",
        }
    } else {
        Glyphs {
            success: "✓",
            error: "✗",
            info: "i",
            close: "×",
            track: "─",
            fill: "━",
            marker_completed: "●",
            marker_active: "◉",
            marker_pending: "○",
            flicker_horizontal: "━",
            flicker_vertical: "┃",
        }
    }
}

impl Glyphs {
    #[must_use]
    pub fn toast_icon(&self, kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
            ToastKind::Info => self.info,
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn panel(palette: &Palette) -> Style {
        Style::default().bg(palette.bg_dark).fg(palette.text_primary)
    }

    #[must_use]
    pub fn panel_border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn thought(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn label_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label_completed(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn label_pending(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}
