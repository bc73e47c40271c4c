//! Render palettes
//!
//! The page root carries a theme attribute; the palette is the stylesheet
//! that keys off it. Two palettes are built in, light (default) and dark.
//! An attribute outside those two keeps its value but renders with the
//! light palette.

use ratatui::style::{Color, Modifier, Style};

/// Complete palette with all required colors.
#[derive(Debug, Clone)]
pub struct Palette {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Palette {
    /// Resolve a palette from the applied theme attribute.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Light palette (default).
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(246, 248, 250),        // #f6f8fa
            fg: Color::Rgb(36, 41, 47),           // #24292f
            fg_dim: Color::Rgb(110, 119, 129),    // #6e7781

            accent: Color::Rgb(9, 105, 218),      // #0969da

            success: Color::Rgb(26, 127, 55),     // #1a7f37
            error: Color::Rgb(207, 34, 46),       // #cf222e

            border: Color::Rgb(208, 215, 222),    // #d0d7de
            border_focused: Color::Rgb(9, 105, 218),
            selection_bg: Color::Rgb(221, 244, 255), // #ddf4ff
            selection_fg: Color::Rgb(36, 41, 47),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(13, 17, 23),           // #0d1117
            fg: Color::Rgb(230, 237, 243),        // #e6edf3
            fg_dim: Color::Rgb(125, 133, 144),    // #7d8590

            accent: Color::Rgb(88, 166, 255),     // #58a6ff

            success: Color::Rgb(63, 185, 80),     // #3fb950
            error: Color::Rgb(248, 81, 73),       // #f85149

            border: Color::Rgb(48, 54, 61),       // #30363d
            border_focused: Color::Rgb(88, 166, 255),
            selection_bg: Color::Rgb(33, 38, 45), // #21262d
            selection_fg: Color::Rgb(230, 237, 243),
        }
    }

    // Style helpers for common UI patterns

    /// Default text style.
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style.
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused).
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused).
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive).
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active).
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style.
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style.
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Whole-block background style.
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }
}
