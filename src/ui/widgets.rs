//! Reusable UI widgets
//!
//! Common components used across the page:
//! - Centered notice popup
//! - Form input fields with cursor and inline error
//! - Status bar and flash message line

use crate::form::FieldState;
use crate::ui::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered notice popup with a dismiss button.
pub fn render_notice_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    palette: &Palette,
    area: Rect,
) {
    let content = vec![
        Line::raw(""),
        Line::styled(message.to_string(), palette.text()),
        Line::raw(""),
    ];

    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border_focused())
        .style(palette.text());

    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };

    let content_widget = Paragraph::new(content)
        .style(palette.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, inner);

    // Dismiss button
    let button_area = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width.saturating_sub(4),
        height: 1,
    };

    let button = Paragraph::new(Line::from(vec![
        Span::styled("[", palette.text_dim()),
        Span::styled(
            "o",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("] ", palette.text_dim()),
        Span::styled("OK", palette.text()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(button, button_area);
}

/// Render a labeled input field: bordered box, value with cursor, and an
/// inline error line underneath. `area` must be at least 4 rows tall
/// (3 for the box, 1 for the error line).
pub fn render_input_field(
    frame: &mut Frame,
    label: &str,
    field: &FieldState,
    focused: bool,
    error: &str,
    palette: &Palette,
    area: Rect,
) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(area);

    let border_style = if focused {
        palette.border_focused()
    } else {
        palette.border()
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused {
            palette.title()
        } else {
            palette.text_dim()
        })
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(palette.text());

    let line = field_line(field, focused, palette);
    let input = Paragraph::new(line).block(block);
    frame.render_widget(input, rows[0]);

    if !error.is_empty() {
        let error_line = Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(error.to_string(), palette.error()),
        ]));
        frame.render_widget(error_line, rows[1]);
    }
}

/// Render a multi-line input (the mensagem field). Same shape as
/// [`render_input_field`] but the value wraps across the box height.
pub fn render_textarea(
    frame: &mut Frame,
    label: &str,
    field: &FieldState,
    focused: bool,
    error: &str,
    palette: &Palette,
    area: Rect,
) {
    let rows =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let border_style = if focused {
        palette.border_focused()
    } else {
        palette.border()
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused {
            palette.title()
        } else {
            palette.text_dim()
        })
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(palette.text());

    let mut lines: Vec<Line> = Vec::new();
    let mut remaining = field_line(field, focused, palette).spans;
    // Split spans on newlines so each logical line renders separately.
    let mut current: Vec<Span> = Vec::new();
    for span in remaining.drain(..) {
        let text = span.content.to_string();
        let style = span.style;
        let mut parts = text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }
    lines.push(Line::from(current));

    let input = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(input, rows[0]);

    if !error.is_empty() {
        let error_line = Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(error.to_string(), palette.error()),
        ]));
        frame.render_widget(error_line, rows[1]);
    }
}

/// Build the value line with a cursor marker when focused.
fn field_line<'a>(field: &'a FieldState, focused: bool, palette: &Palette) -> Line<'a> {
    if !focused {
        return Line::styled(field.value.clone(), palette.text());
    }

    let before: String = field.value.chars().take(field.cursor).collect();
    let after: String = field.value.chars().skip(field.cursor).collect();

    let cursor_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(before, palette.text()),
        Span::styled("|", cursor_style),
        Span::styled(after, palette.text()),
    ])
}

/// Render a flash message on the bottom line of `area`.
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    palette: &Palette,
    area: Rect,
) {
    let style = if is_error {
        palette.error()
    } else {
        palette.success()
    };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message.to_string(), style),
    ]));

    frame.render_widget(flash, flash_area);
}

/// Render the key-hint status bar at the bottom of `area`.
pub fn render_status_bar(frame: &mut Frame, hints: &str, palette: &Palette, area: Rect) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let widget = Paragraph::new(hints.to_string()).style(palette.text_dim());
    frame.render_widget(widget, status_area);
}

/// Helper: create a centered rect of given size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_field_line_cursor_position() {
        let palette = Palette::light();
        let mut field = FieldState::default();
        field.insert('a');
        field.insert('b');
        field.move_left();

        let line = field_line(&field, true, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a|b");
    }
}
