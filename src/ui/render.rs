//! Main rendering module
//!
//! Draws the whole page every frame:
//! - header with the site title and tab bar (or menu hint when narrow)
//! - the active panel's content
//! - the contact form on the Contato panel
//! - drawer, popup and flash overlays
//! - status bar with key hints

use crate::app::{App, PopupState};
use crate::form::{ContactForm, FormFocus};
use crate::theme::PrefStore;
use crate::ui::{widgets, Palette};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render<S: PrefStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let palette = &app.palette;
    let narrow = App::<S>::is_narrow(area.width);

    // Paint the page background before anything else.
    frame.render_widget(Block::default().style(palette.block_style()), area);

    let layout = Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, narrow, layout[0]);
    render_content(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    if narrow && app.drawer_open {
        render_drawer(frame, app, area);
    }

    render_overlays(frame, app, area);
}

/// Header with the site title, plus the tab bar (wide) or menu hint
/// (narrow).
fn render_header<S: PrefStore>(frame: &mut Frame, app: &App<S>, narrow: bool, area: Rect) {
    let palette = &app.palette;

    let header_block = Block::default()
        .style(palette.block_style())
        .title(" folio · Ana Silva ")
        .title_style(palette.title())
        .borders(Borders::BOTTOM)
        .border_style(palette.border());

    frame.render_widget(header_block, area);

    let bar_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    if narrow {
        // No room for the tab bar: show the hamburger hint and the active
        // section name.
        let active = app
            .tabs
            .active_panel()
            .map(|p| p.title.as_str())
            .unwrap_or("");
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[m] Menu", palette.tab_inactive()),
            Span::raw("  "),
            Span::styled(active.to_string(), palette.tab_active()),
        ]));
        frame.render_widget(hint, bar_area);
        return;
    }

    let titles: Vec<Line> = app
        .tabs
        .controls
        .iter()
        .enumerate()
        .map(|(i, control)| {
            let style = if control.selected {
                palette.tab_active()
            } else {
                palette.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, control.label), style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tabs.selected_index().unwrap_or(usize::MAX))
        .divider(" │ ")
        .style(palette.text());

    frame.render_widget(tabs, bar_area);
}

/// The active panel's content, or an empty frame when no panel is active.
fn render_content<S: PrefStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = &app.palette;

    let Some(panel) = app.tabs.active_panel() else {
        // No matching panel: everything hidden. Draw the empty frame.
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.text());
        frame.render_widget(block, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if panel.id == "contato" {
        if let Some(form) = &app.form {
            render_contact_panel(frame, panel.body.as_slice(), form, app.editing_form, palette, inner);
            return;
        }
    }

    let lines: Vec<Line> = panel
        .body
        .iter()
        .map(|l| Line::styled(l.clone(), palette.text()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(palette.text())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Contato panel: intro text, the three fields, the send button and the
/// status line.
fn render_contact_panel(
    frame: &mut Frame,
    intro: &[String],
    form: &ContactForm,
    editing: bool,
    palette: &Palette,
    area: Rect,
) {
    let rows = Layout::vertical([
        Constraint::Length(2), // intro
        Constraint::Length(4), // nome + error
        Constraint::Length(4), // email + error
        Constraint::Min(5),    // mensagem + error
        Constraint::Length(1), // enviar
        Constraint::Length(1), // status
    ])
    .split(area);

    let intro_lines: Vec<Line> = intro
        .iter()
        .map(|l| Line::styled(l.clone(), palette.text_dim()))
        .collect();
    frame.render_widget(Paragraph::new(intro_lines), rows[0]);

    widgets::render_input_field(
        frame,
        "Nome",
        &form.nome,
        editing && form.focus == FormFocus::Nome,
        &form.nome_error,
        palette,
        rows[1],
    );

    widgets::render_input_field(
        frame,
        "E-mail",
        &form.email,
        editing && form.focus == FormFocus::Email,
        &form.email_error,
        palette,
        rows[2],
    );

    widgets::render_textarea(
        frame,
        "Mensagem",
        &form.mensagem,
        editing && form.focus == FormFocus::Mensagem,
        &form.mensagem_error,
        palette,
        rows[3],
    );

    let button_style = if editing && form.focus == FormFocus::Enviar {
        palette.selected()
    } else {
        palette.text()
    };
    let button = Paragraph::new(Line::styled("[ Enviar ]", button_style));
    frame.render_widget(button, rows[4]);

    if !form.status.is_empty() {
        let status_style = if form.status_ok {
            palette.success().add_modifier(Modifier::BOLD)
        } else {
            palette.error()
        };
        let status = Paragraph::new(Line::styled(form.status.clone(), status_style));
        frame.render_widget(status, rows[5]);
    }
}

/// Navigation drawer, only shown in the narrow layout.
fn render_drawer<S: PrefStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = &app.palette;

    let width = 24.min(area.width.saturating_sub(2));
    let height = (app.tabs.controls.len() as u16 + 2).min(area.height.saturating_sub(2));
    let drawer_area = Rect {
        x: area.x + 1,
        y: area.y + 2,
        width,
        height,
    };

    frame.render_widget(Clear, drawer_area);

    let items: Vec<ListItem> = app
        .tabs
        .controls
        .iter()
        .enumerate()
        .map(|(i, control)| {
            let style = if i == app.drawer_cursor {
                palette.selected()
            } else if control.selected {
                palette.tab_active()
            } else {
                palette.text()
            };
            ListItem::new(Line::styled(format!(" {} ", control.label), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .title_style(palette.title())
            .borders(Borders::ALL)
            .border_style(palette.border_focused())
            .style(palette.text()),
    );

    frame.render_widget(list, drawer_area);
}

/// Status bar with key hints for the current mode.
fn render_status_bar<S: PrefStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let hints = if app.popup != PopupState::None {
        "[Enter/Esc] Fechar"
    } else if app.editing_form {
        "[Tab] Próximo campo  [Enter] Enviar/nova linha  [Esc] Sair do formulário"
    } else if app.drawer_open {
        "[j/k] Navegar  [Enter] Abrir seção  [Esc] Fechar menu"
    } else {
        "[1-4] Seções  [←/→] Navegar  [j/k] Rolar  [t] Tema  [m] Menu  [q] Sair"
    };

    widgets::render_status_bar(frame, hints, &app.palette, area);
}

/// Popup and flash overlays, drawn last.
fn render_overlays<S: PrefStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = &app.palette;

    if let PopupState::Notice { title, message } = &app.popup {
        widgets::render_notice_popup(frame, title, message, palette, area);
    }

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, palette, area);
    }
}
