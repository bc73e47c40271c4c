//! Application state and event handling
//!
//! Ties the three page behaviors together:
//! - tab navigation (which panel is visible)
//! - theme switching and persistence
//! - the contact form
//!
//! The pieces share no state with each other; App owns each one and routes
//! key events to it.

use crate::content::{self, DEFAULT_SECTION};
use crate::form::{ContactForm, FormFocus, SubmitOutcome};
use crate::tabs::TabStrip;
use crate::theme::{PrefStore, ThemeController};
use crate::ui::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Terminal width below which the layout switches to the narrow (drawer)
/// mode.
pub const NARROW_WIDTH: u16 = 70;

/// Which optional page elements exist. Decided once at startup; a feature
/// that is not wired has no key binding and no UI, and nothing errors.
#[derive(Debug, Clone, Copy)]
pub struct Wiring {
    pub hamburger: bool,
    pub theme_toggle: bool,
    pub contact_form: bool,
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            hamburger: true,
            theme_toggle: true,
            contact_form: true,
        }
    }
}

/// Popup overlay state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Notice { title: String, message: String },
}

/// Main application state
pub struct App<S: PrefStore> {
    pub should_quit: bool,
    pub wiring: Wiring,

    // Tab navigation
    pub tabs: TabStrip,
    pub scroll: u16,
    pub drawer_open: bool,
    pub drawer_cursor: usize,

    // Theme
    pub theme: ThemeController<S>,
    pub palette: Palette,

    // Contact form (only when wired)
    pub form: Option<ContactForm>,
    pub editing_form: bool,

    // Overlays
    pub popup: PopupState,
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl<S: PrefStore> App<S> {
    /// Create a new App instance: build the fixed tab set, apply the saved
    /// theme, wire the optional elements, and show the default section.
    pub fn new(store: S, wiring: Wiring) -> Result<Self> {
        let theme = ThemeController::init(store)?;
        let palette = Palette::from_name(theme.current());

        let mut app = Self {
            should_quit: false,
            wiring,

            tabs: TabStrip::new(content::sections()),
            scroll: 0,
            drawer_open: false,
            drawer_cursor: 0,

            theme,
            palette,

            form: wiring.contact_form.then(ContactForm::new),
            editing_form: false,

            popup: PopupState::None,
            flash_message: None,
        };

        app.activate_tab(DEFAULT_SECTION, u16::MAX);
        Ok(app)
    }

    /// Check if the narrow layout applies at `terminal_width`.
    pub fn is_narrow(terminal_width: u16) -> bool {
        terminal_width < NARROW_WIDTH
    }

    /// Activate the section with id `target`. Resets the content scroll to
    /// the top and, in the narrow layout, closes the drawer.
    pub fn activate_tab(&mut self, target: &str, terminal_width: u16) {
        self.tabs.activate(target);
        self.scroll = 0;
        self.editing_form = false;
        if Self::is_narrow(terminal_width) {
            self.drawer_open = false;
        }
    }

    /// True while the contact form has keyboard focus.
    fn form_captures_input(&self) -> bool {
        self.editing_form
            && self.form.is_some()
            && self.tabs.active_panel().map(|p| p.id.as_str()) == Some("contato")
    }

    /// Called on every loop iteration; clears expired flash messages.
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event. `terminal_width` feeds the narrow-layout checks.
    pub fn handle_key(&mut self, key: KeyEvent, terminal_width: u16) -> Result<()> {
        if self.popup != PopupState::None {
            return self.handle_popup_key(key);
        }

        if self.form_captures_input() {
            return self.handle_form_key(key);
        }

        self.handle_page_key(key, terminal_width)
    }

    /// Keys while a notice popup is open.
    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('o') | KeyCode::Enter | KeyCode::Esc => {
                self.popup = PopupState::None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Keys outside the form.
    fn handle_page_key(&mut self, key: KeyEvent, terminal_width: u16) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(target) = self.tabs.target_at(index).map(str::to_string) {
                    self.activate_tab(&target, terminal_width);
                }
            }

            KeyCode::Left | KeyCode::Char('h') if !self.drawer_open => {
                self.activate_neighbor(-1, terminal_width);
            }
            KeyCode::Right | KeyCode::Char('l') if !self.drawer_open => {
                self.activate_neighbor(1, terminal_width);
            }

            KeyCode::Char('j') | KeyCode::Down => {
                if self.drawer_open {
                    let last = self.tabs.controls.len().saturating_sub(1);
                    if self.drawer_cursor < last {
                        self.drawer_cursor += 1;
                    }
                } else {
                    self.scroll = self.scroll.saturating_add(1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.drawer_open {
                    self.drawer_cursor = self.drawer_cursor.saturating_sub(1);
                } else {
                    self.scroll = self.scroll.saturating_sub(1);
                }
            }

            KeyCode::Char('t') => {
                if self.wiring.theme_toggle {
                    self.theme.toggle()?;
                    self.palette = Palette::from_name(self.theme.current());
                    self.show_flash(&format!("Tema: {}", self.theme.current()), false);
                }
            }

            KeyCode::Char('m') => {
                if self.wiring.hamburger && Self::is_narrow(terminal_width) {
                    self.drawer_open = !self.drawer_open;
                    self.drawer_cursor = self.tabs.selected_index().unwrap_or(0);
                }
            }

            KeyCode::Enter => {
                if self.drawer_open {
                    if let Some(target) =
                        self.tabs.target_at(self.drawer_cursor).map(str::to_string)
                    {
                        self.activate_tab(&target, terminal_width);
                    }
                } else if self.form.is_some()
                    && self.tabs.active_panel().map(|p| p.id.as_str()) == Some("contato")
                {
                    self.editing_form = true;
                }
            }

            KeyCode::Esc => {
                self.drawer_open = false;
            }

            _ => {}
        }
        Ok(())
    }

    /// Activate the control `step` positions away from the selected one,
    /// wrapping around the strip.
    fn activate_neighbor(&mut self, step: isize, terminal_width: u16) {
        let count = self.tabs.controls.len();
        if count == 0 {
            return;
        }
        let current = self.tabs.selected_index().unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(count as isize) as usize;
        if let Some(target) = self.tabs.target_at(next).map(str::to_string) {
            self.activate_tab(&target, terminal_width);
        }
    }

    /// Keys while the contact form has focus.
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.editing_form = false;
            return Ok(());
        }

        // Enter on the send button runs the submit attempt.
        if key.code == KeyCode::Enter
            && self.form.as_ref().map(|f| f.focus) == Some(FormFocus::Enviar)
        {
            self.submit_form();
            return Ok(());
        }

        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab => {
                form.focus = form.focus.next();
            }
            KeyCode::BackTab => {
                form.focus = form.focus.prev();
            }
            KeyCode::Enter => match form.focus {
                FormFocus::Mensagem => {
                    if let Some(field) = form.focused_field() {
                        field.insert('\n');
                    }
                }
                _ => {
                    form.focus = form.focus.next();
                }
            },
            KeyCode::Char(c) => {
                if let Some(field) = form.focused_field() {
                    field.insert(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.focused_field() {
                    field.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(field) = form.focused_field() {
                    field.delete();
                }
            }
            KeyCode::Left => {
                if let Some(field) = form.focused_field() {
                    field.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(field) = form.focused_field() {
                    field.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(field) = form.focused_field() {
                    field.move_home();
                }
            }
            KeyCode::End => {
                if let Some(field) = form.focused_field() {
                    field.move_end();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the submit attempt. A valid submission raises the confirmation
    /// popup; an invalid one leaves the inline errors to speak for
    /// themselves.
    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        if form.submit() == SubmitOutcome::Valid {
            self.popup = PopupState::Notice {
                title: "Contato".to_string(),
                message: "Mensagem enviada com sucesso!".to_string(),
            };
        }
    }

    /// Show a flash message on the status line.
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.to_string(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::mem::MemStore;
    use crate::theme::THEME_KEY;

    const WIDE: u16 = 120;
    const NARROW: u16 = 50;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App<MemStore> {
        App::new(MemStore::default(), Wiring::default()).unwrap()
    }

    fn app_with(wiring: Wiring) -> App<MemStore> {
        App::new(MemStore::default(), wiring).unwrap()
    }

    fn type_text<S: PrefStore>(app: &mut App<S>, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)), WIDE).unwrap();
        }
    }

    #[test]
    fn test_default_state() {
        let app = app();
        assert_eq!(app.tabs.active_panel().map(|p| p.id.as_str()), Some("sobre"));
        assert_eq!(app.theme.current(), "light");
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_saved_theme_applied_on_startup() {
        let mut store = MemStore::default();
        store.set(THEME_KEY, "dark").unwrap();
        let app = App::new(store, Wiring::default()).unwrap();
        assert_eq!(app.theme.current(), "dark");
    }

    #[test]
    fn test_number_key_switches_tab() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')), WIDE).unwrap();
        assert_eq!(
            app.tabs.active_panel().map(|p| p.id.as_str()),
            Some("formacao")
        );
    }

    #[test]
    fn test_activation_resets_scroll() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('j')), WIDE).unwrap();
        app.handle_key(key(KeyCode::Char('j')), WIDE).unwrap();
        assert_eq!(app.scroll, 2);

        app.handle_key(key(KeyCode::Char('3')), WIDE).unwrap();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_drawer_closes_on_activation_when_narrow() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('m')), NARROW).unwrap();
        assert!(app.drawer_open);

        app.handle_key(key(KeyCode::Enter), NARROW).unwrap();
        assert!(!app.drawer_open);
        assert!(app.tabs.active_panel().is_some());
    }

    #[test]
    fn test_drawer_ignored_when_wide() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('m')), WIDE).unwrap();
        assert!(!app.drawer_open);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('t')), WIDE).unwrap();
        assert_eq!(app.theme.current(), "dark");

        app.handle_key(key(KeyCode::Char('t')), WIDE).unwrap();
        assert_eq!(app.theme.current(), "light");
    }

    #[test]
    fn test_unwired_theme_toggle_does_nothing() {
        let mut app = app_with(Wiring {
            theme_toggle: false,
            ..Wiring::default()
        });
        app.handle_key(key(KeyCode::Char('t')), WIDE).unwrap();
        assert_eq!(app.theme.current(), "light");
    }

    #[test]
    fn test_unwired_form_is_absent() {
        let mut app = app_with(Wiring {
            contact_form: false,
            ..Wiring::default()
        });
        app.handle_key(key(KeyCode::Char('4')), WIDE).unwrap();
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();
        assert!(!app.editing_form);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_valid_submit_raises_popup_once() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')), WIDE).unwrap();
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();
        assert!(app.editing_form);

        type_text(&mut app, "Ana");
        app.handle_key(key(KeyCode::Tab), WIDE).unwrap();
        type_text(&mut app, "ana@example.com");
        app.handle_key(key(KeyCode::Tab), WIDE).unwrap();
        type_text(&mut app, "Olá");
        app.handle_key(key(KeyCode::Tab), WIDE).unwrap();
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();

        assert!(matches!(app.popup, PopupState::Notice { .. }));
        let form = app.form.as_ref().unwrap();
        assert!(form.nome.is_empty());
        assert_eq!(form.status, "Mensagem enviada com sucesso! Obrigada.");

        // Dismiss, then an empty resubmit must not raise it again.
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();
        assert_eq!(app.popup, PopupState::None);

        // Focus is still on Enviar after the successful submit.
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();
        assert_eq!(app.popup, PopupState::None);
        assert_eq!(
            app.form.as_ref().unwrap().status,
            "Corrija os campos em destaque."
        );
    }

    #[test]
    fn test_q_types_into_form_instead_of_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')), WIDE).unwrap();
        app.handle_key(key(KeyCode::Enter), WIDE).unwrap();

        app.handle_key(key(KeyCode::Char('q')), WIDE).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.form.as_ref().unwrap().nome.value, "q");
    }

    #[test]
    fn test_arrow_keys_cycle_tabs() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right), WIDE).unwrap();
        assert_eq!(
            app.tabs.active_panel().map(|p| p.id.as_str()),
            Some("formacao")
        );

        app.handle_key(key(KeyCode::Left), WIDE).unwrap();
        app.handle_key(key(KeyCode::Left), WIDE).unwrap();
        assert_eq!(
            app.tabs.active_panel().map(|p| p.id.as_str()),
            Some("contato")
        );
    }
}
