//! Contact form state and validation
//!
//! Three required fields: nome, e-mail, mensagem. Submission is intercepted
//! and validated locally; on success the fields are cleared and a
//! confirmation is shown. Nothing is sent anywhere.

use regex::Regex;
use std::sync::OnceLock;

/// Basic e-mail shape check: something@something.something, no whitespace.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// Check whether `value` looks like an e-mail address.
pub fn valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Editable text field with a cursor (character index).
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub cursor: usize,
}

impl FieldState {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Byte offset of character index `idx`.
    fn byte_offset(&self, idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Which form element holds the keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Nome,
    Email,
    Mensagem,
    Enviar,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Nome => FormFocus::Email,
            FormFocus::Email => FormFocus::Mensagem,
            FormFocus::Mensagem => FormFocus::Enviar,
            FormFocus::Enviar => FormFocus::Nome,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Nome => FormFocus::Enviar,
            FormFocus::Email => FormFocus::Nome,
            FormFocus::Mensagem => FormFocus::Email,
            FormFocus::Enviar => FormFocus::Mensagem,
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    Invalid,
}

/// Contact form state: field values, per-field errors, and the status line.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub nome: FieldState,
    pub email: FieldState,
    pub mensagem: FieldState,

    pub nome_error: String,
    pub email_error: String,
    pub mensagem_error: String,

    pub status: String,
    pub status_ok: bool,

    pub focus: FormFocus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field currently focused, if the focus is on a field.
    pub fn focused_field(&mut self) -> Option<&mut FieldState> {
        match self.focus {
            FormFocus::Nome => Some(&mut self.nome),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Mensagem => Some(&mut self.mensagem),
            FormFocus::Enviar => None,
        }
    }

    /// Validate and "send". Errors and status are cleared up front; the
    /// three fields are then checked in order, each independently. On any
    /// failure the field values are left in place. On success the fields
    /// are cleared; the caller is responsible for surfacing the
    /// confirmation notice.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.nome_error.clear();
        self.email_error.clear();
        self.mensagem_error.clear();
        self.status.clear();
        self.status_ok = false;

        let mut ok = true;

        if self.nome.value.trim().is_empty() {
            self.nome_error = "Por favor insira seu nome.".to_string();
            ok = false;
        }

        let email = self.email.value.trim();
        if email.is_empty() {
            self.email_error = "Por favor insira seu e-mail.".to_string();
            ok = false;
        } else if !valid_email(email) {
            self.email_error =
                "Formato de e-mail inválido. Ex: usuario@dominio.com".to_string();
            ok = false;
        }

        if self.mensagem.value.trim().is_empty() {
            self.mensagem_error = "Por favor escreva uma mensagem.".to_string();
            ok = false;
        }

        if !ok {
            self.status = "Corrija os campos em destaque.".to_string();
            return SubmitOutcome::Invalid;
        }

        self.nome.clear();
        self.email.clear();
        self.mensagem.clear();
        self.status = "Mensagem enviada com sucesso! Obrigada.".to_string();
        self.status_ok = true;

        SubmitOutcome::Valid
    }
}
