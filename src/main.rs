//! folio - terminal portfolio page
//!
//! A single-page portfolio rendered in the terminal.
//!
//! Features:
//! - Tabbed navigation between the page sections
//! - Light/dark theme, persisted across runs
//! - Contact form with inline validation
//!
//! Usage: folio

mod app;
mod config;
mod content;
mod form;
mod tabs;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{App, Wiring};
use config::FileStore;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let result = run_app();

    // Always try to restore terminal state, even on error
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"folio - terminal portfolio page

USAGE:
    folio [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    1-4              Open a section
    Left/Right       Previous/next section
    j/k              Scroll the section content
    t                Toggle light/dark theme
    m                Open the menu (narrow terminals)
    Enter            Fill in the contact form (Contato section)
    q                Quit

SECTIONS:
    [1] Sobre        About me
    [2] Formação     Education
    [3] Portfólio    Projects
    [4] Contato      Contact form

PREFS:
    ~/.config/folio/prefs.toml
"#
    );
}

fn run_app() -> Result<()> {
    // Load the persisted preferences
    let store = FileStore::load().context("Failed to load preferences")?;

    // Create application state
    let mut app =
        App::new(store, Wiring::default()).context("Failed to initialize application")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<FileStore>) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        let width = terminal.size()?.width;

        // Expire flash messages
        app.tick();

        // Poll for events with timeout (so flash expiry is redrawn)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, width)?;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
