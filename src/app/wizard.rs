//! Terminal loop for the booking wizard.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::assets::AssetResolver;
use crate::config::Config;
use crate::models::{Catalog, FormData};
use crate::tui::{self, booking_wizard, BookingWizardState, Theme};

/// Runs the booking wizard and writes the confirmed form as JSON.
///
/// `catalog_path` is re-read on Ctrl+R. The form goes to `output` when
/// given, otherwise to stdout once the terminal has been restored. Nothing
/// is written when the user cancels.
pub fn run_booking_wizard_terminal(
    config: &Config,
    catalog: Catalog,
    catalog_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let assets = AssetResolver::from_config(&config.assets);
    let mut state = BookingWizardState::new(catalog, assets);

    let mut terminal = tui::setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut state, config, catalog_path);

    // Restore terminal even if the loop failed
    tui::restore_terminal(terminal)?;
    result?;

    if state.is_complete {
        write_form(state.form(), output)?;
    } else {
        println!("Booking cancelled.");
    }

    Ok(())
}

fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BookingWizardState,
    config: &Config,
    catalog_path: &Path,
) -> Result<()> {
    loop {
        // Re-resolve theme each frame so Auto follows OS theme changes
        let theme = Theme::from_mode(config.ui.theme_mode);

        terminal.draw(|f| {
            booking_wizard::render(f, state, &theme);
        })?;

        state.after_render();

        // Poll for events with timeout
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        if is_ctrl(&key, 'c') {
            tracing::info!("interrupted");
            return Ok(());
        }

        if is_ctrl(&key, 'r') {
            reload_catalog(state, catalog_path);
            continue;
        }

        if booking_wizard::handle_input(state, key)? {
            return Ok(());
        }
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Re-reads the catalog file. A failed reload keeps the current catalog.
fn reload_catalog(state: &mut BookingWizardState, catalog_path: &Path) {
    match Catalog::load(catalog_path) {
        Ok(catalog) => state.reload_catalog(catalog),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "catalog reload failed");
            state.error_message = Some(format!("Failed to reload catalog: {e:#}"));
        }
    }
}

/// Writes the form record as pretty JSON to `output`, or stdout.
pub fn write_form(form: &FormData, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(form).context("Failed to serialize booking")?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write booking file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "booking written");
            println!("Booking saved to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
