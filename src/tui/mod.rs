//! Terminal user interface: wizard steps, components and terminal setup.
//!
//! This module contains the booking wizard, its steps, the component traits
//! they implement, and the helpers that put the terminal into (and out of)
//! raw mode.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod booking_wizard;
pub mod component;
pub mod dates_form;
pub mod model_selection;
pub mod theme;
pub mod wizard_context;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

// Re-export TUI components
pub use booking_wizard::{BookingWizardState, WizardStep};
pub use component::{ComponentEvent, ContextualComponent};
pub use dates_form::DatesForm;
pub use model_selection::{current_selection, ModelSelection};
pub use theme::Theme;
pub use wizard_context::WizardContext;

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
