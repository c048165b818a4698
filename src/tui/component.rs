//! Component trait pattern for TUI components.
//!
//! This module defines the trait and event type used to implement self-contained,
//! testable TUI components that handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that works on state owned by the parent.
///
/// Components manage their own local state, handle keyboard input, and emit
/// events to communicate with the parent. Wizard steps read the catalog and
/// write the shared form record, both of which belong to the wizard, so input
/// handling gets mutable access to the context; rendering only reads.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    fn handle_input(&mut self, key: KeyEvent, context: &mut Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events emitted by wizard steps.
///
/// Form writes happen inside the step; these events only tell the parent
/// what happened so it can update the status line or change steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User picked a model (carries the model name)
    ModelSelected(String),

    /// User highlighted a category heading
    CategoryHighlighted(i64),

    /// Step is done; move to the next one
    Advance,

    /// Return to the previous step
    Back,

    /// Input was rejected; message is shown to the user
    Invalid(String),

    /// User cancelled the wizard
    Cancelled,
}
