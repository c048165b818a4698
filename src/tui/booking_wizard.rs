//! Booking wizard: model, rental dates, confirmation.
//!
//! The wizard owns the [`WizardContext`] (catalog and form record) and hands
//! it to the active step. Steps are torn down when the user leaves them and
//! rebuilt with fresh local state on return; the form keeps every choice.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::assets::AssetResolver;
use crate::constants::APP_NAME;
use crate::models::{Catalog, FormData};
use crate::tui::component::{ComponentEvent, ContextualComponent};
use crate::tui::dates_form::DatesForm;
use crate::tui::model_selection::ModelSelection;
use crate::tui::wizard_context::WizardContext;
use crate::tui::Theme;

/// Booking wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choose a vehicle model
    Model,
    /// Enter pickup and return dates
    Dates,
    /// Review and confirm
    Confirmation,
}

impl WizardStep {
    /// Gets the next step in the wizard
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Model => Some(Self::Dates),
            Self::Dates => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    /// Gets the previous step in the wizard
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Model => None,
            Self::Dates => Some(Self::Model),
            Self::Confirmation => Some(Self::Dates),
        }
    }

    /// Gets the step title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Model => "Step 1 of 3: Model",
            Self::Dates => "Step 2 of 3: Rental Dates",
            Self::Confirmation => "Step 3 of 3: Confirm Booking",
        }
    }
}

/// Booking wizard state
#[derive(Debug, Clone)]
pub struct BookingWizardState {
    /// Current wizard step
    pub current_step: WizardStep,
    /// Catalog and form record shared with the steps
    pub context: WizardContext,
    /// Model step (unmounted while another step is active)
    pub model_step: ModelSelection,
    /// Dates step inputs
    pub dates_step: DatesForm,
    /// Error message to display
    pub error_message: Option<String>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether the user confirmed the booking
    pub is_complete: bool,
}

impl BookingWizardState {
    /// Creates a wizard on the model step with an empty form.
    #[must_use]
    pub fn new(catalog: Catalog, assets: AssetResolver) -> Self {
        let context = WizardContext::new(catalog, assets);
        let dates_step = DatesForm::from_form(&context.form);
        let model_step = ModelSelection::mount(&context);

        Self {
            current_step: WizardStep::Model,
            context,
            model_step,
            dates_step,
            error_message: None,
            status_message: None,
            is_complete: false,
        }
    }

    /// The form record collected so far.
    #[must_use]
    pub const fn form(&self) -> &FormData {
        &self.context.form
    }

    /// Runs post-render effects of the active step.
    pub fn after_render(&mut self) {
        if self.model_step.run_effects(&mut self.context) {
            if let Some(model) = self.context.form.model.as_deref() {
                self.status_message = Some(format!("Selected {model}"));
            }
        }
    }

    /// Swaps in a freshly loaded catalog.
    pub fn reload_catalog(&mut self, catalog: Catalog) {
        let count = catalog.models.len();
        self.context.replace_catalog(catalog);
        self.error_message = None;
        self.status_message = Some(format!("Catalog reloaded ({count} models)"));
    }

    /// Advances to the next step
    pub fn next_step(&mut self) {
        self.error_message = None;

        match self.current_step {
            WizardStep::Model => {
                if !self.context.form.has_model() {
                    self.error_message = Some("Select a model to continue".to_string());
                    return;
                }
                self.leave_model_step();
                self.dates_step = DatesForm::from_form(&self.context.form);
                self.current_step = WizardStep::Dates;
            }
            WizardStep::Dates => {
                self.current_step = WizardStep::Confirmation;
            }
            WizardStep::Confirmation => {
                tracing::info!(model = ?self.context.form.model, "booking confirmed");
                self.is_complete = true;
            }
        }
    }

    /// Goes back to the previous step
    pub fn previous_step(&mut self) {
        self.error_message = None;

        if let Some(prev_step) = self.current_step.previous() {
            self.current_step = prev_step;

            match prev_step {
                WizardStep::Model => self.model_step = ModelSelection::mount(&self.context),
                WizardStep::Dates => self.dates_step = DatesForm::from_form(&self.context.form),
                WizardStep::Confirmation => {}
            }
        }
    }

    fn leave_model_step(&mut self) {
        self.model_step.unmount();
    }

    /// Applies an event emitted by the active step.
    ///
    /// Returns `true` if the wizard should exit.
    fn apply_event(&mut self, event: ComponentEvent) -> bool {
        match event {
            ComponentEvent::ModelSelected(name) => {
                self.error_message = None;
                self.status_message = Some(format!("Selected {name}"));
            }
            ComponentEvent::CategoryHighlighted(id) => {
                if let Some(category) = self.context.catalog().category(id) {
                    self.status_message = Some(category.name.clone());
                }
            }
            ComponentEvent::Advance => self.next_step(),
            ComponentEvent::Back => self.previous_step(),
            ComponentEvent::Invalid(message) => self.error_message = Some(message),
            ComponentEvent::Cancelled => {
                tracing::info!("booking wizard cancelled");
                self.leave_model_step();
                return true;
            }
        }

        false
    }
}

/// Renders the booking wizard
pub fn render(f: &mut Frame, state: &BookingWizardState, theme: &Theme) {
    let size = f.area();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Instructions
            Constraint::Length(1), // Status / error
        ])
        .split(size);

    let title = Paragraph::new(state.current_step.title())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_NAME} ")),
        );
    f.render_widget(title, vertical_chunks[0]);

    match state.current_step {
        WizardStep::Model => {
            state
                .model_step
                .render(f, vertical_chunks[1], theme, &state.context);
        }
        WizardStep::Dates => {
            state
                .dates_step
                .render(f, vertical_chunks[1], theme, &state.context);
        }
        WizardStep::Confirmation => render_confirmation(f, state, theme, vertical_chunks[1]),
    }

    render_instructions(f, state, theme, vertical_chunks[2]);

    if let Some(error) = &state.error_message {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.error))
            .alignment(Alignment::Center);
        f.render_widget(error_widget, vertical_chunks[3]);
    } else if let Some(status) = &state.status_message {
        let status_widget = Paragraph::new(status.as_str())
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(status_widget, vertical_chunks[3]);
    }
}

fn render_confirmation(f: &mut Frame, state: &BookingWizardState, theme: &Theme, area: Rect) {
    let not_set = "<not set>".to_string();
    let form = state.form();
    let model = form.model.clone().unwrap_or_else(|| not_set.clone());
    let capacity = form
        .model_data
        .as_ref()
        .map_or_else(|| not_set.clone(), |m| m.capacity_label());
    let pickup = form
        .pickup_date
        .map_or_else(|| not_set.clone(), |d| d.to_string());
    let ret = form
        .return_date
        .map_or_else(|| not_set.clone(), |d| d.to_string());
    let nights = form
        .nights()
        .map_or_else(|| not_set.clone(), |n| n.to_string());

    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.primary));

    let text = vec![
        Line::from(""),
        Line::from("Please confirm your booking:"),
        Line::from(""),
        Line::from(vec![label("Model:     "), Span::raw(model)]),
        Line::from(vec![label("Capacity:  "), Span::raw(capacity)]),
        Line::from(vec![label("Pickup:    "), Span::raw(pickup)]),
        Line::from(vec![label("Return:    "), Span::raw(ret)]),
        Line::from(vec![label("Nights:    "), Span::raw(nights)]),
        Line::from(""),
        Line::from("Press Enter to confirm, or Esc to go back."),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Confirmation"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, state: &BookingWizardState, theme: &Theme, area: Rect) {
    let instructions = match state.current_step {
        WizardStep::Model => {
            "↑↓: Navigate  |  Tab: Category  |  Space: Select  |  Enter: Continue  |  Ctrl+R: Reload  |  Esc: Exit"
        }
        WizardStep::Dates => "Type date  |  Tab: Switch field  |  Enter: Continue  |  Esc: Back",
        WizardStep::Confirmation => "Enter: Confirm & Exit  |  Esc: Back",
    };

    let paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Handles keyboard input for the booking wizard
///
/// Returns `true` when the wizard should exit (confirmed or cancelled).
pub fn handle_input(state: &mut BookingWizardState, key: KeyEvent) -> Result<bool> {
    let event = match state.current_step {
        WizardStep::Model => state.model_step.handle_input(key, &mut state.context),
        WizardStep::Dates => state.dates_step.handle_input(key, &mut state.context),
        WizardStep::Confirmation => match key.code {
            KeyCode::Enter => Some(ComponentEvent::Advance),
            KeyCode::Esc => Some(ComponentEvent::Back),
            _ => None,
        },
    };

    let Some(event) = event else {
        return Ok(false);
    };

    let should_exit = state.apply_event(event);
    Ok(should_exit || state.is_complete)
}
