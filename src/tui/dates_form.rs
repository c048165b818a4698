//! Rental dates wizard step (pickup and return day).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{FieldUpdate, FormData};
use crate::tui::component::{ComponentEvent, ContextualComponent};
use crate::tui::wizard_context::WizardContext;
use crate::tui::Theme;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// First rental day
    Pickup,
    /// Last rental day
    Return,
}

impl DateField {
    const fn toggle(self) -> Self {
        match self {
            Self::Pickup => Self::Return,
            Self::Return => Self::Pickup,
        }
    }
}

/// Text inputs for the rental period.
#[derive(Debug, Clone)]
pub struct DatesForm {
    /// Pickup date as typed
    pub pickup_input: String,
    /// Return date as typed
    pub return_input: String,
    /// Focused input
    pub focus: DateField,
}

impl DatesForm {
    /// Creates the inputs, pre-filled from dates already in the form.
    #[must_use]
    pub fn from_form(form: &FormData) -> Self {
        let format = |date: Option<NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };

        Self {
            pickup_input: format(form.pickup_date),
            return_input: format(form.return_date),
            focus: DateField::Pickup,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            DateField::Pickup => &mut self.pickup_input,
            DateField::Return => &mut self.return_input,
        }
    }

    /// Parses both inputs and checks the return day is after pickup.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate)> {
        let pickup = parse_date(&self.pickup_input).context("Invalid pickup date")?;
        let ret = parse_date(&self.return_input).context("Invalid return date")?;

        if ret <= pickup {
            anyhow::bail!("Return date must be after the pickup date");
        }

        Ok((pickup, ret))
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("date is required (YYYY-MM-DD)");
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .with_context(|| format!("'{input}' is not a YYYY-MM-DD date"))
}

impl ContextualComponent for DatesForm {
    type Context = WizardContext;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, ctx: &mut WizardContext) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let input = self.focused_input();
                if input.len() < 10 {
                    input.push(c);
                }
                None
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                None
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Enter => match self.validate() {
                Ok((pickup, ret)) => {
                    ctx.form.apply([
                        FieldUpdate::PickupDate(Some(pickup)),
                        FieldUpdate::ReturnDate(Some(ret)),
                    ]);
                    Some(ComponentEvent::Advance)
                }
                // `{:#}` keeps the context chain on one line
                Err(e) => Some(ComponentEvent::Invalid(format!("{e:#}"))),
            },
            KeyCode::Esc => Some(ComponentEvent::Back),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, ctx: &WizardContext) {
        let field_line = |label: &str, value: &str, field: DateField| {
            let focused = self.focus == field;
            let style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{label:<14}"), Style::default().fg(theme.primary)),
                Span::styled(format!("> {value}{cursor}"), style),
            ])
        };

        let mut text = vec![
            Line::from(""),
            Line::from("Enter the rental period (YYYY-MM-DD):"),
            Line::from(""),
            field_line("Pickup date:", &self.pickup_input, DateField::Pickup),
            field_line("Return date:", &self.return_input, DateField::Return),
            Line::from(""),
        ];

        if let Ok((pickup, ret)) = self.validate() {
            let nights = (ret - pickup).num_days();
            text.push(Line::from(Span::styled(
                format!("{nights} night(s)"),
                Style::default().fg(theme.text_muted),
            )));
        }

        if let Some(model) = ctx.form.model.as_deref() {
            text.push(Line::from(Span::styled(
                format!("Model: {model}"),
                Style::default().fg(theme.text_muted),
            )));
        }

        let paragraph = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Rental Dates ")
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }
}
