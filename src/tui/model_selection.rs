//! "Select your model" wizard step.
//!
//! Lists the catalog's categories with their models, lets the user highlight
//! a category and pick a model, and shows the chosen model's details
//! (image, amenities, description).
//!
//! The step owns only cosmetic state: the highlighted category and the list
//! cursor. The chosen model lives in the wizard's [`FormData`], written
//! through [`FormData::apply`] as one `model` + `modelData` batch.
//!
//! # Auto-selection
//!
//! [`ModelSelection::run_effects`] is the post-render hook. Whenever the
//! catalog revision or the form's `model` differs from the last evaluation,
//! it checks whether a model is chosen and, if not, picks the first catalog
//! model. A reload never overwrites an existing choice; clearing the form
//! makes the next evaluation pick again. After [`ModelSelection::unmount`]
//! the hook does nothing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::assets::{FallbackReason, ImageView};
use crate::models::{Catalog, FieldUpdate, FormData, VehicleModel};
use crate::tui::component::{ComponentEvent, ContextualComponent};
use crate::tui::wizard_context::WizardContext;
use crate::tui::Theme;

/// The chosen model's stored record, if any.
#[must_use]
pub fn current_selection(form: &FormData) -> Option<&VehicleModel> {
    form.current_selection()
}

/// Inputs the auto-select hook depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EffectDeps {
    catalog_revision: u64,
    model: Option<String>,
}

/// State of the model selection step.
#[derive(Debug, Clone)]
pub struct ModelSelection {
    /// Highlighted category heading (cosmetic only)
    selected_category: Option<i64>,
    /// Position in the grouped model list
    cursor: usize,
    mounted: bool,
    last_effect_deps: Option<EffectDeps>,
    /// Image of the chosen model after its load attempt, keyed by model id
    image: Option<(i64, ImageView)>,
}

impl ModelSelection {
    /// Creates a mounted step with no category highlighted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_category: None,
            cursor: 0,
            mounted: true,
            last_effect_deps: None,
            image: None,
        }
    }

    /// Creates a mounted step with the cursor on the model already chosen
    /// in the form, if any.
    #[must_use]
    pub fn mount(ctx: &WizardContext) -> Self {
        let mut step = Self::new();
        if let Some(model) = current_selection(&ctx.form) {
            step.sync_cursor(ctx.catalog(), model.id);
        }
        step
    }

    /// Highlighted category, if any.
    #[must_use]
    pub const fn selected_category(&self) -> Option<i64> {
        self.selected_category
    }

    /// Position of the list cursor in [`Catalog::grouped_models`] order.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns false once the step has been torn down.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Tears the step down. Pending effects will not run afterwards.
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!("model selection step unmounted");
        }
        self.mounted = false;
    }

    /// Highlights a category. Any id is accepted, known or not.
    pub fn select_category(&mut self, category_id: i64) {
        self.selected_category = Some(category_id);
    }

    /// Chooses `model`, writing `model` and `modelData` together.
    ///
    /// Returns `true` if the form changed. Models that are not part of the
    /// current catalog are ignored; passing one is a caller bug.
    pub fn select_model(&mut self, model: &VehicleModel, ctx: &mut WizardContext) -> bool {
        if !ctx.catalog().contains_model(model.id) {
            tracing::warn!(
                model_id = model.id,
                name = %model.name,
                "ignoring selection of a model that is not in the catalog"
            );
            return false;
        }

        let changed = ctx.form.apply(FieldUpdate::select_model(model));
        if changed {
            tracing::info!(model_id = model.id, name = %model.name, "model selected");
            self.image = None;
        }
        self.sync_cursor(ctx.catalog(), model.id);
        changed
    }

    /// Post-render hook: evaluates auto-selection when its inputs changed.
    ///
    /// Returns `true` if the form was written.
    pub fn run_effects(&mut self, ctx: &mut WizardContext) -> bool {
        if !self.mounted {
            return false;
        }

        let deps = EffectDeps {
            catalog_revision: ctx.catalog_revision(),
            model: ctx.form.model.clone(),
        };

        let mut changed = false;
        if self.last_effect_deps.as_ref() != Some(&deps) {
            if self
                .last_effect_deps
                .as_ref()
                .is_some_and(|last| last.catalog_revision != deps.catalog_revision)
            {
                self.clamp_cursor(ctx.catalog());
            }
            self.last_effect_deps = Some(deps);
            changed = self.auto_select(ctx);
        }

        self.refresh_image(ctx);
        changed
    }

    /// Picks the first catalog model when nothing is chosen yet.
    fn auto_select(&mut self, ctx: &mut WizardContext) -> bool {
        if ctx.form.has_model() {
            return false;
        }

        let Some(first) = ctx.catalog().first_model().cloned() else {
            return false;
        };

        let changed = self.select_model(&first, ctx);
        if changed {
            tracing::info!(name = %first.name, "auto-selected default model");
        }
        changed
    }

    /// Loads the chosen model's image once per selection.
    fn refresh_image(&mut self, ctx: &WizardContext) {
        let Some(model) = current_selection(&ctx.form) else {
            self.image = None;
            return;
        };

        if self.image.as_ref().is_some_and(|(id, _)| *id == model.id) {
            return;
        }

        let mut view = ctx.assets.resolve(model.inner_image.as_deref());
        view.probe();
        self.image = Some((model.id, view));
    }

    /// Image view for `model`, using the loaded one when available.
    fn image_for(&self, model: &VehicleModel, ctx: &WizardContext) -> ImageView {
        match &self.image {
            Some((id, view)) if *id == model.id => view.clone(),
            _ => ctx.assets.resolve(model.inner_image.as_deref()),
        }
    }

    fn sync_cursor(&mut self, catalog: &Catalog, model_id: i64) {
        if let Some(pos) = catalog
            .grouped_models()
            .iter()
            .position(|model| model.id == model_id)
        {
            self.cursor = pos;
        }
    }

    fn clamp_cursor(&mut self, catalog: &Catalog) {
        let len = catalog.grouped_models().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn move_cursor(&mut self, catalog: &Catalog, down: bool) {
        let len = catalog.grouped_models().len();
        if len == 0 {
            self.cursor = 0;
        } else if down {
            self.cursor = (self.cursor + 1).min(len - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Highlights the next (or previous) category and moves the cursor to
    /// its first model.
    fn cycle_category(&mut self, catalog: &Catalog, forward: bool) -> Option<i64> {
        let count = catalog.categories.len();
        if count == 0 {
            return None;
        }

        let current = self
            .selected_category
            .and_then(|id| catalog.categories.iter().position(|cat| cat.id == id));

        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };

        let category_id = catalog.categories[next].id;
        self.select_category(category_id);

        if let Some(first) = catalog.group_by_category(category_id).first() {
            let first_id = first.id;
            self.sync_cursor(catalog, first_id);
        }

        Some(category_id)
    }

    fn render_catalog(&self, f: &mut Frame, area: Rect, theme: &Theme, ctx: &WizardContext) {
        let catalog = ctx.catalog();
        let chosen = ctx.form.model.as_deref();
        let mut lines: Vec<Line> = Vec::new();
        let mut position = 0;

        for category in &catalog.categories {
            let highlighted = self.selected_category == Some(category.id);
            let heading_style = if highlighted {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            };
            let marker = if highlighted { "▸ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", category.name),
                heading_style,
            )));

            let models = catalog.group_by_category(category.id);
            if models.is_empty() {
                lines.push(Line::from(Span::styled(
                    "    (no models)",
                    Style::default().fg(theme.text_muted),
                )));
            }

            for model in models {
                let cursor = if position == self.cursor { "  ► " } else { "    " };
                let button_style = if chosen == Some(model.name.as_str()) {
                    Style::default()
                        .bg(theme.selected_bg)
                        .fg(theme.selected_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(theme.surface).fg(theme.text)
                };
                lines.push(Line::from(vec![
                    Span::raw(cursor),
                    Span::styled(format!(" {} ", model.name), button_style),
                ]));
                position += 1;
            }

            lines.push(Line::from(""));
        }

        if catalog.categories.is_empty() {
            lines.push(Line::from(Span::styled(
                "No models available",
                Style::default().fg(theme.text_muted),
            )));
        }

        let list = Paragraph::new(lines).block(
            Block::default()
                .title(" Models ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(list, area);
    }

    fn render_details(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        ctx: &WizardContext,
        model: &VehicleModel,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Image
                Constraint::Length(4), // Amenities
                Constraint::Min(3),    // Name and description
            ])
            .split(area);

        // Image
        let image = self.image_for(model, ctx);
        let mut image_lines = vec![Line::from(vec![
            Span::styled("Image: ", Style::default().fg(theme.primary)),
            Span::raw(image.location().to_string()),
        ])];
        match image.fallback_reason() {
            Some(FallbackReason::Absent) => image_lines.push(Line::from(Span::styled(
                "(no image, showing placeholder)",
                Style::default().fg(theme.text_muted),
            ))),
            Some(FallbackReason::LoadFailed) => image_lines.push(Line::from(Span::styled(
                "(image failed to load, showing placeholder)",
                Style::default().fg(theme.warning),
            ))),
            None => {}
        }
        let image_widget = Paragraph::new(image_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(model.name.as_str()));
        f.render_widget(image_widget, chunks[0]);

        // Amenities
        let amenity_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);
        for (amenity, amenity_area) in model.amenities().iter().zip(amenity_areas.iter()) {
            let widget = Paragraph::new(vec![
                Line::from(amenity.glyph()),
                Line::from(Span::styled(
                    amenity.to_string(),
                    Style::default().fg(theme.text),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(widget, *amenity_area);
        }

        // Name and description
        let text = vec![
            Line::from(Span::styled(
                model.name.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(model.description.as_str()),
        ];
        let description = Paragraph::new(text).wrap(Wrap { trim: true });
        f.render_widget(description, chunks[2]);
    }
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualComponent for ModelSelection {
    type Context = WizardContext;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, ctx: &mut WizardContext) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(ctx.catalog(), false);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(ctx.catalog(), true);
                None
            }
            KeyCode::Tab => self
                .cycle_category(ctx.catalog(), true)
                .map(ComponentEvent::CategoryHighlighted),
            KeyCode::BackTab => self
                .cycle_category(ctx.catalog(), false)
                .map(ComponentEvent::CategoryHighlighted),
            KeyCode::Char(' ') => {
                let target = ctx
                    .catalog()
                    .grouped_models()
                    .get(self.cursor)
                    .map(|model| (*model).clone())?;
                self.select_model(&target, ctx);
                Some(ComponentEvent::ModelSelected(target.name))
            }
            KeyCode::Enter => {
                if ctx.form.has_model() {
                    Some(ComponentEvent::Advance)
                } else {
                    Some(ComponentEvent::Invalid(
                        "Select a model to continue".to_string(),
                    ))
                }
            }
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, ctx: &WizardContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(area);

        let title = Paragraph::new("Select Your Model")
            .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_catalog(f, columns[0], theme, ctx);

        if let Some(model) = current_selection(&ctx.form) {
            self.render_details(f, columns[1], theme, ctx, model);
        }
    }
}
