//! Model selection behavior through the public library API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use vanpick::assets::AssetResolver;
use vanpick::models::{Catalog, FieldUpdate};
use vanpick::tui::{
    booking_wizard, current_selection, BookingWizardState, ContextualComponent, ModelSelection,
    Theme, WizardContext, WizardStep,
};

mod fixtures;
use fixtures::*;

fn render_text(step: &ModelSelection, ctx: &WizardContext) -> String {
    let backend = TestBackend::new(140, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            step.render(f, area, &Theme::dark(), ctx);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(state: &mut BookingWizardState, code: KeyCode) -> bool {
    booking_wizard::handle_input(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

// ============================================================================
// Auto-selection
// ============================================================================

#[test]
fn test_mount_auto_selects_first_model_in_input_order() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);

    assert!(step.run_effects(&mut ctx));

    let chosen = current_selection(&ctx.form).expect("a model should be chosen");
    assert_eq!(chosen.id, 10);
    assert_eq!(ctx.form.model.as_deref(), Some("Aria"));
    // Aria is second in rendering order (Class C comes first)
    assert_eq!(step.cursor(), 1);
}

#[test]
fn test_existing_selection_is_left_alone() {
    let mut ctx = test_context(test_catalog_basic());
    let atlas = ctx.catalog().models[2].clone();
    ctx.form.apply(FieldUpdate::select_model(&atlas));

    let mut step = ModelSelection::mount(&ctx);
    assert!(!step.run_effects(&mut ctx));

    assert_eq!(ctx.form.model.as_deref(), Some("Atlas"));
    assert_eq!(step.cursor(), 2);
}

#[test]
fn test_empty_catalog_selects_nothing_and_hides_details() {
    let mut ctx = test_context(Catalog::default());
    let mut step = ModelSelection::mount(&ctx);

    assert!(!step.run_effects(&mut ctx));
    assert!(ctx.form.model.is_none());
    assert!(ctx.form.model_data.is_none());

    let text = render_text(&step, &ctx);
    assert!(text.contains("No models available"));
    assert!(!text.contains("Image:"));
}

#[test]
fn test_effect_runs_once_per_dependency_change() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);

    assert!(step.run_effects(&mut ctx));
    assert!(!step.run_effects(&mut ctx));
    assert!(!step.run_effects(&mut ctx));
    assert_eq!(ctx.form.model.as_deref(), Some("Aria"));
}

// ============================================================================
// Catalog reloads
// ============================================================================

#[test]
fn test_reload_with_new_first_model_keeps_choice() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);
    step.run_effects(&mut ctx);

    ctx.replace_catalog(test_catalog_reordered());
    assert!(!step.run_effects(&mut ctx));
    assert_eq!(ctx.form.model.as_deref(), Some("Aria"));
}

#[test]
fn test_clear_then_reload_picks_new_first_model() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);
    step.run_effects(&mut ctx);

    ctx.form.clear_model();
    ctx.replace_catalog(test_catalog_reordered());
    assert!(step.run_effects(&mut ctx));
    assert_eq!(ctx.form.model.as_deref(), Some("Bolt"));
    assert_eq!(ctx.form.model_data.as_ref().map(|m| m.id), Some(20));
}

#[test]
fn test_reload_to_smaller_catalog_clamps_cursor() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);
    step.run_effects(&mut ctx);
    for _ in 0..5 {
        step.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut ctx);
    }
    assert_eq!(step.cursor(), 2);

    let mut smaller = test_catalog_basic();
    smaller.models.truncate(1);
    ctx.replace_catalog(smaller);
    step.run_effects(&mut ctx);

    assert_eq!(step.cursor(), 0);
}

// ============================================================================
// Lifecycle and guards
// ============================================================================

#[test]
fn test_no_effect_after_unmount() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);
    step.unmount();

    assert!(!step.run_effects(&mut ctx));
    assert!(ctx.form.model.is_none());
}

#[test]
fn test_off_catalog_model_is_ignored() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);

    assert!(!step.select_model(&test_model(99, 1, "Ghost", 2), &mut ctx));
    assert!(ctx.form.model.is_none());
}

#[test]
fn test_selection_writes_both_fields_together() {
    let mut ctx = test_context(test_catalog_basic());
    let mut step = ModelSelection::mount(&ctx);
    let bolt = ctx.catalog().models[1].clone();

    assert!(step.select_model(&bolt, &mut ctx));
    assert_eq!(ctx.form.model.as_deref(), Some("Bolt"));
    assert_eq!(ctx.form.model_data.as_ref(), Some(&bolt));

    // Selecting the same model again changes nothing
    assert!(!step.select_model(&bolt, &mut ctx));
}

#[test]
fn test_remote_image_location() {
    let mut ctx = WizardContext::new(
        test_catalog_basic(),
        AssetResolver::new(Some("https://cdn.example.com/storage/".to_string()), TEST_PLACEHOLDER),
    );
    let mut step = ModelSelection::mount(&ctx);
    step.run_effects(&mut ctx);

    let text = render_text(&step, &ctx);
    assert!(text.contains("https://cdn.example.com/storage/vans/10.jpg"));
    assert!(!text.contains("showing placeholder"));
}

// ============================================================================
// Whole wizard
// ============================================================================

#[test]
fn test_wizard_produces_complete_form() {
    let mut state = BookingWizardState::new(
        test_catalog_basic(),
        AssetResolver::new(None, TEST_PLACEHOLDER),
    );
    state.after_render();
    assert_eq!(state.form().model.as_deref(), Some("Aria"));

    assert!(!press(&mut state, KeyCode::Enter));
    assert_eq!(state.current_step, WizardStep::Dates);

    for c in "2026-07-01".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Tab);
    for c in "2026-07-08".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_step, WizardStep::Confirmation);

    assert!(press(&mut state, KeyCode::Enter));
    assert!(state.is_complete);

    let json: serde_json::Value = serde_json::to_value(state.form()).unwrap();
    assert_eq!(json["model"], "Aria");
    assert_eq!(json["modelData"]["id"], 10);
    assert_eq!(json["pickupDate"], "2026-07-01");
    assert_eq!(json["returnDate"], "2026-07-08");
}
