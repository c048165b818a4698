//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use vanpick::assets::AssetResolver;
use vanpick::models::{Catalog, ModelCategory, VehicleModel};
use vanpick::tui::WizardContext;

/// Placeholder used by test asset resolvers.
pub const TEST_PLACEHOLDER: &str = "/placeholder.svg";

/// Builds a vehicle model with a generated description.
pub fn test_model(id: i64, category_id: i64, name: &str, sleep_person: u32) -> VehicleModel {
    VehicleModel {
        id,
        category_id,
        name: name.to_string(),
        sleep_person,
        description: format!("{name} description"),
        inner_image: Some(format!("vans/{id}.jpg")),
    }
}

/// Two categories, three models. "Aria" (Class A) comes first in input order.
///
/// Class C is listed first among categories, so the rendering order
/// (Bolt, Aria, Atlas) differs from the input order (Aria, Bolt, Atlas).
pub fn test_catalog_basic() -> Catalog {
    Catalog::new(
        vec![
            ModelCategory::new(2, "Class C"),
            ModelCategory::new(1, "Class A"),
        ],
        vec![
            test_model(10, 1, "Aria", 4),
            test_model(20, 2, "Bolt", 2),
            test_model(11, 1, "Atlas", 6),
        ],
    )
}

/// Same categories as [`test_catalog_basic`] but "Bolt" first.
pub fn test_catalog_reordered() -> Catalog {
    let mut catalog = test_catalog_basic();
    catalog.models.swap(0, 1);
    catalog
}

/// Context with no backend URL, so every image is the placeholder.
pub fn test_context(catalog: Catalog) -> WizardContext {
    WizardContext::new(catalog, AssetResolver::new(None, TEST_PLACEHOLDER))
}

/// Writes `catalog` as JSON into `dir` and returns the path.
pub fn write_catalog(dir: &Path, catalog: &Catalog) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(catalog).unwrap()).unwrap();
    path
}

/// Path to the vanpick binary
pub fn vanpick_bin() -> String {
    std::env::var("CARGO_BIN_EXE_vanpick").unwrap_or_else(|_| "target/debug/vanpick".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(vanpick_bin());
    cmd.env("VANPICK_CONFIG_DIR", config_dir);
    cmd.env_remove("VANPICK_BACKEND_URL");
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Temp directory holding a catalog file, kept alive by the returned guard.
pub fn temp_catalog(catalog: &Catalog) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(temp_dir.path(), catalog);
    (temp_dir, path)
}
