//! Catalog inspection command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{Catalog, VehicleModel};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// List the categories and models in a catalog file
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Path to catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct CatalogOutput<'a> {
    categories: Vec<CategoryOutput<'a>>,
    unreachable: Vec<i64>,
    count: usize,
}

#[derive(Serialize, Debug)]
struct CategoryOutput<'a> {
    id: i64,
    name: &'a str,
    models: Vec<&'a VehicleModel>,
}

/// Reads and parses a catalog, separating I/O failures from bad content.
pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read catalog file {}: {e}", path.display()))
    })?;

    Catalog::from_json(&content).map_err(|e| {
        CliError::validation(format!("Invalid catalog file {}: {e:#}", path.display()))
    })
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(&self.catalog)?;

        if self.json {
            output_json(&catalog)
        } else {
            print!("{}", format_human_readable(&catalog));
            Ok(())
        }
    }
}

fn output_json(catalog: &Catalog) -> CliResult<()> {
    let output = CatalogOutput {
        categories: catalog
            .categories
            .iter()
            .map(|cat| CategoryOutput {
                id: cat.id,
                name: &cat.name,
                models: catalog.group_by_category(cat.id),
            })
            .collect(),
        unreachable: catalog
            .unreachable_models()
            .iter()
            .map(|model| model.id)
            .collect(),
        count: catalog.models.len(),
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

fn format_human_readable(catalog: &Catalog) -> String {
    if catalog.is_empty() && catalog.categories.is_empty() {
        return "No models available\n".to_string();
    }

    let mut out = String::new();

    for cat in &catalog.categories {
        let models = catalog.group_by_category(cat.id);
        out.push_str(&format!("{} ({})\n", cat.name, models.len()));

        if models.is_empty() {
            out.push_str("  (no models)\n");
        }
        for model in models {
            out.push_str(&format!(
                "  {:>4}  {:<24} {}\n",
                model.id,
                model.name,
                model.capacity_label()
            ));
        }
    }

    let unreachable = catalog.unreachable_models();
    if !unreachable.is_empty() {
        out.push_str("\nNot listed under any category:\n");
        for model in unreachable {
            out.push_str(&format!(
                "  {:>4}  {:<24} (category {})\n",
                model.id, model.name, model.category_id
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "categories": [{"id": 1, "name": "Class A"}, {"id": 2, "name": "Class C"}],
        "models": [
            {"id": 10, "category_id": 1, "name": "Aria", "sleep_person": 4},
            {"id": 11, "category_id": 9, "name": "Stray", "sleep_person": 2}
        ]
    }"#;

    #[test]
    fn test_human_readable_lists_groups() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let text = format_human_readable(&catalog);

        assert!(text.contains("Class A (1)"));
        assert!(text.contains("Aria"));
        assert!(text.contains("Sleeps 4"));
        assert!(text.contains("Class C (0)"));
        assert!(text.contains("(no models)"));
        assert!(text.contains("Not listed under any category"));
        assert!(text.contains("(category 9)"));
    }

    #[test]
    fn test_human_readable_empty() {
        assert_eq!(
            format_human_readable(&Catalog::default()),
            "No models available\n"
        );
    }

    #[test]
    fn test_load_catalog_missing_file_is_io_error() {
        let err = load_catalog(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_eq!(err.exit_code, crate::cli::ExitCode::IoError);
    }

    #[test]
    fn test_load_catalog_bad_json_is_validation_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert_eq!(err.exit_code, crate::cli::ExitCode::ValidationError);
        assert!(err.message.contains("Invalid catalog file"));
    }
}
