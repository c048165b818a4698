//! Rental catalog: model categories plus the flat list of vehicle models.
//!
//! The catalog is supplied externally (a JSON file exported by the booking
//! backend) and is treated as immutable input. Grouping models under their
//! category is a pure projection over the flat list.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{ModelCategory, VehicleModel};

/// Returns the models belonging to `category_id`, preserving input order.
///
/// An empty result is valid (a category without models, or an id that no
/// model references).
#[must_use]
pub fn group_by_category(models: &[VehicleModel], category_id: i64) -> Vec<&VehicleModel> {
    models
        .iter()
        .filter(|model| model.category_id == category_id)
        .collect()
}

/// Categories and models available for selection.
///
/// # File Format
///
/// ```json
/// {
///   "categories": [{ "id": 1, "name": "Class A" }],
///   "models": [{ "id": 10, "category_id": 1, "name": "Aria", "sleep_person": 4 }]
/// }
/// ```
///
/// Both keys are optional and default to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Model categories, in display order
    #[serde(default)]
    pub categories: Vec<ModelCategory>,
    /// Vehicle models, in supplied order (the first one is the default pick)
    #[serde(default)]
    pub models: Vec<VehicleModel>,
}

impl Catalog {
    /// Creates a catalog from already-loaded lists.
    #[must_use]
    pub const fn new(categories: Vec<ModelCategory>, models: Vec<VehicleModel>) -> Self {
        Self { categories, models }
    }

    /// Loads a catalog from a JSON file.
    ///
    /// Models that reference a missing category are kept (they are simply
    /// unreachable from any category group) and reported as a warning.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog = Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            models = catalog.models.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Parses a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).context("Invalid catalog JSON")?;

        let unreachable = catalog.unreachable_models();
        if !unreachable.is_empty() {
            let ids: Vec<i64> = unreachable.iter().map(|model| model.id).collect();
            tracing::warn!(?ids, "catalog models reference unknown categories");
        }

        Ok(catalog)
    }

    /// Returns true when there is nothing to select.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models of one category, in supplied order.
    #[must_use]
    pub fn group_by_category(&self, category_id: i64) -> Vec<&VehicleModel> {
        group_by_category(&self.models, category_id)
    }

    /// The default selection: the first model in supplied order.
    #[must_use]
    pub fn first_model(&self) -> Option<&VehicleModel> {
        self.models.first()
    }

    /// Returns true if a model with this id is part of the catalog.
    #[must_use]
    pub fn contains_model(&self, model_id: i64) -> bool {
        self.models.iter().any(|model| model.id == model_id)
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, category_id: i64) -> Option<&ModelCategory> {
        self.categories.iter().find(|cat| cat.id == category_id)
    }

    /// Models whose `category_id` names no known category.
    ///
    /// These never appear under any category heading.
    #[must_use]
    pub fn unreachable_models(&self) -> Vec<&VehicleModel> {
        self.models
            .iter()
            .filter(|model| self.category(model.category_id).is_none())
            .collect()
    }

    /// Models in rendering order: each category's group in category order.
    ///
    /// Unreachable models are omitted. This is the order the list cursor
    /// walks through.
    #[must_use]
    pub fn grouped_models(&self) -> Vec<&VehicleModel> {
        self.categories
            .iter()
            .flat_map(|cat| self.group_by_category(cat.id))
            .collect()
    }
}
