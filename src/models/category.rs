//! Model categories for grouping vehicle models in the catalog.

use serde::{Deserialize, Serialize};

/// A grouping bucket for vehicle models (e.g., "Class A", "Campervan").
///
/// Categories are supplied externally with the catalog and never modified
/// by the wizard. Models refer to a category through
/// [`VehicleModel::category_id`](crate::models::VehicleModel::category_id).
///
/// # Examples
///
/// ```
/// use vanpick::models::ModelCategory;
///
/// let category = ModelCategory::new(1, "Class A");
/// assert_eq!(category.id, 1);
/// assert_eq!(category.name, "Class A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelCategory {
    /// Catalog identifier
    pub id: i64,
    /// Display name shown as the group heading
    pub name: String,
}

impl ModelCategory {
    /// Creates a new category.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
