//! Vehicle models offered for rental and the amenities shown for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rentable vehicle model as supplied by the catalog.
///
/// Field names match the catalog JSON exactly. `inner_image` is a path
/// relative to the configured asset base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleModel {
    /// Catalog identifier
    pub id: i64,
    /// Identifier of the owning [`ModelCategory`](crate::models::ModelCategory)
    pub category_id: i64,
    /// Display name, also written to the form's `model` field on selection
    pub name: String,
    /// Number of people the vehicle sleeps
    pub sleep_person: u32,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Relative path of the interior image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_image: Option<String>,
}

impl VehicleModel {
    /// Amenities listed in the detail panel, in display order.
    ///
    /// Every model lists the same four amenities; only the sleeping capacity
    /// varies.
    #[must_use]
    pub fn amenities(&self) -> [Amenity; 4] {
        [
            Amenity::Refrigerator,
            Amenity::Sleeps(self.sleep_person),
            Amenity::Shower,
            Amenity::Toilet,
        ]
    }

    /// Capacity line shown under the amenities (e.g., "Sleeps 4").
    #[must_use]
    pub fn capacity_label(&self) -> String {
        Amenity::Sleeps(self.sleep_person).to_string()
    }
}

/// Amenity shown in the model detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amenity {
    /// On-board refrigerator
    Refrigerator,
    /// Sleeping capacity
    Sleeps(u32),
    /// Shower
    Shower,
    /// Toilet
    Toilet,
}

impl Amenity {
    /// Short icon glyph used in the terminal rendering.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Refrigerator => "❄",
            Self::Sleeps(_) => "☾",
            Self::Shower => "☂",
            Self::Toilet => "⚲",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refrigerator => write!(f, "Refrigerator"),
            Self::Sleeps(count) => write!(f, "Sleeps {count}"),
            Self::Shower => write!(f, "Shower"),
            Self::Toilet => write!(f, "Toilet"),
        }
    }
}
