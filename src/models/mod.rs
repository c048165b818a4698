//! Data models for the rental catalog and the wizard's form record.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod catalog;
pub mod category;
pub mod form_data;
pub mod vehicle;

// Re-export all model types
pub use catalog::{group_by_category, Catalog};
pub use category::ModelCategory;
pub use form_data::{FieldUpdate, FormData};
pub use vehicle::{Amenity, VehicleModel};
