//! State the booking wizard shares with its steps.

use crate::assets::AssetResolver;
use crate::models::{Catalog, FormData};

/// Catalog, asset resolver and form record owned by the wizard.
///
/// Steps borrow this mutably while handling input or running post-render
/// effects, so at most one writer touches the form at a time.
#[derive(Debug, Clone)]
pub struct WizardContext {
    /// The form record being filled in
    pub form: FormData,
    /// Image resolution for the detail panel
    pub assets: AssetResolver,
    catalog: Catalog,
    catalog_revision: u64,
}

impl WizardContext {
    /// Creates a context with an empty form.
    #[must_use]
    pub fn new(catalog: Catalog, assets: AssetResolver) -> Self {
        Self {
            form: FormData::new(),
            assets,
            catalog,
            catalog_revision: 0,
        }
    }

    /// The current catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Counter bumped every time the catalog is replaced.
    #[must_use]
    pub const fn catalog_revision(&self) -> u64 {
        self.catalog_revision
    }

    /// Replaces the catalog (e.g., after a reload) and bumps the revision.
    ///
    /// The form is left untouched, even when the chosen model is no longer
    /// listed.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.catalog_revision += 1;

        tracing::info!(
            revision = self.catalog_revision,
            models = self.catalog.models.len(),
            "catalog replaced"
        );
    }
}
