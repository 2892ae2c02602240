//! Dependency initialization and wiring for the related-item system.

use std::sync::Arc;

use tracing::info;

use crate::catalog::ProductCatalog;
use crate::config::{EnvSettings, SearchOptions, Settings};
use crate::importer::ProductImporter;
use crate::searcher::RelatedItemSearcher;
use relateditem_repository::{HttpProviderFactory, ProviderFactory};

/// Container for a fully wired importer and searcher.
///
/// Both components share the settings collaborator and the provider factory
/// but no mutable state; the importer runs as an offline batch while the
/// searcher serves per-request lookups.
pub struct Dependencies {
    /// Bulk importer, ready to run.
    pub importer: ProductImporter,
    /// Related-item searcher, ready to serve lookups.
    pub searcher: RelatedItemSearcher,
}

impl Dependencies {
    /// Wire importer and searcher from environment-backed settings, the
    /// HTTP provider factory and default options.
    ///
    /// See [`EnvSettings`] for the recognized environment variables.
    pub fn from_env(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self::new(catalog, Arc::new(EnvSettings::new()), SearchOptions::default())
    }

    /// Wire importer and searcher with explicit collaborators.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        settings: Arc<dyn Settings>,
        options: SearchOptions,
    ) -> Self {
        let factory: Arc<dyn ProviderFactory> = Arc::new(HttpProviderFactory::new());

        info!("Wiring related-item importer and searcher");

        let importer = ProductImporter::new(
            catalog,
            Arc::clone(&settings),
            Arc::clone(&factory),
            options.clone(),
        );
        let searcher = RelatedItemSearcher::new(settings, factory, options);

        Self { importer, searcher }
    }
}
