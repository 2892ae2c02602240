//! Bulk import of product documents into the search engine.
//!
//! Converts catalog records into documents, ensures the target index and
//! mapping exist, and submits one bulk write per run.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::catalog::ProductCatalog;
use crate::config::{SearchOptions, Settings};
use crate::errors::ImportError;
use relateditem_repository::{index_name_for_site, BulkDocument, ProviderFactory};
use relateditem_shared::{ProductDocument, ProductRecord};

/// Imports all products of the configured post type into the search index.
///
/// The whole batch is one unit: a failing bulk response fails the run, and a
/// per-document failure inside the payload is not individually retried.
/// Records that lost visibility since a previous run are skipped but their
/// stale documents are not deleted (known gap).
pub struct ProductImporter {
    catalog: Arc<dyn ProductCatalog>,
    settings: Arc<dyn Settings>,
    provider_factory: Arc<dyn ProviderFactory>,
    options: SearchOptions,
}

impl ProductImporter {
    /// Create an importer with explicit collaborators.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        settings: Arc<dyn Settings>,
        provider_factory: Arc<dyn ProviderFactory>,
        options: SearchOptions,
    ) -> Self {
        Self {
            catalog,
            settings,
            provider_factory,
            options,
        }
    }

    /// Import all visible products as a single bulk write.
    ///
    /// Documents are keyed by record ID, so a re-import overwrites prior
    /// documents with the same ID (upsert semantics). Configuration problems
    /// fail fast before any client is built or network call attempted.
    #[instrument(skip(self))]
    pub async fn import_all_products(&self) -> Result<(), ImportError> {
        // Resolve and validate configuration before touching the network.
        let endpoint = self.settings.endpoint_config()?;
        endpoint.validate()?;
        let index = index_name_for_site(&self.settings.site_url()?)?;
        let doc_type = self.settings.product_post_type();

        let records = self.catalog.all_products(&doc_type).await?;
        let total = records.len();

        let documents = records
            .iter()
            .filter(|record| record.visible)
            .map(|record| self.build_document(record))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            index = %index,
            doc_type = %doc_type,
            total = total,
            visible = documents.len(),
            "Importing products"
        );

        let provider = self.provider_factory.create(&endpoint)?;

        // Idempotent: create-if-absent, then (re)apply the mapping.
        provider
            .ensure_index(&index, &doc_type, &self.options.mapping)
            .await?;

        if documents.is_empty() {
            debug!(index = %index, "No visible products to import");
            return Ok(());
        }

        provider.bulk_index(&index, &doc_type, &documents).await?;

        info!(index = %index, count = documents.len(), "Import complete");
        Ok(())
    }

    /// Build the index document for one record, applying the configured
    /// transform override when present.
    fn build_document(&self, record: &ProductRecord) -> Result<BulkDocument, ImportError> {
        let mut document = ProductDocument::from_record(record);
        if let Some(ref transform) = self.options.document_transform {
            document = transform(record, document);
        }
        let source = serde_json::to_value(&document).map_err(|e| {
            ImportError::Engine(format!("document {} could not be serialized: {}", record.id, e))
        })?;
        Ok(BulkDocument {
            id: record.id,
            source,
        })
    }
}
