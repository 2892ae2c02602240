//! Search engine provider trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations and mock providers in
//! tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchEngineError;
use crate::types::{BulkDocument, MltQuery};
use relateditem_shared::SearchHit;

/// Abstracts the underlying search engine implementation.
///
/// Implementations are injected into the importer and searcher to enable
/// dependency injection and easy testing with mocks. All methods return
/// `Result<T, SearchEngineError>` for consistent error handling; none of
/// them retries internally.
#[async_trait]
pub trait SearchEngineProvider: Send + Sync {
    /// Ensure the index exists and (re)apply the schema mapping.
    ///
    /// Create-if-absent: an existing index is left untouched, documents of
    /// other indices are never affected, and the call is idempotent: it is
    /// safe to repeat on every import run.
    ///
    /// # Arguments
    ///
    /// * `index` - Destination index name
    /// * `doc_type` - Document type the mapping applies to
    /// * `mapping` - Field to type/analyzer declarations
    async fn ensure_index(
        &self,
        index: &str,
        doc_type: &str,
        mapping: &Value,
    ) -> Result<(), SearchEngineError>;

    /// Submit all documents as a single bulk write.
    ///
    /// Documents are keyed by their record ID, so re-submitting an ID
    /// overwrites the previous document. The batch is one unit: an
    /// engine-reported failure fails the whole call and no per-document
    /// retry happens here.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the engine acknowledged the whole batch
    /// * `Err(SearchEngineError)` - Engine-reported failure or transport
    ///   error, unchanged apart from added context
    async fn bulk_index(
        &self,
        index: &str,
        doc_type: &str,
        documents: &[BulkDocument],
    ) -> Result<(), SearchEngineError>;

    /// Run one more-like-this query scoped to a single field.
    ///
    /// Hits are returned in the engine's own relevance order, unsorted by
    /// this layer. Zero hits is not an error. A remote error envelope is
    /// surfaced as an engine error rather than an empty result.
    async fn more_like_this(
        &self,
        query: &MltQuery,
        field: &str,
    ) -> Result<Vec<SearchHit>, SearchEngineError>;
}
