//! Product catalog collaborator.
//!
//! The catalog owns product storage and pricing; this crate only reads
//! records through this trait. Implementations bridge to whatever system
//! actually holds the products.

use async_trait::async_trait;
use thiserror::Error;

use relateditem_shared::ProductRecord;

/// Error from the product catalog collaborator.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CatalogError(pub String);

impl CatalogError {
    /// Create a catalog error.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// List all product records of the given post type.
    ///
    /// The listing is unbounded; no pagination limit is imposed by the
    /// caller, so implementations must support an "all records" query mode.
    async fn all_products(&self, post_type: &str) -> Result<Vec<ProductRecord>, CatalogError>;
}
