//! # Relateditem
//!
//! Indexes e-commerce product records into a search engine and retrieves
//! related items for a given product via more-like-this queries.
//!
//! ## Architecture
//!
//! Two components share nothing but configuration:
//!
//! 1. **Importer**: converts catalog records into documents, ensures the
//!    target index and mapping exist, and submits one bulk write per run
//! 2. **Searcher**: issues one similarity query per configured field and
//!    merges the qualifying hits into a deduplicated ID list
//!
//! Both are constructed with explicit collaborators (catalog, settings,
//! provider factory); there is no global registry. The importer runs as an
//! offline batch; the searcher runs per request against the already-built
//! index.
//!
//! ## Modules
//!
//! - [`catalog`]: product catalog collaborator trait
//! - [`config`]: settings collaborator, search options and dependency wiring
//! - [`errors`]: error types for import and search
//! - [`importer`]: bulk import of product documents
//! - [`searcher`]: related-item lookup

pub mod catalog;
pub mod config;
pub mod errors;
pub mod importer;
pub mod searcher;

pub use catalog::{CatalogError, ProductCatalog};
pub use config::{Dependencies, EnvSettings, SearchOptions, Settings, SettingsError};
pub use errors::{ImportError, SearchError};
pub use importer::ProductImporter;
pub use searcher::RelatedItemSearcher;
