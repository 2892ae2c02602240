//! # Relateditem Shared
//!
//! This crate defines shared data structures and types used across the
//! related-item search system. It includes the product record read from the
//! catalog, the document shape submitted to the search engine, and the hit
//! type returned by similarity queries.

pub mod text;
pub mod types;

pub use types::product_document::ProductDocument;
pub use types::product_record::ProductRecord;
pub use types::search_hit::SearchHit;
