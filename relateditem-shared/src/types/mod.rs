//! This module defines the core data structures used across the related-item
//! system. It re-exports `ProductRecord`, `ProductDocument` and `SearchHit`.

pub mod product_document;
pub mod product_record;
pub mod search_hit;

pub use product_document::ProductDocument;
pub use product_record::ProductRecord;
pub use search_hit::SearchHit;
