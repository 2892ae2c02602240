//! Product document types for the search index.
//!
//! This module defines the document structure that is indexed in the search
//! engine. Documents are transient: they are built during an import run and
//! discarded after submission; the search engine owns persisted state.

use serde::{Deserialize, Serialize};

use crate::text::strip_tags;
use crate::types::product_record::ProductRecord;

/// Document representation of a product in the search index.
///
/// Derived 1:1 from a visible [`ProductRecord`]; invisible records produce no
/// document. HTML markup is stripped from the content and excerpt so the
/// analyzer only sees text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDocument {
    pub product_title: String,
    pub product_content: String,
    pub product_excerpt: String,
    pub product_display_price: String,
    pub product_rate: f64,
    pub product_tag: Vec<String>,
    pub product_cat: Vec<String>,
}

impl ProductDocument {
    /// Build the canonical document for a product record.
    ///
    /// Tag and category names keep their catalog order. Callers that need a
    /// different shape apply their transform on top of this result.
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            product_title: record.title.clone(),
            product_content: strip_tags(&record.content),
            product_excerpt: strip_tags(&record.excerpt),
            product_display_price: record.display_price.clone(),
            product_rate: record.average_rating,
            product_tag: record.tags.clone(),
            product_cat: record.categories.clone(),
        }
    }
}
