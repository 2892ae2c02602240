//! Overridable search and import behavior.
//!
//! The original system exposed these knobs through framework hooks; here they
//! live in one strategy struct injected into the importer and searcher.

use std::sync::Arc;

use serde_json::Value;

use relateditem_repository::{default_mapping, MltParams};
use relateditem_shared::{ProductDocument, ProductRecord};

/// Per-record document transform override.
///
/// Applied after the default document build; receives the source record and
/// the default document and returns the document to index.
pub type DocumentTransform =
    Arc<dyn Fn(&ProductRecord, ProductDocument) -> ProductDocument + Send + Sync>;

/// Default set of fields the searcher queries, in merge order.
pub const DEFAULT_SEARCH_FIELDS: [&str; 6] =
    ["excerpt", "content", "display_price", "cat", "tag", "title"];

/// Overridable knobs shared by the importer and searcher.
#[derive(Clone)]
pub struct SearchOptions {
    /// Base parameters for every more-like-this query.
    pub base_params: MltParams,
    /// Fields queried for similarity. Merge order of the final ID list
    /// follows this order, so earlier fields rank earlier.
    pub search_fields: Vec<String>,
    /// Schema mapping applied on every import run.
    pub mapping: Value,
    /// Optional transform applied to each document after the default build.
    pub document_transform: Option<DocumentTransform>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            base_params: MltParams::default(),
            search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|s| s.to_string()).collect(),
            mapping: default_mapping(),
            document_transform: None,
        }
    }
}

impl SearchOptions {
    /// Override the base more-like-this parameters.
    pub fn with_base_params(mut self, params: MltParams) -> Self {
        self.base_params = params;
        self
    }

    /// Override the search field set.
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Override the schema mapping.
    pub fn with_mapping(mut self, mapping: Value) -> Self {
        self.mapping = mapping;
        self
    }

    /// Install a per-record document transform.
    pub fn with_document_transform(mut self, transform: DocumentTransform) -> Self {
        self.document_transform = Some(transform);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_order() {
        let options = SearchOptions::default();

        assert_eq!(
            options.search_fields,
            vec!["excerpt", "content", "display_price", "cat", "tag", "title"]
        );
    }

    #[test]
    fn test_default_params() {
        let options = SearchOptions::default();

        assert_eq!(options.base_params.min_term_freq, 1);
        assert_eq!(options.base_params.min_doc_freq, 1);
        assert!(options.document_transform.is_none());
    }

    #[test]
    fn test_overrides() {
        let options = SearchOptions::default()
            .with_search_fields(["title", "content"])
            .with_base_params(MltParams {
                min_term_freq: 2,
                min_doc_freq: 3,
            });

        assert_eq!(options.search_fields, vec!["title", "content"]);
        assert_eq!(options.base_params.min_term_freq, 2);
        assert_eq!(options.base_params.min_doc_freq, 3);
    }
}
