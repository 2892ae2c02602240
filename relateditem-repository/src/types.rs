//! Request types for search engine operations.

use serde_json::Value;

/// Base parameters for a more-like-this query.
///
/// These apply to every per-field query a lookup issues. The defaults match
/// the engine's minimum useful settings: a term only needs to appear once in
/// the source document and once in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MltParams {
    /// Minimum term frequency in the source document.
    pub min_term_freq: u32,
    /// Minimum number of documents a term must appear in.
    pub min_doc_freq: u32,
}

impl Default for MltParams {
    fn default() -> Self {
        Self {
            min_term_freq: 1,
            min_doc_freq: 1,
        }
    }
}

impl MltParams {
    /// Render the parameters as query-string pairs.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("min_term_freq", self.min_term_freq.to_string()),
            ("min_doc_freq", self.min_doc_freq.to_string()),
        ]
    }
}

/// A more-like-this query scoped to one source document.
///
/// The searcher builds one of these per lookup and issues it once per search
/// field; the scoped field is passed separately so the base query stays
/// identical across fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MltQuery {
    /// Destination index, derived from the site's canonical host.
    pub index: String,
    /// Document type, derived from the configured product post type.
    pub doc_type: String,
    /// ID of the source product the engine finds documents similar to.
    pub product_id: u64,
    /// Base query parameters, merged from defaults and any installed
    /// override.
    pub params: MltParams,
}

/// One document of a bulk write, keyed by the record's integer ID.
///
/// Re-importing the same ID overwrites the previous document (upsert
/// semantics, not append).
#[derive(Debug, Clone, PartialEq)]
pub struct BulkDocument {
    /// Record ID; becomes the document `_id`.
    pub id: u64,
    /// Document body as submitted to the engine.
    pub source: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MltParams::default();

        assert_eq!(params.min_term_freq, 1);
        assert_eq!(params.min_doc_freq, 1);
    }

    #[test]
    fn test_query_pairs() {
        let params = MltParams {
            min_term_freq: 2,
            min_doc_freq: 5,
        };
        let pairs = params.query_pairs();

        assert_eq!(pairs[0], ("min_term_freq", "2".to_string()));
        assert_eq!(pairs[1], ("min_doc_freq", "5".to_string()));
    }
}
