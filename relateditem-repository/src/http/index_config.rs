//! Default index mapping and index naming.
//!
//! The index name is derived from the site's canonical host and the document
//! type from the configured product post type. Both must be stable across
//! import and search so cross-references resolve.

use serde_json::{json, Value};
use url::Url;

use crate::errors::SearchEngineError;

/// Default schema mapping for product documents.
///
/// Text fields use the `kuromoji` analyzer; the display price is indexed
/// verbatim. The mapping is fixed per deployment and re-applied idempotently
/// before each bulk write.
pub fn default_mapping() -> Value {
    json!({
        "product_title": {
            "type": "string",
            "analyzer": "kuromoji"
        },
        "product_content": {
            "type": "string",
            "analyzer": "kuromoji"
        },
        "product_excerpt": {
            "type": "string",
            "analyzer": "kuromoji"
        },
        "product_tag": {
            "type": "string",
            "analyzer": "kuromoji"
        },
        "product_cat": {
            "type": "string",
            "analyzer": "kuromoji"
        },
        "product_display_price": {
            "type": "string"
        }
    })
}

/// Resolve the destination index name from the canonical site URL.
///
/// The index name is the site's host. An unparsable URL or one without a
/// host is a configuration error, not a retryable fault.
pub fn index_name_for_site(site_url: &str) -> Result<String, SearchEngineError> {
    let url = Url::parse(site_url).map_err(|e| {
        SearchEngineError::config(format!("invalid site URL '{}': {}", site_url, e))
    })?;
    url.host_str()
        .map(str::to_string)
        .ok_or_else(|| SearchEngineError::config(format!("site URL '{}' has no host", site_url)))
}
