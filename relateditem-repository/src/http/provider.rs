//! HTTP provider implementation.
//!
//! This module provides the concrete implementation of `SearchEngineProvider`
//! over the engine's HTTP API using `reqwest`.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::config::EndpointConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::{ProviderFactory, SearchEngineProvider};
use crate::types::{BulkDocument, MltQuery};
use async_trait::async_trait;
use relateditem_shared::SearchHit;

/// HTTP search engine provider.
///
/// Talks to the engine over its path-style HTTP API. One provider instance
/// holds one `reqwest` client; the importer and searcher build a fresh
/// provider per run through [`HttpProviderFactory`].
pub struct HttpSearchProvider {
    client: reqwest::Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
}

impl HttpSearchProvider {
    /// Create a provider from the endpoint configuration.
    ///
    /// Fails with a configuration error before any network call when the
    /// endpoint is incomplete.
    pub fn new(config: &EndpointConfig) -> Result<Self, SearchEngineError> {
        let base_url = config.base_url()?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchEngineError::transport(e.to_string()))?;

        info!(endpoint = %base_url, "Created search engine provider");

        Ok(Self {
            client,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Build a URL under the endpoint base from path segments.
    fn url_for(&self, segments: &[&str]) -> Result<Url, SearchEngineError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SearchEngineError::config("endpoint URL cannot be a base"))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Start a request with basic auth applied when credentials are
    /// configured.
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(ref username) = self.username {
            builder = builder.basic_auth(username, self.password.as_deref());
        }
        builder
    }

    /// Render the newline-delimited bulk payload.
    ///
    /// Each document becomes an action line keyed by the record ID followed
    /// by its source line, so a re-import overwrites prior documents with the
    /// same ID.
    fn bulk_payload(
        index: &str,
        doc_type: &str,
        documents: &[BulkDocument],
    ) -> Result<String, SearchEngineError> {
        let mut payload = String::new();
        for doc in documents {
            let action = json!({
                "index": { "_index": index, "_type": doc_type, "_id": doc.id }
            });
            payload.push_str(&action.to_string());
            payload.push('\n');
            let source = serde_json::to_string(&doc.source).map_err(|e| {
                SearchEngineError::engine(format!("failed to serialize document {}: {}", doc.id, e))
            })?;
            payload.push_str(&source);
            payload.push('\n');
        }
        Ok(payload)
    }
}

/// Whether an index-creation error body means the index was already there.
fn index_already_exists(body: &str) -> bool {
    body.contains("already_exists") || body.contains("IndexAlreadyExists")
}

/// Extract the first per-item error detail from a bulk response.
fn first_bulk_error(items: &[Value]) -> Option<String> {
    items.iter().find_map(|item| {
        item.get("index")
            .and_then(|op| op.get("error"))
            .map(Value::to_string)
    })
}

#[derive(Debug, Deserialize)]
struct BulkResponse {
    #[serde(default)]
    errors: bool,
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct MltResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    hits: Option<HitsEnvelope>,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_id")]
    id: Value,
    #[serde(rename = "_score")]
    score: f64,
}

impl RawHit {
    /// Convert the wire hit into a typed one.
    ///
    /// The engine returns document IDs as strings; anything that is not an
    /// integer cannot reference a product record.
    fn into_hit(self) -> Result<SearchHit, SearchEngineError> {
        let id = match &self.id {
            Value::String(s) => s.parse::<u64>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
        .ok_or_else(|| {
            SearchEngineError::engine(format!("hit id {} is not an integer product id", self.id))
        })?;
        Ok(SearchHit::new(id, self.score))
    }
}

/// Parse a more-like-this response body.
///
/// An error envelope is surfaced as an engine error so the caller aborts the
/// whole lookup instead of silently treating the field as empty.
fn parse_mlt_body(body: &str, field: &str) -> Result<Vec<SearchHit>, SearchEngineError> {
    let parsed: MltResponse = serde_json::from_str(body).map_err(|e| {
        SearchEngineError::engine(format!(
            "unreadable more-like-this response for field '{}': {}",
            field, e
        ))
    })?;

    if let Some(error) = parsed.error {
        return Err(SearchEngineError::engine(format!(
            "more-like-this on field '{}' returned an error envelope: {}",
            field, error
        )));
    }

    parsed
        .hits
        .map(|envelope| envelope.hits)
        .unwrap_or_default()
        .into_iter()
        .map(RawHit::into_hit)
        .collect()
}

#[async_trait]
impl SearchEngineProvider for HttpSearchProvider {
    async fn ensure_index(
        &self,
        index: &str,
        doc_type: &str,
        mapping: &Value,
    ) -> Result<(), SearchEngineError> {
        // Create-if-absent; an existing index is left untouched.
        let url = self.url_for(&[index])?;
        let response = self.request(Method::PUT, url).json(&json!({})).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if !index_already_exists(&body) {
                error!(index = %index, status = %status, body = %body, "Index creation failed");
                return Err(SearchEngineError::engine(format!(
                    "index creation failed with status {}: {}",
                    status, body
                )));
            }
            debug!(index = %index, "Index already exists");
        }

        let url = self.url_for(&[index, doc_type, "_mapping"])?;
        let body = json!({ doc_type: { "properties": mapping } });
        let response = self.request(Method::PUT, url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %body, "Mapping update failed");
            return Err(SearchEngineError::engine(format!(
                "mapping update failed with status {}: {}",
                status, body
            )));
        }

        debug!(index = %index, doc_type = %doc_type, "Index and mapping ensured");
        Ok(())
    }

    async fn bulk_index(
        &self,
        index: &str,
        doc_type: &str,
        documents: &[BulkDocument],
    ) -> Result<(), SearchEngineError> {
        let payload = Self::bulk_payload(index, doc_type, documents)?;

        let url = self.url_for(&["_bulk"])?;
        let response = self
            .request(Method::POST, url)
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(index = %index, status = %status, body = %body, "Bulk write failed");
            return Err(SearchEngineError::engine(format!(
                "bulk write failed with status {}: {}",
                status, body
            )));
        }

        let parsed: BulkResponse = serde_json::from_str(&body).map_err(|e| {
            SearchEngineError::engine(format!("unreadable bulk response: {}", e))
        })?;
        if parsed.errors {
            let detail = first_bulk_error(&parsed.items).unwrap_or(body);
            error!(index = %index, detail = %detail, "Bulk write reported failures");
            return Err(SearchEngineError::engine(format!(
                "bulk write reported failures: {}",
                detail
            )));
        }

        debug!(index = %index, count = documents.len(), "Bulk write acknowledged");
        Ok(())
    }

    async fn more_like_this(
        &self,
        query: &MltQuery,
        field: &str,
    ) -> Result<Vec<SearchHit>, SearchEngineError> {
        let id = query.product_id.to_string();
        let mut url = self.url_for(&[&query.index, &query.doc_type, &id, "_mlt"])?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params.query_pairs() {
                pairs.append_pair(key, &value);
            }
            pairs.append_pair("mlt_fields", field);
        }

        debug!(url = %url, field = %field, "Running more-like-this query");

        let response = self.request(Method::GET, url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SearchEngineError::engine(format!(
                "more-like-this on field '{}' failed with status {}: {}",
                field, status, body
            )));
        }

        parse_mlt_body(&body, field)
    }
}

/// Factory producing [`HttpSearchProvider`] instances.
pub struct HttpProviderFactory;

impl HttpProviderFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HttpProviderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderFactory for HttpProviderFactory {
    fn create(
        &self,
        config: &EndpointConfig,
    ) -> Result<Arc<dyn SearchEngineProvider>, SearchEngineError> {
        Ok(Arc::new(HttpSearchProvider::new(config)?))
    }
}
