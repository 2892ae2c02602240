//! Integration tests for the related-item importer and searcher.
//!
//! These tests use the real `ProductImporter` and `RelatedItemSearcher` with
//! mock collaborators (catalog, settings, provider factory) to verify the
//! end-to-end contracts without a live search engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use relateditem::catalog::{CatalogError, ProductCatalog};
use relateditem::config::{SearchOptions, Settings, SettingsError};
use relateditem::errors::{ImportError, SearchError};
use relateditem::importer::ProductImporter;
use relateditem::searcher::RelatedItemSearcher;
use relateditem_repository::{
    BulkDocument, EndpointConfig, MltQuery, ProviderFactory, SearchEngineError,
    SearchEngineProvider,
};
use relateditem_shared::{ProductRecord, SearchHit};

// Mock catalog for testing
struct MockCatalog {
    records: Vec<ProductRecord>,
}

#[async_trait]
impl ProductCatalog for MockCatalog {
    async fn all_products(&self, _post_type: &str) -> Result<Vec<ProductRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}

// Mock settings for testing
struct MockSettings {
    endpoint: String,
    site_url: String,
}

impl MockSettings {
    fn valid() -> Self {
        Self {
            endpoint: "search.example.com".to_string(),
            site_url: "https://shop.example.com".to_string(),
        }
    }

    fn without_endpoint() -> Self {
        Self {
            endpoint: String::new(),
            site_url: "https://shop.example.com".to_string(),
        }
    }
}

impl Settings for MockSettings {
    fn endpoint_config(&self) -> Result<EndpointConfig, SettingsError> {
        Ok(EndpointConfig::new(self.endpoint.clone()))
    }

    fn site_url(&self) -> Result<String, SettingsError> {
        Ok(self.site_url.clone())
    }

    fn product_post_type(&self) -> String {
        "product".to_string()
    }
}

// Mock search engine provider for testing
struct MockProvider {
    ensure_calls: AtomicUsize,
    bulk_calls: AtomicUsize,
    mlt_calls: AtomicUsize,
    bulk_batches: Mutex<Vec<Vec<BulkDocument>>>,
    bulk_failure: Mutex<Option<SearchEngineError>>,
    mlt_results: Mutex<HashMap<String, Result<Vec<SearchHit>, SearchEngineError>>>,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            ensure_calls: AtomicUsize::new(0),
            bulk_calls: AtomicUsize::new(0),
            mlt_calls: AtomicUsize::new(0),
            bulk_batches: Mutex::new(Vec::new()),
            bulk_failure: Mutex::new(None),
            mlt_results: Mutex::new(HashMap::new()),
        }
    }

    fn fail_bulk_with(&self, error: SearchEngineError) {
        *self.bulk_failure.lock().unwrap() = Some(error);
    }

    fn set_field_hits(&self, field: &str, hits: Vec<SearchHit>) {
        self.mlt_results
            .lock()
            .unwrap()
            .insert(field.to_string(), Ok(hits));
    }

    fn fail_field_with(&self, field: &str, error: SearchEngineError) {
        self.mlt_results
            .lock()
            .unwrap()
            .insert(field.to_string(), Err(error));
    }

    fn engine_call_count(&self) -> usize {
        self.ensure_calls.load(Ordering::SeqCst)
            + self.bulk_calls.load(Ordering::SeqCst)
            + self.mlt_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchEngineProvider for MockProvider {
    async fn ensure_index(
        &self,
        _index: &str,
        _doc_type: &str,
        _mapping: &serde_json::Value,
    ) -> Result<(), SearchEngineError> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn bulk_index(
        &self,
        _index: &str,
        _doc_type: &str,
        documents: &[BulkDocument],
    ) -> Result<(), SearchEngineError> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.bulk_failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.bulk_batches.lock().unwrap().push(documents.to_vec());
        Ok(())
    }

    async fn more_like_this(
        &self,
        _query: &MltQuery,
        field: &str,
    ) -> Result<Vec<SearchHit>, SearchEngineError> {
        self.mlt_calls.fetch_add(1, Ordering::SeqCst);
        self.mlt_results
            .lock()
            .unwrap()
            .get(field)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// Mock provider factory counting how many clients were built
struct MockFactory {
    provider: Arc<MockProvider>,
    create_calls: AtomicUsize,
}

impl MockFactory {
    fn new(provider: Arc<MockProvider>) -> Self {
        Self {
            provider,
            create_calls: AtomicUsize::new(0),
        }
    }
}

impl ProviderFactory for MockFactory {
    fn create(
        &self,
        _config: &EndpointConfig,
    ) -> Result<Arc<dyn SearchEngineProvider>, SearchEngineError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.provider) as Arc<dyn SearchEngineProvider>)
    }
}

fn sample_records() -> Vec<ProductRecord> {
    let mut kettle = ProductRecord::new(1, "Kettle");
    kettle.content = "<p>Steel kettle</p>".to_string();
    kettle.categories = vec!["kitchen".to_string()];

    let mut pan = ProductRecord::new(2, "Pan");
    pan.tags = vec!["iron".to_string()];

    let mut hidden = ProductRecord::new(3, "Hidden");
    hidden.visible = false;

    vec![kettle, pan, hidden]
}

fn build_importer(
    records: Vec<ProductRecord>,
    settings: MockSettings,
) -> (ProductImporter, Arc<MockProvider>, Arc<MockFactory>) {
    let provider = Arc::new(MockProvider::new());
    let factory = Arc::new(MockFactory::new(Arc::clone(&provider)));
    let importer = ProductImporter::new(
        Arc::new(MockCatalog { records }),
        Arc::new(settings),
        Arc::clone(&factory) as Arc<dyn ProviderFactory>,
        SearchOptions::default(),
    );
    (importer, provider, factory)
}

fn build_searcher(
    settings: MockSettings,
    options: SearchOptions,
) -> (RelatedItemSearcher, Arc<MockProvider>, Arc<MockFactory>) {
    let provider = Arc::new(MockProvider::new());
    let factory = Arc::new(MockFactory::new(Arc::clone(&provider)));
    let searcher = RelatedItemSearcher::new(
        Arc::new(settings),
        Arc::clone(&factory) as Arc<dyn ProviderFactory>,
        options,
    );
    (searcher, provider, factory)
}

#[tokio::test]
async fn test_import_indexes_only_visible_products() {
    let (importer, provider, _) = build_importer(sample_records(), MockSettings::valid());

    importer.import_all_products().await.unwrap();

    let batches = provider.bulk_batches.lock().unwrap();
    assert_eq!(batches.len(), 1);

    let ids: Vec<u64> = batches[0].iter().map(|doc| doc.id).collect();
    assert_eq!(ids, vec![1, 2]);

    // Record 3 is invisible and never appears in the payload.
    assert!(!ids.contains(&3));
}

#[tokio::test]
async fn test_import_builds_canonical_documents() {
    let (importer, provider, _) = build_importer(sample_records(), MockSettings::valid());

    importer.import_all_products().await.unwrap();

    let batches = provider.bulk_batches.lock().unwrap();
    let kettle = &batches[0][0];

    assert_eq!(kettle.source["product_title"], "Kettle");
    assert_eq!(kettle.source["product_content"], "Steel kettle");
    assert_eq!(kettle.source["product_cat"][0], "kitchen");
}

#[tokio::test]
async fn test_reimport_keys_documents_by_record_id() {
    let (importer, provider, _) = build_importer(sample_records(), MockSettings::valid());

    importer.import_all_products().await.unwrap();
    importer.import_all_products().await.unwrap();

    let batches = provider.bulk_batches.lock().unwrap();
    assert_eq!(batches.len(), 2);

    // Both runs submit the same IDs, so the engine upserts rather than
    // appending: exactly one document per record ID per run.
    for batch in batches.iter() {
        let ids: Vec<u64> = batch.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

#[tokio::test]
async fn test_import_with_missing_endpoint_makes_no_network_call() {
    let (importer, provider, factory) =
        build_importer(sample_records(), MockSettings::without_endpoint());

    let result = importer.import_all_products().await;

    assert!(matches!(result, Err(ImportError::Config(_))));
    assert_eq!(factory.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.engine_call_count(), 0);
}

#[tokio::test]
async fn test_import_surfaces_engine_error_with_detail() {
    let (importer, provider, _) = build_importer(sample_records(), MockSettings::valid());
    provider.fail_bulk_with(SearchEngineError::engine(
        "bulk write reported failures: MapperParsingException",
    ));

    let result = importer.import_all_products().await;

    match result {
        Err(ImportError::Engine(msg)) => assert!(msg.contains("MapperParsingException")),
        other => panic!("expected engine error, got {:?}", other),
    }

    // No partial success: nothing was recorded as written.
    assert!(provider.bulk_batches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_wraps_transport_failure() {
    let (importer, provider, _) = build_importer(sample_records(), MockSettings::valid());
    provider.fail_bulk_with(SearchEngineError::transport("connection refused"));

    let result = importer.import_all_products().await;

    assert!(matches!(result, Err(ImportError::Transport(_))));
}

#[tokio::test]
async fn test_related_items_filters_by_inclusive_threshold() {
    let options = SearchOptions::default().with_search_fields(["title"]);
    let (searcher, provider, _) = build_searcher(MockSettings::valid(), options);
    provider.set_field_hits(
        "title",
        vec![
            SearchHit::new(1, 0.95),
            SearchHit::new(2, 0.79),
            SearchHit::new(3, 0.80),
        ],
    );

    let ids = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_related_items_merge_in_field_order_without_duplicates() {
    let options = SearchOptions::default().with_search_fields(["title", "content"]);
    let (searcher, provider, _) = build_searcher(MockSettings::valid(), options);
    provider.set_field_hits(
        "title",
        vec![SearchHit::new(1, 0.9), SearchHit::new(2, 0.9)],
    );
    provider.set_field_hits(
        "content",
        vec![SearchHit::new(2, 0.99), SearchHit::new(3, 0.9)],
    );

    let ids = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await
        .unwrap();

    // Field-then-discovery order; the duplicate stays at its first position.
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_related_items_queries_every_configured_field() {
    let (searcher, provider, _) =
        build_searcher(MockSettings::valid(), SearchOptions::default());

    let ids = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await
        .unwrap();

    // Zero hits everywhere is not an error.
    assert!(ids.is_empty());
    assert_eq!(provider.mlt_calls.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn test_related_items_with_missing_endpoint_makes_no_network_call() {
    let (searcher, provider, factory) =
        build_searcher(MockSettings::without_endpoint(), SearchOptions::default());

    let result = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await;

    assert!(matches!(result, Err(SearchError::Config(_))));
    assert_eq!(factory.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.engine_call_count(), 0);
}

#[tokio::test]
async fn test_field_transport_failure_aborts_whole_lookup() {
    let options = SearchOptions::default().with_search_fields(["title", "cat", "tag"]);
    let (searcher, provider, _) = build_searcher(MockSettings::valid(), options);
    provider.set_field_hits("title", vec![SearchHit::new(1, 0.9)]);
    provider.fail_field_with("cat", SearchEngineError::transport("connection reset"));
    provider.set_field_hits("tag", vec![SearchHit::new(2, 0.9)]);

    let result = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await;

    // All-or-nothing: the title hits are not returned as a partial union.
    assert!(matches!(result, Err(SearchError::Transport(_))));
}

#[tokio::test]
async fn test_field_error_envelope_aborts_whole_lookup() {
    // A remote error envelope on one field is a field-level failure that
    // aborts the operation, consistent with transport failures, and is not
    // treated as an empty result.
    let options = SearchOptions::default().with_search_fields(["excerpt", "content"]);
    let (searcher, provider, _) = build_searcher(MockSettings::valid(), options);
    provider.set_field_hits("excerpt", vec![SearchHit::new(4, 0.92)]);
    provider.fail_field_with(
        "content",
        SearchEngineError::engine("more-like-this on field 'content' returned an error envelope"),
    );

    let result = searcher
        .get_related_items(&ProductRecord::new(10, "Kettle"))
        .await;

    match result {
        Err(SearchError::Engine(msg)) => assert!(msg.contains("error envelope")),
        other => panic!("expected engine error, got {:?}", other),
    }
}
