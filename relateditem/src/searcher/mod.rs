//! Related-item lookup via per-field more-like-this queries.
//!
//! One query is issued per configured field; qualifying hits are merged in
//! field order, deduplicated, and never re-sorted by score.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::config::{SearchOptions, Settings};
use crate::errors::SearchError;
use relateditem_repository::{index_name_for_site, MltQuery, ProviderFactory};
use relateditem_shared::{ProductRecord, SearchHit};

/// Minimum relevance score a hit must reach to count as related. The
/// boundary is inclusive: a hit scoring exactly the threshold qualifies.
pub const SCORE_THRESHOLD: f64 = 0.8;

/// Finds products related to a given product.
///
/// The lookup is all-or-nothing: a failure on any field, whether transport or
/// an engine error envelope, aborts the whole operation, and no partial union
/// is returned.
pub struct RelatedItemSearcher {
    settings: Arc<dyn Settings>,
    provider_factory: Arc<dyn ProviderFactory>,
    options: SearchOptions,
}

impl RelatedItemSearcher {
    /// Create a searcher with explicit collaborators.
    pub fn new(
        settings: Arc<dyn Settings>,
        provider_factory: Arc<dyn ProviderFactory>,
        options: SearchOptions,
    ) -> Self {
        Self {
            settings,
            provider_factory,
            options,
        }
    }

    /// Return the IDs of products related to `product`.
    ///
    /// Output order is field-iteration order, then the engine's relevance
    /// order within a field; an ID matched by several fields appears once at
    /// its first position. Configuration problems fail fast before any
    /// network call.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn get_related_items(&self, product: &ProductRecord) -> Result<Vec<u64>, SearchError> {
        // Resolve and validate configuration before touching the network.
        let endpoint = self.settings.endpoint_config()?;
        endpoint.validate()?;
        let index = index_name_for_site(&self.settings.site_url()?)?;
        let doc_type = self.settings.product_post_type();

        let query = MltQuery {
            index,
            doc_type,
            product_id: product.id,
            params: self.options.base_params,
        };

        let provider = self.provider_factory.create(&endpoint)?;

        debug!(
            index = %query.index,
            fields = ?self.options.search_fields,
            "Running per-field similarity queries"
        );

        // The per-field queries are independent and run concurrently, but
        // the results come back sequenced by field index, so the merge
        // follows the configured field order rather than completion order.
        // The first failing field aborts the whole lookup.
        let lookups = self
            .options
            .search_fields
            .iter()
            .map(|field| provider.more_like_this(&query, field));
        let per_field = try_join_all(lookups).await?;

        let ids = merge_qualifying_ids(&per_field, SCORE_THRESHOLD);

        info!(product_id = product.id, related = ids.len(), "Related-item lookup complete");
        Ok(ids)
    }
}

/// Merge per-field hit lists into a deduplicated ID list.
///
/// Hits scoring below `threshold` are dropped (the boundary is inclusive),
/// as is any hit with a NaN score. The first field that surfaces an ID
/// determines its position; later occurrences are ignored. No numeric
/// re-sort happens.
fn merge_qualifying_ids(per_field: &[Vec<SearchHit>], threshold: f64) -> Vec<u64> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for hits in per_field {
        for hit in hits {
            if hit.score.is_nan() || hit.score < threshold {
                continue;
            }
            if seen.insert(hit.id) {
                ids.push(hit.id);
            }
        }
    }
    ids
}
