//! Hit type returned by similarity queries.

/// A single hit from a more-like-this query.
///
/// Hits are ephemeral: the searcher only uses them to build the final ID
/// list. Order within a result set is the engine's own relevance order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Product ID of the matching document.
    pub id: u64,
    /// Relevance score assigned by the engine.
    pub score: f64,
}

impl SearchHit {
    /// Create a new hit.
    pub fn new(id: u64, score: f64) -> Self {
        Self { id, score }
    }
}
