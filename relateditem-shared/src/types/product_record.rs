//! Product record as read from the catalog collaborator.

/// A product record read from the e-commerce catalog.
///
/// The catalog owns storage and pricing; this struct is a read-only snapshot
/// of the fields the related-item system needs. Records are identified by a
/// stable integer ID, which also keys the document in the search index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Stable catalog identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Full body content; may contain HTML markup.
    pub content: String,
    /// Short excerpt; may contain HTML markup.
    pub excerpt: String,
    /// Display price, already string-formatted by the catalog.
    pub display_price: String,
    /// Average customer rating.
    pub average_rating: f64,
    /// Category names, in catalog order.
    pub categories: Vec<String>,
    /// Tag names, in catalog order.
    pub tags: Vec<String>,
    /// Whether the catalog marks this record visible. Invisible records are
    /// never indexed.
    pub visible: bool,
}

impl ProductRecord {
    /// Create a visible record with the given ID and title.
    ///
    /// The remaining fields default to empty; fill them in directly.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            excerpt: String::new(),
            display_price: String::new(),
            average_rating: 0.0,
            categories: Vec::new(),
            tags: Vec::new(),
            visible: true,
        }
    }
}
