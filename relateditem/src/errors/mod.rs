//! Error types for import and related-item search.
//!
//! Both operations fail whole: the importer reports one error for the whole
//! batch and the searcher one error for the whole lookup. The variants mirror
//! the repository's error kinds so callers can tell a configuration problem
//! (not retryable) from a transport fault (retryable by the caller) and an
//! engine-reported failure.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::SettingsError;
use relateditem_repository::SearchEngineError;

/// Errors from a bulk product import run.
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// Missing or invalid configuration; not retryable.
    #[error("Import configuration error: {0}")]
    Config(String),

    /// The product catalog collaborator failed.
    #[error("Catalog error during import: {0}")]
    Catalog(String),

    /// Network or HTTP failure reaching the search engine.
    #[error("Import transport error: {0}")]
    Transport(String),

    /// The engine rejected the import; carries the engine's detail.
    #[error("Import engine error: {0}")]
    Engine(String),
}

/// Errors from a related-item lookup.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Missing or invalid configuration; not retryable.
    #[error("Search configuration error: {0}")]
    Config(String),

    /// Network or HTTP failure on any per-field query. The whole lookup
    /// aborts; no partial result is returned.
    #[error("Search transport error: {0}")]
    Transport(String),

    /// The engine reported an error for one of the queried fields.
    #[error("Search engine error: {0}")]
    Engine(String),
}

impl From<SearchEngineError> for ImportError {
    fn from(err: SearchEngineError) -> Self {
        match err {
            SearchEngineError::Config(msg) => Self::Config(msg),
            SearchEngineError::Transport(msg) => Self::Transport(msg),
            SearchEngineError::Engine(msg) => Self::Engine(msg),
        }
    }
}

impl From<SearchEngineError> for SearchError {
    fn from(err: SearchEngineError) -> Self {
        match err {
            SearchEngineError::Config(msg) => Self::Config(msg),
            SearchEngineError::Transport(msg) => Self::Transport(msg),
            SearchEngineError::Engine(msg) => Self::Engine(msg),
        }
    }
}

impl From<SettingsError> for ImportError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SettingsError> for SearchError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<CatalogError> for ImportError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_kinds_map_through() {
        let err: ImportError = SearchEngineError::config("no endpoint").into();
        assert!(matches!(err, ImportError::Config(_)));

        let err: ImportError = SearchEngineError::transport("connection refused").into();
        assert!(matches!(err, ImportError::Transport(_)));

        let err: SearchError = SearchEngineError::engine("bad envelope").into();
        assert!(matches!(err, SearchError::Engine(_)));
    }

    #[test]
    fn test_engine_detail_is_preserved() {
        let err: ImportError = SearchEngineError::engine("MapperParsingException").into();

        assert!(err.to_string().contains("MapperParsingException"));
    }
}
