//! Search engine error types.
//!
//! This module defines the unified error type for all search engine
//! operations. The three kinds map directly to how a caller should react:
//! configuration problems are not retryable, transport problems may be
//! retried by the caller, and engine-reported failures carry the engine's
//! own detail text.

use thiserror::Error;

/// Unified errors from search engine operations.
///
/// Used by the `SearchEngineProvider` trait and everything layered on top of
/// it. No operation retries internally; every error surfaces immediately.
#[derive(Debug, Clone, Error)]
pub enum SearchEngineError {
    /// Missing or invalid endpoint configuration, or an unresolvable site
    /// identity. Not retryable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP failure reaching the search engine. The caller may
    /// retry.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The search engine itself reported a failure: a non-OK bulk result or
    /// an error envelope. Carries the engine-provided detail.
    #[error("Engine error: {0}")]
    Engine(String),
}

impl SearchEngineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an engine error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

impl From<reqwest::Error> for SearchEngineError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
