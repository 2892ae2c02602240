//! Error types for the related-item repository.
//!
//! This module provides a unified error type for all search engine operations.

mod search_engine_error;

pub use search_engine_error::SearchEngineError;
