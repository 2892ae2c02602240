//! HTTP implementation of the search engine provider.
//!
//! This module provides a concrete implementation of `SearchEngineProvider`
//! speaking the engine's path-style HTTP API: index management under
//! `/{index}`, bulk upserts under `/_bulk`, and per-field similarity queries
//! under `/{index}/{type}/{id}/_mlt`.

mod index_config;
mod provider;

pub use index_config::{default_mapping, index_name_for_site};
pub use provider::{HttpProviderFactory, HttpSearchProvider};
