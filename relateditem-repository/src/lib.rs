//! # Relateditem Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search engine. It includes the unified error type, the provider and
//! provider-factory interfaces, endpoint configuration, and a concrete
//! implementation speaking the engine's HTTP wire protocol.

pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod types;

pub use config::EndpointConfig;
pub use errors::SearchEngineError;
pub use http::{default_mapping, index_name_for_site, HttpProviderFactory, HttpSearchProvider};
pub use interfaces::{ProviderFactory, SearchEngineProvider};
pub use types::{BulkDocument, MltParams, MltQuery};
