//! Interface definitions for the search engine provider.
//!
//! This module defines the abstract `SearchEngineProvider` trait and the
//! `ProviderFactory` seam that allows dependency injection and swappable
//! backend implementations.

mod provider_factory;
mod search_engine_provider;

pub use provider_factory::ProviderFactory;
pub use search_engine_provider::SearchEngineProvider;
