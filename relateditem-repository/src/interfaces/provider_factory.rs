//! Provider factory trait definition.

use std::sync::Arc;

use crate::config::EndpointConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::SearchEngineProvider;

/// Builds a fresh provider from endpoint configuration.
///
/// Import and search each build a new client per run. Injecting the factory
/// keeps both testable without a live engine: tests install a factory that
/// hands out a mock provider and counts how often it was asked.
pub trait ProviderFactory: Send + Sync {
    /// Create a provider for the given configuration.
    ///
    /// An incomplete configuration fails with a configuration error before
    /// any network call.
    fn create(
        &self,
        config: &EndpointConfig,
    ) -> Result<Arc<dyn SearchEngineProvider>, SearchEngineError>;
}
