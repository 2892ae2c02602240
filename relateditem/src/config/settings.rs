//! Settings collaborator providing connection parameters and site identity.

use std::env;

use thiserror::Error;

use relateditem_repository::EndpointConfig;

/// Default product post type when none is configured.
const DEFAULT_PRODUCT_POST_TYPE: &str = "product";

/// Error resolving a required setting.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SettingsError(pub String);

impl SettingsError {
    /// Create a settings error.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Provides the endpoint configuration and the site identity.
///
/// The index name is derived from the site URL's host and the document type
/// from the product post type; both must be stable across import and search.
pub trait Settings: Send + Sync {
    /// Search engine connection parameters.
    ///
    /// A missing required field is a configuration error, not a retryable
    /// fault.
    fn endpoint_config(&self) -> Result<EndpointConfig, SettingsError>;

    /// Canonical site URL; its host becomes the index name.
    fn site_url(&self) -> Result<String, SettingsError>;

    /// The configured product post type; doubles as the document type name.
    fn product_post_type(&self) -> String;
}

/// Settings backed by environment variables.
///
/// # Environment Variables
///
/// - `ES_ENDPOINT`: search engine host, e.g. `search.example.com` (required)
/// - `ES_USERNAME` / `ES_PASSWORD`: optional basic-auth credentials
/// - `SITE_URL`: canonical site URL, e.g. `https://shop.example.com` (required)
/// - `PRODUCT_POST_TYPE`: product post type (default: `product`)
pub struct EnvSettings;

impl EnvSettings {
    /// Create env-backed settings.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings for EnvSettings {
    fn endpoint_config(&self) -> Result<EndpointConfig, SettingsError> {
        let endpoint = env::var("ES_ENDPOINT")
            .map_err(|_| SettingsError::new("ES_ENDPOINT is not set"))?;
        let mut config = EndpointConfig::new(endpoint);
        config.username = env::var("ES_USERNAME").ok();
        config.password = env::var("ES_PASSWORD").ok();
        Ok(config)
    }

    fn site_url(&self) -> Result<String, SettingsError> {
        env::var("SITE_URL").map_err(|_| SettingsError::new("SITE_URL is not set"))
    }

    fn product_post_type(&self) -> String {
        env::var("PRODUCT_POST_TYPE").unwrap_or_else(|_| DEFAULT_PRODUCT_POST_TYPE.to_string())
    }
}
