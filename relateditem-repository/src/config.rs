//! Endpoint configuration for the search engine connection.

use url::Url;

use crate::errors::SearchEngineError;

/// Connection parameters for the search engine.
///
/// Resolved from the settings collaborator. An absent endpoint is a
/// configuration error, not a retryable fault: operations validate the config
/// before any network call is attempted.
#[derive(Debug, Clone, Default)]
pub struct EndpointConfig {
    /// Host (and optional port) of the search engine, e.g.
    /// `search.example.com` or `localhost:9200`.
    pub endpoint: String,
    /// Optional basic-auth username.
    pub username: Option<String>,
    /// Optional basic-auth password.
    pub password: Option<String>,
}

impl EndpointConfig {
    /// Create a configuration for the given endpoint host, without
    /// credentials.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: None,
            password: None,
        }
    }

    /// Attach basic-auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Check that the required connection parameters are present.
    pub fn validate(&self) -> Result<(), SearchEngineError> {
        if self.endpoint.trim().is_empty() {
            return Err(SearchEngineError::config(
                "search engine endpoint is not configured",
            ));
        }
        Ok(())
    }

    /// Build the base URL for the configured endpoint.
    ///
    /// All engine requests are rooted here; the scheme is always HTTPS.
    pub fn base_url(&self) -> Result<Url, SearchEngineError> {
        self.validate()?;
        Url::parse(&format!("https://{}/", self.endpoint)).map_err(|e| {
            SearchEngineError::config(format!(
                "invalid search engine endpoint '{}': {}",
                self.endpoint, e
            ))
        })
    }
}
