//! ESG API HTTP client.

use super::endpoint::EndpointPath;
use super::traits::EsgTransport;
use crate::error::{EsgError, FetchErrorKind, Result};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

/// ESG API client configuration.
#[derive(Debug, Clone)]
pub struct EsgClientConfig {
    /// Base URL the `/esg_api/...` paths are appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for EsgClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the ESG API.
pub struct EsgClient {
    client: Client,
    base: Url,
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(path: &EndpointPath, err: &reqwest::Error) -> EsgError {
    EsgError::fetch(
        format!("GET {path}"),
        FetchErrorKind::Network(err.to_string()),
    )
}

impl EsgClient {
    /// Create a new ESG API client.
    pub fn new(config: EsgClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| EsgError::config(format!("invalid base URL '{}': {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(EsgError::config(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| EsgError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// Each segment is percent-encoded as a single path segment, so a ticker
    /// containing `/` or spaces cannot change the route.
    #[must_use]
    pub fn url_for(&self, path: &EndpointPath) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(path.segments());
        }
        url
    }
}

impl EsgTransport for EsgClient {
    fn get(&self, path: &EndpointPath) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error(path, &e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", path, status.as_u16());
            return Err(EsgError::status(path, status.as_u16()));
        }

        let body = response.bytes().map_err(|e| network_error(path, &e))?;
        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
