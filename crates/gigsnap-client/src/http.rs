//! HTTP catalog source
//!
//! One blocking GET per resource; no retries. A non-2xx status is reported
//! as `FetchError::Status`, an unreadable body as `MalformedBody`.

use crate::errors::{client_build_error, malformed_body, transport_error};
use gigsnap_core::errors::FetchError;
use gigsnap_core::{CatalogSource, Resource, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Root of the public catalog API
pub const DEFAULT_API_BASE: &str = "https://groupietrackers.herokuapp.com/api";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("gigsnap/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Catalog reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Build a catalog client
    ///
    /// # Errors
    ///
    /// `Internal` if the TLS backend or client cannot be initialised.
    pub fn new(config: HttpCatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(client_build_error)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of a resource
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self, resource: Resource) -> std::result::Result<Value, FetchError> {
        let url = self.url_for(resource);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_error(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| transport_error(resource, e))?;
        serde_json::from_slice(&body).map_err(|e| malformed_body(resource, e))
    }
}
