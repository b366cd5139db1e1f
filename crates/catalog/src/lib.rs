//! HTTP implementation of the upstream catalog client.
//!
//! Talks to a SWAPI-style API serving `/films` and `/people`. The base
//! URL and request timeout come from the environment; certificate
//! verification is disabled because the public upstream has a history of
//! serving expired chains.

use std::time::Duration;

use holocron_core::catalog::{
    CatalogClient, CatalogError, CatalogFilm, CatalogPage, CatalogPerson,
};

/// Default upstream base URL.
const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog client backed by reqwest.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    base_url: String,
    http: reqwest::Client,
}

impl SwapiClient {
    /// Create a client targeting the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Build a client from environment variables.
    ///
    /// | Env Var              | Default                  |
    /// |----------------------|--------------------------|
    /// | `SWAPI_BASE_URL`     | `https://swapi.dev/api`  |
    /// | `SWAPI_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Self {
        let base_url = std::env::var("SWAPI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("SWAPI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("SWAPI_TIMEOUT_SECS must be a valid u64");

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    /// Upstream base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{collection}", self.base_url);
        tracing::debug!(%url, "Fetching catalog collection");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let page: CatalogPage<T> = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl CatalogClient for SwapiClient {
    async fn fetch_films(&self) -> Result<Vec<CatalogFilm>, CatalogError> {
        self.fetch_page("films").await
    }

    async fn fetch_people(&self) -> Result<Vec<CatalogPerson>, CatalogError> {
        self.fetch_page("people").await
    }
}
