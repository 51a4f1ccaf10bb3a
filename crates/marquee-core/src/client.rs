//! HTTP gateway for the movie catalog API
//!
//! This module provides the JSON REST client for the two catalog
//! endpoints (`GET /movies` and `GET /movies/{id}`). It owns all
//! network concerns: URL and query-string assembly, timeouts, status
//! triage, and envelope decoding.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::types::{Envelope, MovieDetail, MoviePage, MovieSummary};

/// Default API base URL (local backend)
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding the API base URL
const BASE_URL_ENV: &str = "MARQUEE_API_BASE_URL";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameters for the catalog listing endpoint
///
/// Only set fields are emitted; an empty query fetches the whole
/// catalog on one oversized page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Page index to request (0-based)
    pub page: Option<u32>,
    /// Requested page size
    pub size: Option<u32>,
    /// Lower bound of the release-year range (inclusive)
    pub start_year: Option<u16>,
    /// Upper bound of the release-year range (inclusive)
    pub end_year: Option<u16>,
}

impl PageQuery {
    /// Query for one page of the unfiltered listing
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Self::default()
        }
    }

    /// Query for the full catalog, optionally narrowed to a single
    /// release year (start = end = year)
    pub fn catalog(year: Option<u16>) -> Self {
        Self {
            start_year: year,
            end_year: year,
            ..Self::default()
        }
    }

    /// Render the set fields as query-string pairs
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(start) = self.start_year {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = self.end_year {
            params.push(("end", end.to_string()));
        }
        params
    }
}

/// Configuration for the catalog HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API (default: local backend)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the environment
    ///
    /// Reads `MARQUEE_API_BASE_URL` when set, otherwise falls back to
    /// the default base URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// JSON REST client for the movie catalog API
///
/// Every response body is expected inside a `{ "data": .. }` envelope;
/// a bare payload is reported as a decode error. Requests are not
/// retried: a failed fetch surfaces immediately to the caller.
pub struct CatalogClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL with no trailing slash
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the catalog listing
    ///
    /// # Arguments
    /// * `query` - Listing parameters (page, size, year range)
    ///
    /// # Errors
    /// - `CatalogError::Http` - Network error or timeout
    /// - `CatalogError::Status` - Non-success status from the server
    /// - `CatalogError::Decode` - Body did not match the envelope contract
    pub async fn fetch_page(&self, query: &PageQuery) -> Result<MoviePage> {
        let url = format!("{}/movies", self.base_url);
        self.get_enveloped(&url, &query.params()).await
    }

    /// Fetch the full catalog, optionally narrowed to one release year
    ///
    /// Issues a single unpaged listing request; the server answers with
    /// everything it has on one oversized page. Used by the revenue
    /// filters and for deriving year-picker options.
    pub async fn fetch_catalog(&self, year: Option<u16>) -> Result<Vec<MovieSummary>> {
        let query = PageQuery::catalog(year);
        let page = self.fetch_page(&query).await?;
        Ok(page.items)
    }

    /// Fetch the full record for a single movie
    ///
    /// # Arguments
    /// * `id` - Opaque movie id as returned in listing items
    ///
    /// # Errors
    /// - `CatalogError::InvalidId` - Empty or whitespace-only id
    /// - `CatalogError::NotFound` - Server returned 404 for this id
    pub async fn fetch_movie(&self, id: &str) -> Result<MovieDetail> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidId(id.to_string()));
        }

        let url = format!("{}/movies/{}", self.base_url, urlencoding::encode(trimmed));
        self.get_enveloped(&url, &[]).await
    }

    /// Perform a GET and decode the enveloped JSON payload
    async fn get_enveloped<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        debug!(url, ?params, "catalog request");

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(url, "catalog resource not found");
            return Err(CatalogError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://api.example.com/v1/".to_string(),
            timeout_secs: 5,
        };
        let client = CatalogClient::with_config(config).unwrap();
        assert_eq!(client.base_url, "http://api.example.com/v1");
    }

    #[test]
    fn test_page_query_page_params() {
        let query = PageQuery::page(3, 10);
        assert_eq!(
            query.params(),
            vec![("page", "3".to_string()), ("size", "10".to_string())]
        );
    }

    #[test]
    fn test_page_query_catalog_unfiltered() {
        let query = PageQuery::catalog(None);
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_page_query_catalog_year_range() {
        let query = PageQuery::catalog(Some(2014));
        assert_eq!(
            query.params(),
            vec![("start", "2014".to_string()), ("end", "2014".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_movie_rejects_empty_id() {
        let client = CatalogClient::new().unwrap();
        let result = client.fetch_movie("   ").await;
        match result {
            Err(CatalogError::InvalidId(id)) => assert_eq!(id, "   "),
            _ => panic!("Expected InvalidId error"),
        }
    }
}
