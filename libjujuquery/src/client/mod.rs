//! HTTP client for the charmstore API.
//!
//! A thin layer over reqwest that speaks the read-only subset of the
//! charmstore v4 API the query commands need: entity metadata, text search
//! and README content.

use crate::entity::{Entity, META_INCLUDES, SearchResponse};
use crate::error::{QueryError, Result};
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

#[cfg(test)]
mod tests;

/// Public charmstore endpoint.
pub const DEFAULT_CHARMSTORE_URL: &str = "https://api.jujucharms.com/v4";

/// Maximum number of results requested from the search endpoint.
pub const SEARCH_LIMIT: usize = 25;

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libjujuquery::client::ClientConfig;
///
/// let config = ClientConfig::new().with_timeout(60);
/// assert_eq!(config.timeout_seconds, 60);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }
}

/// Parameters of a text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub text: String,
    pub autocomplete: bool,
    /// Restrict results to promulgated (official) entities
    pub promulgated_only: bool,
    pub limit: usize,
}

impl SearchParams {
    /// Autocompleting search for `text` with the default result limit.
    pub fn new<S: Into<String>>(text: S, promulgated_only: bool) -> Self {
        Self {
            text: text.into(),
            autocomplete: true,
            promulgated_only,
            limit: SEARCH_LIMIT,
        }
    }
}

/// HTTP client for charmstore operations.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: ReqwestClient,
    /// Base API URL without trailing slash (e.g., "https://api.jujucharms.com/v4")
    base_url: String,
    timeout_seconds: u64,
}

impl Client {
    /// Creates a client for the given base URL with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libjujuquery::client::{Client, DEFAULT_CHARMSTORE_URL};
    ///
    /// let client = Client::new(DEFAULT_CHARMSTORE_URL).unwrap();
    /// assert_eq!(client.base_url(), "https://api.jujucharms.com/v4");
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Creates a client for the given base URL with custom configuration.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let normalized_url = Self::normalize_url(base_url)?;

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| QueryError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            base_url: normalized_url,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Ensures the URL has a scheme, parses, and drops trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(QueryError::validation("Charmstore URL cannot be empty"));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("https://{}", url)
        } else {
            url.to_string()
        };

        Url::parse(&url).map_err(|e| {
            QueryError::validation_with_source(format!("Invalid charmstore URL: {}", url), e)
        })?;

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Returns the base API URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the metadata of a single charm or bundle.
    ///
    /// `id` must not carry the `cs:` scheme.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] if the charmstore has no such entity.
    pub async fn entity(&self, id: &str) -> Result<Entity> {
        let mut url = self.endpoint(id.split('/').chain(["meta", "any"]))?;
        {
            let mut query = url.query_pairs_mut();
            for include in META_INCLUDES {
                query.append_pair("include", include);
            }
        }

        debug!(id, "fetching entity metadata");
        let response = self.get(url, "entity", id).await?;

        response.json::<Entity>().await.map_err(|e| {
            QueryError::validation_with_source(format!("Failed to parse entity '{}'", id), e)
        })
    }

    /// Runs a text search and returns the matching entities.
    ///
    /// A response with no `Results` yields an empty vector.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<Entity>> {
        let mut url = self.endpoint(["search"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("text", &params.text);
            if params.autocomplete {
                query.append_pair("autocomplete", "1");
            }
            if params.promulgated_only {
                query.append_pair("promulgated", "1");
            }
            query.append_pair("limit", &params.limit.to_string());
            for include in META_INCLUDES {
                query.append_pair("include", include);
            }
        }

        debug!(
            text = %params.text,
            promulgated_only = params.promulgated_only,
            limit = params.limit,
            "searching charmstore"
        );
        let response = self.get(url, "search results", &params.text).await?;

        let body: SearchResponse = response.json().await.map_err(|e| {
            QueryError::validation_with_source("Failed to parse search response", e)
        })?;
        let results = body.results.unwrap_or_default();
        trace!(count = results.len(), "search returned");
        Ok(results)
    }

    /// Fetches the README of an entity as plain text.
    pub async fn readme(&self, id: &str) -> Result<String> {
        let url = self.endpoint(id.split('/').chain(["readme"]))?;

        debug!(id, "fetching readme");
        let response = self.get(url, "readme", id).await?;

        response
            .text()
            .await
            .map_err(|e| QueryError::network_with_source("Failed to read readme response", e))
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let invalid = || format!("Invalid charmstore URL: {}", self.base_url);
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| QueryError::validation_with_source(invalid(), e))?;
        url.path_segments_mut()
            .map_err(|_| QueryError::validation(invalid()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, resource_type: &str, name: &str) -> Result<Response> {
        trace!(url = %url, "GET");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| self.translate_reqwest_error(e))?;

        Self::check_response_status(response, resource_type, name).await
    }

    /// Translates a reqwest error into a QueryError.
    fn translate_reqwest_error(&self, error: reqwest::Error) -> QueryError {
        if error.is_timeout() {
            QueryError::network(format!(
                "Request to {} timed out after {} seconds",
                self.base_url, self.timeout_seconds
            ))
        } else if error.is_connect() {
            QueryError::network_with_source(
                format!("Failed to connect to charmstore at {}", self.base_url),
                error,
            )
        } else {
            QueryError::network_with_source(
                format!("Network error communicating with {}", self.base_url),
                error,
            )
        }
    }

    /// Checks the HTTP response status and translates failures to QueryError.
    async fn check_response_status(
        response: Response,
        resource_type: &str,
        name: &str,
    ) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(unable to read response body)"));

        match status {
            StatusCode::NOT_FOUND => Err(QueryError::not_found(resource_type, name)),
            s if s.is_server_error() => Err(QueryError::server(
                format!("Server error from {}: {}", url, error_body),
                s.as_u16(),
            )),
            _ => Err(QueryError::network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                url,
                error_body
            ))),
        }
    }
}
