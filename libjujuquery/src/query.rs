//! High-level query API.
//!
//! [`Query`] ties the pieces together: it classifies the user's filter,
//! dispatches an exact lookup or a search to the charmstore, normalizes the
//! results into a [`QueryContext`], and groups them into [`SeriesBuckets`].
//!
//! # Examples
//!
//! ```no_run
//! use libjujuquery::Query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let query = Query::connect(libjujuquery::client::DEFAULT_CHARMSTORE_URL)?;
//!
//!     let context = query.dispatch("nova*").await?;
//!     let buckets = query.bucketize(Some(&context)).await?;
//!     print!("{}", buckets.render());
//!
//!     Ok(())
//! }
//! ```

use crate::client::{Client, ClientConfig, DEFAULT_CHARMSTORE_URL, SearchParams};
use crate::entity::Entity;
use crate::error::{MUST_SEARCH_FIRST, QueryError, Result};
use crate::filter::Filter;
use crate::info::{CharmHeader, CharmInfo};
use crate::reference::strip_scheme;
use crate::search::filter_non_name_matches;
use crate::series::{BucketEntry, SeriesBuckets};
use serde::Serialize;
use tracing::{debug, trace};

/// How the results of a dispatch were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Exact identifier lookup
    Lookup,
    /// Text search, possibly after a failed lookup
    Search,
}

/// The outcome of one dispatch: the search term and the uniform result set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    term: String,
    origin: Origin,
    results: Vec<Entity>,
}

impl QueryContext {
    /// Context for a single entity found by exact lookup.
    pub fn from_lookup(term: impl Into<String>, entity: Entity) -> Self {
        Self {
            term: term.into(),
            origin: Origin::Lookup,
            results: vec![entity],
        }
    }

    /// Context for search results, keeping only identifiers containing `term`.
    pub fn from_search(term: impl Into<String>, results: Vec<Entity>) -> Self {
        let term = term.into();
        let results = filter_non_name_matches(results, &term);
        Self {
            term,
            origin: Origin::Search,
            results,
        }
    }

    /// The sanitized search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn results(&self) -> &[Entity] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Entry point for charmstore queries.
#[derive(Debug, Clone)]
pub struct Query {
    client: Client,
}

impl Query {
    /// Wraps an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects to a charmstore with default client settings.
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(Client::new(base_url)?))
    }

    /// Create a builder for advanced configuration.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Looks up a single entity by identifier; a leading `cs:` is ignored.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] when the identifier does not resolve.
    pub async fn get(&self, charm: &str) -> Result<Entity> {
        self.client.entity(strip_scheme(charm)).await
    }

    /// Autocompleting text search limited to 25 results.
    pub async fn search(&self, term: &str, promulgated: bool) -> Result<Vec<Entity>> {
        self.client
            .search(&SearchParams::new(term, promulgated))
            .await
    }

    /// Classifies `filter` and queries the charmstore accordingly.
    ///
    /// Fuzzy filters go straight to a search that includes community charms.
    /// Literal filters try an exact lookup first and fall back to the same
    /// search when the charmstore reports not-found.
    ///
    /// # Errors
    ///
    /// Filters containing `.`, `?`, `[` or `]` are rejected before any request
    /// is made.
    pub async fn dispatch(&self, filter: &str) -> Result<QueryContext> {
        let filter = Filter::parse(filter)?;
        let term = filter.term();
        debug!(
            filter = filter.raw(),
            term,
            fuzzy = filter.is_fuzzy(),
            "dispatching query"
        );

        if filter.is_fuzzy() {
            let results = self.search(term, false).await?;
            return Ok(QueryContext::from_search(term, results));
        }

        match self.get(term).await {
            Ok(entity) => Ok(QueryContext::from_lookup(term, entity)),
            Err(e) if e.is_not_found() => {
                debug!(term, "exact lookup missed, falling back to search");
                let results = self.search(term, false).await?;
                Ok(QueryContext::from_search(term, results))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches the detail of every result and groups the charms by series.
    ///
    /// Bundles and charms that fit no bucket are skipped. Detail requests are
    /// issued one at a time so bucket order follows result order.
    ///
    /// # Errors
    ///
    /// Fails with "Must search for a charm before attempting to render it."
    /// when there is no context, the context is empty, or nothing could be
    /// bucketed.
    pub async fn bucketize(&self, context: Option<&QueryContext>) -> Result<SeriesBuckets> {
        let context = context
            .filter(|ctx| !ctx.is_empty())
            .ok_or_else(|| QueryError::invalid_input(MUST_SEARCH_FIRST))?;

        let mut buckets = SeriesBuckets::new();
        for result in context.results() {
            let id = result.bare_id();
            let detail = self.client.entity(id).await?;

            let Some(meta) = detail.meta.charm_metadata.as_ref() else {
                trace!(id, "skipping bundle");
                continue;
            };

            trace!(id, name = %meta.name, "classifying charm");
            let entry = BucketEntry {
                id: id.to_string(),
                downloads: detail.download_count(),
                summary: meta.summary.clone(),
            };
            if buckets.insert(entry).is_none() {
                debug!(id, "no bucket for charm, dropping");
            }
        }

        if buckets.is_empty() {
            return Err(QueryError::invalid_input(MUST_SEARCH_FIRST));
        }
        Ok(buckets)
    }

    /// Builds the `juju-info` view of an entity previously fetched with
    /// [`Query::get`], fetching its README.
    pub async fn info(&self, entity: Option<&Entity>) -> Result<CharmInfo> {
        let entity = entity.ok_or_else(|| QueryError::invalid_input(MUST_SEARCH_FIRST))?;
        let header = CharmHeader::from_entity(entity)?;
        let readme = self.client.readme(&header.id).await?;
        Ok(header.with_readme(readme))
    }
}

/// Builder for [`Query`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: Option<String>,
    config: ClientConfig,
}

impl QueryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            config: ClientConfig::default(),
        }
    }

    /// Set the charmstore API URL. Defaults to the public charmstore.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Set client configuration directly.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `Query` instance.
    pub fn build(self) -> Result<Query> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_CHARMSTORE_URL.to_string());
        let client = Client::with_config(&base_url, self.config)?;
        Ok(Query::new(client))
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
