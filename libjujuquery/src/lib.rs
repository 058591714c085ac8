//! jujuquery - charmstore query library
//!
//! Searches the Juju charmstore for charms by name or wildcard filter and
//! fetches the metadata of a single charm.
//!
//! # Quick Start
//!
//! ```no_run
//! use libjujuquery::Query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let query = Query::builder().build()?;
//!
//!     // Literal names try an exact lookup, wildcards always search
//!     let context = query.dispatch("~adam-stokes/ghost*").await?;
//!     let buckets = query.bucketize(Some(&context)).await?;
//!     print!("{}", buckets.render());
//!
//!     // Charm details
//!     let entity = query.get("cs:trusty/mysql").await?;
//!     let info = query.info(Some(&entity)).await?;
//!     print!("{}", info.render());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Query`] - Main entry point: dispatch, bucketing and charm info
//! - [`QueryContext`] - Results of one dispatch
//! - [`SeriesBuckets`] - Results grouped by release series
//! - [`CharmInfo`] - Name, description and README of a charm
//! - [`QueryError`] - Error type for every operation

#![warn(clippy::all)]

/// Returns the libjujuquery crate version.
///
/// # Examples
///
/// ```
/// let version = libjujuquery::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

mod query;
pub use query::{Origin, Query, QueryBuilder, QueryContext};

pub use client::{Client, ClientConfig};
pub use entity::Entity;
pub use error::{QueryError, Result};
pub use info::CharmInfo;
pub use reference::CharmRef;
pub use series::{Bucket, BucketEntry, SeriesBuckets};

pub mod client;
pub mod entity;
pub mod error;
pub mod filter;
pub mod format;
pub mod info;
pub mod reference;
pub mod search;
pub mod series;
