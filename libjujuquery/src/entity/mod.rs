//! Charmstore entity documents.
//!
//! These mirror the JSON returned by the `meta/any` and `search` endpoints.
//! Only the metadata the commands consume is modelled; anything else in the
//! response is ignored.

use crate::reference::strip_scheme;
use serde::{Deserialize, Serialize};


/// Metadata sections requested with every entity lookup and search.
pub const META_INCLUDES: [&str; 3] = ["charm-metadata", "bundle-metadata", "stats"];

/// A charm or bundle as returned by the charmstore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier, usually carrying the `cs:` scheme
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Meta", default)]
    pub meta: Meta,
}

/// The `Meta` section of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Present only for charms
    #[serde(
        rename = "charm-metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub charm_metadata: Option<CharmMetadata>,
    /// Present only for bundles
    #[serde(
        rename = "bundle-metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bundle_metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

/// Charm-specific metadata from `metadata.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharmMetadata {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Summary", default)]
    pub summary: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Download statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "ArchiveDownloadCount", default)]
    pub archive_download_count: u64,
}

/// Body of the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<Entity>>,
}

impl Entity {
    /// The identifier with any `cs:` scheme removed.
    pub fn bare_id(&self) -> &str {
        strip_scheme(&self.id)
    }

    /// Returns true when the entity carries no charm metadata.
    pub fn is_bundle(&self) -> bool {
        self.meta.charm_metadata.is_none()
    }

    /// Archive download count, zero when the store sent no stats.
    pub fn download_count(&self) -> u64 {
        self.meta
            .stats
            .map(|s| s.archive_download_count)
            .unwrap_or_default()
    }
}
