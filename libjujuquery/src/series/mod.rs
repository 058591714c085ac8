//! Series buckets for search results.
//!
//! Every charm found by a search lands in at most one bucket: user-namespaced
//! charms first, then by the release series named in the identifier. Buckets
//! are displayed in reverse lexicographic order of their names, which yields
//! `trusty`, `precise`, `namespaced`.

use crate::filter::is_fuzzy;
use crate::format::capitalize;
use serde::Serialize;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// The named buckets search results are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Trusty,
    Precise,
    Namespaced,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Trusty, Bucket::Precise, Bucket::Namespaced];

    pub fn name(self) -> &'static str {
        match self {
            Bucket::Trusty => "trusty",
            Bucket::Precise => "precise",
            Bucket::Namespaced => "namespaced",
        }
    }

    /// Header shown above the bucket's entries.
    pub fn title(self) -> String {
        capitalize(self.name())
    }
}

/// Picks the bucket for an identifier, or `None` if it fits none.
///
/// A namespaced (`~user/...`) identifier is always `Namespaced`, even when it
/// also names a series.
///
/// # Examples
///
/// ```
/// use libjujuquery::series::{classify, Bucket};
///
/// assert_eq!(classify("cs:~user/trusty/nova"), Some(Bucket::Namespaced));
/// assert_eq!(classify("cs:trusty/nova-compute"), Some(Bucket::Trusty));
/// assert_eq!(classify("cs:xenial/nova-compute"), None);
/// ```
pub fn classify(id: &str) -> Option<Bucket> {
    if is_fuzzy(id) {
        Some(Bucket::Namespaced)
    } else if id.contains("trusty") {
        Some(Bucket::Trusty)
    } else if id.contains("precise") {
        Some(Bucket::Precise)
    } else {
        None
    }
}

/// One charm in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEntry {
    pub id: String,
    pub downloads: u64,
    pub summary: String,
}

/// Search results grouped by series, in insertion order within each bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesBuckets {
    buckets: BTreeMap<&'static str, Vec<BucketEntry>>,
}

impl Default for SeriesBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesBuckets {
    /// Creates the map with every bucket present and empty.
    pub fn new() -> Self {
        let buckets = Bucket::ALL
            .iter()
            .map(|bucket| (bucket.name(), Vec::new()))
            .collect();
        Self { buckets }
    }

    /// Classifies the entry by its identifier and appends it to its bucket.
    ///
    /// Returns the bucket used, or `None` if the entry was dropped.
    pub fn insert(&mut self, entry: BucketEntry) -> Option<Bucket> {
        let bucket = classify(&entry.id)?;
        self.buckets.entry(bucket.name()).or_default().push(entry);
        Some(bucket)
    }

    /// Entries of a single bucket.
    pub fn get(&self, bucket: Bucket) -> &[BucketEntry] {
        self.buckets
            .get(bucket.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty buckets in display order (reverse lexicographic by name).
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &[BucketEntry])> + '_ {
        self.buckets
            .iter()
            .rev()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, entries)| (*name, entries.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }

    /// Total number of bucketed entries.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// The entry suggested in the usage hint: the first entry of the last
    /// non-empty bucket in display order.
    pub fn hint_entry(&self) -> Option<&BucketEntry> {
        self.non_empty()
            .last()
            .and_then(|(_, entries)| entries.first())
    }

    /// Plain-text listing: a header per non-empty bucket, one identifier per
    /// line, then a usage hint for [`SeriesBuckets::hint_entry`].
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (name, entries) in self.non_empty() {
            output.push_str(&capitalize(name));
            output.push('\n');
            for entry in entries {
                output.push_str(&format!("  {}\n", entry.id));
            }
            output.push('\n');
        }

        if let Some(entry) = self.hint_entry() {
            output.push_str("Example usage:\n");
            output.push_str(&format!("  juju deploy {}\n", entry.id));
            output.push_str(&format!("  juju info {}\n", entry.id));
        }

        output
    }
}

impl Serialize for SeriesBuckets {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        for (name, entries) in self.non_empty() {
            map.serialize_entry(name, entries)?;
        }
        map.end()
    }
}
