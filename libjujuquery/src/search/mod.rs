//! Result normalization.
//!
//! The charmstore matches search text against more than the identifier
//! (summaries, descriptions, tags). Only results whose identifier actually
//! contains the search term are kept.

use crate::entity::Entity;


/// Keeps only the entities whose identifier contains `term`.
///
/// # Examples
///
/// ```
/// use libjujuquery::entity::{Entity, Meta};
/// use libjujuquery::search::filter_non_name_matches;
///
/// let results = vec![
///     Entity { id: "cs:nova-compute".into(), meta: Meta::default() },
///     Entity { id: "cs:ceph-mon".into(), meta: Meta::default() },
/// ];
/// let kept = filter_non_name_matches(results, "nova");
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id, "cs:nova-compute");
/// ```
pub fn filter_non_name_matches(results: Vec<Entity>, term: &str) -> Vec<Entity> {
    results
        .into_iter()
        .filter(|entity| entity.id.contains(term))
        .collect()
}
