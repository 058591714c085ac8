//! Charm information shown by `juju-info`.

use crate::entity::Entity;
use crate::error::{ONLY_CHARMS, QueryError, Result};
use crate::format::{WRAP_WIDTH, wrap};
use serde::Serialize;


/// Name, description and README of a single charm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharmInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub readme: String,
}

/// The part of a charm entity needed before the README is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharmHeader {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl CharmHeader {
    /// Extracts the header of a charm.
    ///
    /// # Errors
    ///
    /// Bundles and charms without a description are rejected with
    /// "Only charms support the info method.".
    pub fn from_entity(entity: &Entity) -> Result<Self> {
        let meta = entity
            .meta
            .charm_metadata
            .as_ref()
            .ok_or_else(|| QueryError::invalid_input(ONLY_CHARMS))?;
        let description = meta
            .description
            .as_ref()
            .ok_or_else(|| QueryError::invalid_input(ONLY_CHARMS))?;

        Ok(Self {
            id: entity.bare_id().to_string(),
            name: meta.name.clone(),
            description: description.clone(),
        })
    }

    pub fn with_readme(self, readme: String) -> CharmInfo {
        CharmInfo {
            id: self.id,
            name: self.name,
            description: self.description,
            readme,
        }
    }
}

/// The line of the description shown in the summary: the closing line of the
/// trimmed description wrapped at 79 columns.
///
/// # Examples
///
/// ```
/// use libjujuquery::info::description_line;
///
/// assert_eq!(description_line("  Ghost blogging.  "), "Ghost blogging.");
/// assert_eq!(description_line(""), "");
/// ```
pub fn description_line(description: &str) -> String {
    wrap(description.trim(), WRAP_WIDTH)
        .pop()
        .unwrap_or_default()
}

impl CharmInfo {
    /// Plain-text rendering: name, description line, then the README.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n\nREADME\n\n{}\n\n",
            self.name,
            description_line(&self.description),
            self.readme
        )
    }
}
