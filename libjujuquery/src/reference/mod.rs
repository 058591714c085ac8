//! Charm reference parsing.
//!
//! Charmstore identifiers may carry a `cs:` scheme marker
//! (`cs:~user/trusty/ghost-6`). The marker is dropped on parse so that
//! comparisons, display and follow-up lookups all see the bare identifier.

use crate::error::{QueryError, Result};
use std::fmt;
use std::str::FromStr;


/// Scheme marker prefixed to charmstore identifiers.
pub const SCHEME_PREFIX: &str = "cs:";

/// Removes a leading `cs:` from an identifier, if present.
///
/// # Examples
///
/// ```
/// use libjujuquery::reference::strip_scheme;
///
/// assert_eq!(strip_scheme("cs:trusty/mysql-1"), "trusty/mysql-1");
/// assert_eq!(strip_scheme("trusty/mysql-1"), "trusty/mysql-1");
/// ```
pub fn strip_scheme(id: &str) -> &str {
    id.strip_prefix(SCHEME_PREFIX).unwrap_or(id)
}

/// An identifier of a charm or bundle in the charmstore, without the scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharmRef(String);

impl FromStr for CharmRef {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        let id = strip_scheme(s.trim());
        if id.is_empty() {
            return Err(QueryError::validation(format!(
                "Invalid charm reference: '{}'",
                s
            )));
        }
        Ok(CharmRef(id.to_string()))
    }
}

impl fmt::Display for CharmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CharmRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CharmRef {
    /// Returns the bare identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier with the `cs:` scheme restored.
    pub fn to_url(&self) -> String {
        format!("{}{}", SCHEME_PREFIX, self.0)
    }

    /// Returns the user namespace of a `~user/...` identifier.
    pub fn owner(&self) -> Option<&str> {
        self.0
            .strip_prefix('~')
            .and_then(|rest| rest.split('/').next())
            .filter(|owner| !owner.is_empty())
    }
}
