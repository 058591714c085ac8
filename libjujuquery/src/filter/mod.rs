//! Filter classification.
//!
//! A user filter is either a literal charm identifier or a fuzzy pattern.
//! Only `~` (user namespace) and `*` (wildcard) are understood; the other
//! glob metacharacters are reserved and rejected.

use crate::error::{INVALID_FILTER, QueryError, Result};
use crate::reference::strip_scheme;


/// Characters that switch a filter into fuzzy mode.
pub const FUZZY_CHARS: [char; 2] = ['~', '*'];

/// Glob metacharacters that are not supported in filters.
pub const RESERVED_CHARS: [char; 4] = ['.', '?', '[', ']'];

/// Returns true if the input contains `~` or `*`.
///
/// # Examples
///
/// ```
/// use libjujuquery::filter::is_fuzzy;
///
/// assert!(!is_fuzzy("nova"));
/// assert!(is_fuzzy("nova*"));
/// assert!(is_fuzzy("~user/nova"));
/// ```
pub fn is_fuzzy(input: &str) -> bool {
    input.contains(FUZZY_CHARS)
}

/// Returns false if the input contains `.`, `?`, `[` or `]`.
///
/// # Examples
///
/// ```
/// use libjujuquery::filter::valid_filter;
///
/// assert!(valid_filter("nova*"));
/// assert!(!valid_filter("nova?"));
/// ```
pub fn valid_filter(input: &str) -> bool {
    !input.contains(RESERVED_CHARS)
}

/// Removes the wildcard characters `~` and `*` from the input.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !FUZZY_CHARS.contains(c)).collect()
}

/// Returns an error unless the input passes [`valid_filter`].
pub fn validate(input: &str) -> Result<()> {
    if valid_filter(input) {
        Ok(())
    } else {
        Err(QueryError::invalid_input(INVALID_FILTER))
    }
}

/// A validated user filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    raw: String,
    term: String,
    fuzzy: bool,
}

impl Filter {
    /// Classifies a raw filter, rejecting unsupported glob characters.
    ///
    /// The search term is the input with wildcards removed and any leading
    /// `cs:` dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use libjujuquery::filter::Filter;
    ///
    /// let filter = Filter::parse("~user/nova*").unwrap();
    /// assert!(filter.is_fuzzy());
    /// assert_eq!(filter.term(), "user/nova");
    ///
    /// assert!(Filter::parse("nova.compute").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        validate(raw)?;
        let raw = raw.trim();
        let fuzzy = is_fuzzy(raw);
        let term = sanitize(strip_scheme(raw));
        if term.is_empty() && !fuzzy {
            return Err(QueryError::invalid_input("Charm name cannot be empty"));
        }
        Ok(Self {
            raw: raw.to_string(),
            term,
            fuzzy,
        })
    }

    /// The filter exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sanitized term sent to the charmstore and used for name matching.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }
}
