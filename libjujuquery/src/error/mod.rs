//! Error types for charmstore queries
//!
//! Two kinds of failure matter to the query pipeline: the charmstore could not
//! resolve an identifier ([`QueryError::NotFound`]), or the input was rejected
//! locally ([`QueryError::InvalidInput`]). The remaining variants cover the
//! transport and decoding failures of the HTTP client.

use thiserror::Error;


/// Message used when rendering is attempted without any results to render.
pub const MUST_SEARCH_FIRST: &str = "Must search for a charm before attempting to render it.";

/// Message used when a filter contains unsupported glob characters.
pub const INVALID_FILTER: &str = "Invalid filter found, only ~ and * are supported";

/// Message used when `info` is requested for something that is not a charm.
pub const ONLY_CHARMS: &str = "Only charms support the info method.";

/// Main error type for charmstore queries
#[derive(Error, Debug)]
pub enum QueryError {
    /// The charmstore could not resolve an identifier or term (404)
    #[error("{resource_type} not found: {name}")]
    NotFound { resource_type: String, name: String },

    /// Locally detected bad input (filter characters, render before search)
    #[error("{message}")]
    InvalidInput { message: String },

    /// Network-related errors (connection, timeout, DNS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Server errors (500, 503)
    #[error("Server error (status: {status_code}): {message}")]
    Server { message: String, status_code: u16 },

    /// Responses that could not be decoded, or malformed references
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for charmstore queries
pub type Result<T> = std::result::Result<T, QueryError>;

impl QueryError {
    /// Creates a new not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libjujuquery::error::QueryError;
    ///
    /// let err = QueryError::not_found("entity", "trusty/nova-compute");
    /// assert!(err.is_not_found());
    /// ```
    pub fn not_found<S: Into<String>>(resource_type: S, name: S) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Creates a new invalid input error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libjujuquery::error::QueryError;
    ///
    /// let err = QueryError::invalid_input("bad filter");
    /// assert_eq!(err.to_string(), "bad filter");
    /// ```
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a new network error.
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new server error.
    pub fn server<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Server {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the charmstore reported that nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
