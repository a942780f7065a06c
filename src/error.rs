//! Error types for the DroneLogBook client
//!
//! Every public operation returns `Result<T, Error>` where Error is defined here.
//! An absent identifier is never an error: fetchers return `Ok(None)` instead.

use std::fmt;
use thiserror::Error;

/// Related entity of a flight that hydration resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Drone,
    Place,
    Project,
    /// One element of the flight's equipment list
    Equipment { guid: String },
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Drone => f.write_str("drone"),
            Relation::Place => f.write_str("place"),
            Relation::Project => f.write_str("project"),
            Relation::Equipment { guid } => write!(f, "equipment '{guid}'"),
        }
    }
}

/// The main error type for the DroneLogBook client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {endpoint}")]
    RequestFailed { status: u16, endpoint: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Failed to hydrate {relation}: {source}")]
    Hydration {
        relation: Relation,
        #[source]
        source: Box<Error>,
    },

    #[error("Pagination stopped after {max_pages} pages while the server still reported more")]
    PaginationLimitExceeded { max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a request failure for a non-success status
    pub fn request_failed(status: u16, endpoint: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Wrap a nested fetch failure with the relation it was resolving
    pub fn hydration(relation: Relation, source: Error) -> Self {
        Self::Hydration {
            relation,
            source: Box::new(source),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            Error::Hydration { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Relation named by a hydration failure
    pub fn relation(&self) -> Option<&Relation> {
        match self {
            Error::Hydration { relation, .. } => Some(relation),
            _ => None,
        }
    }
}

/// Result type alias for the DroneLogBook client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
