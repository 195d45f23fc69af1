//! Error types for the campus library.
//!
//! The variants follow the four outcomes the site distinguishes: unknown course ids,
//! rejected application data, failed network fetches and cache misses. Everything
//! else (catalog loading, IO, JSON) is plumbing.

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Field name to the list of messages explaining why it was rejected.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Main error type for the campus library.
#[derive(Debug, Error)]
pub enum CampusError {
    // Lookup errors
    #[error("Course not found")]
    CourseNotFound { id: u32 },

    // Validation errors
    #[error("The given data was invalid.")]
    ValidationFailed { errors: FieldErrors },

    #[error("Invalid value for {field}: {message}")]
    InvalidParam { field: String, message: String },

    // Client caching layer
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("No cached response for {key}")]
    CacheMiss { key: String },

    #[error("Service worker lifecycle error: {message}")]
    Lifecycle { message: String },

    // Catalog loading
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for campus operations.
pub type Result<T> = std::result::Result<T, CampusError>;

impl From<std::io::Error> for CampusError {
    fn from(err: std::io::Error) -> Self {
        CampusError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        CampusError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for CampusError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        CampusError::Network {
            message,
            cause: Some(err.to_string()),
        }
    }
}

impl CampusError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CampusError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        CampusError::ValidationFailed { errors }
    }

    /// Convert to the HTTP status code the API answers with.
    ///
    /// - 404: unknown course
    /// - 422: rejected form data or malformed query parameter
    /// - 502: upstream fetch failed
    /// - 500: everything else
    pub fn http_status(&self) -> u16 {
        match self {
            CampusError::CourseNotFound { .. } => 404,

            CampusError::ValidationFailed { .. } | CampusError::InvalidParam { .. } => 422,

            CampusError::Network { .. } => 502,

            _ => 500,
        }
    }

    /// Check if this error could succeed on a later attempt.
    ///
    /// Nothing in the site retries automatically; the caching layer falls through to
    /// the next source instead.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CampusError::Network { .. })
    }

    /// Per-field messages, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CampusError::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}
