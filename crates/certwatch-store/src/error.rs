//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur when reading from a lister.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No object with this namespace and name.
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: &'static str,
        namespace: String,
        name: String,
    },

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Label selector could not be parsed.
    #[error("invalid label selector: {0}")]
    Selector(#[from] SelectorError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// A malformed label selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty label key in requirement {0:?}")]
    EmptyKey(String),

    #[error("invalid character in label key {0:?}")]
    InvalidKey(String),

    #[error("invalid character in label value {0:?}")]
    InvalidValue(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
