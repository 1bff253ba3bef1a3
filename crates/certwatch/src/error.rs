//! Error types for the controller layer.

use certwatch_store::SelectorError;
use thiserror::Error;

/// A reconciliation key could not be derived for an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("{kind} in namespace {namespace:?} has no name")]
    MissingName { kind: &'static str, namespace: String },
}

/// Errors loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("label selector: {0}")]
    Selector(#[from] SelectorError),
}
