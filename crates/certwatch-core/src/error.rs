//! Error types for certwatch core.

use thiserror::Error;

/// Failure to decode a raw X.509 artifact.
///
/// Decoding failures are terminal for a compliance check: without a decodable
/// artifact there is nothing to compare against the desired state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no data to decode")]
    Empty,

    #[error("malformed artifact: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key usage: {0}")]
pub struct ParseKeyUsageError(pub String);
