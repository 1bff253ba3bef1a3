//! Controller configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use certwatch_core::Certificate;
use certwatch_store::{CertificatePredicateFamily, LabelSelector, Lister};

use crate::correlator::SecretCorrelator;
use crate::error::ConfigError;
use crate::queue::WorkQueue;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, e.g. `info,certwatch=debug`.
    pub filter: String,
    /// Prefer `RUST_LOG` over `filter` when it is set.
    pub respect_env: bool,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            respect_env: true,
            ansi: false,
        }
    }
}

/// Configuration for the secret correlator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Label selector restricting which Certificates are considered.
    pub label_selector: String,
    /// Which Certificate field a changed Secret is matched against.
    pub trigger: CertificatePredicateFamily,
    pub logging: LoggingConfig,
}

impl ControllerConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse the configured label selector.
    pub fn selector(&self) -> Result<LabelSelector, ConfigError> {
        Ok(LabelSelector::parse(&self.label_selector)?)
    }

    /// Build a correlator from this configuration.
    pub fn correlator<L, Q>(&self, lister: L, queue: Q) -> Result<SecretCorrelator<L, Q>, ConfigError>
    where
        L: Lister<Certificate>,
        Q: WorkQueue,
    {
        Ok(SecretCorrelator::new(lister, queue, self.selector()?, self.trigger))
    }
}
