//! Tracing subscriber setup for binaries embedding certwatch.

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter for `config`, honouring `RUST_LOG` if allowed and set.
pub fn env_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if config.respect_env && std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::try_from_default_env()
            .with_context(|| format!("invalid {} directives", EnvFilter::DEFAULT_ENV));
    }
    EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))
}

/// Install a global fmt subscriber.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
            respect_env: false,
            ansi: false,
        }
    }

    #[test]
    fn test_valid_filter() {
        assert!(env_filter(&config("info,certwatch=debug")).is_ok());
    }

    #[test]
    fn test_invalid_filter() {
        let err = env_filter(&config("certwatch=loudest")).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn test_init_only_once() {
        assert!(init(&config("warn")).is_ok());
        assert!(init(&config("warn")).is_err());
    }
}
