//! # Certwatch
//!
//! Compliance checking and change correlation for a certificate controller.
//!
//! ## Overview
//!
//! A certificate controller keeps issued certificates in line with their
//! declared Certificate resources. Certwatch provides the two pieces every
//! reconciliation cycle relies on:
//!
//! - **Compliance**: decide whether a CertificateRequest or an issued
//!   certificate still satisfies the Certificate spec, and report exactly
//!   which fields differ
//! - **Correlation**: when a Secret changes, find the Certificates that
//!   reference it and queue them for reconciliation
//!
//! Certwatch does not decide when to re-issue, mutates nothing, and performs
//! no network I/O beyond reads from the supplied lister.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use certwatch::{ControllerConfig, MemoryQueue, StoreObject};
//! use certwatch::core::Certificate;
//! use certwatch::store::MemoryLister;
//!
//! async fn example(changed: StoreObject) {
//!     let config = ControllerConfig::default();
//!     let lister = Arc::new(MemoryLister::<Certificate>::new());
//!     let queue = Arc::new(MemoryQueue::new());
//!
//!     let correlator = config.correlator(lister, queue.clone()).unwrap();
//!     let keys = correlator.on_secret_changed(&changed).await;
//!     println!("queued {} certificates", keys.len());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `certwatch::core` - Resource model and compliance checks
//! - `certwatch::store` - Listers, selectors and predicates

pub mod config;
pub mod correlator;
pub mod error;
pub mod key;
pub mod logging;
pub mod object;
pub mod queue;

// Re-export component crates
pub use certwatch_core as core;
pub use certwatch_store as store;

pub use config::{ControllerConfig, LoggingConfig};
pub use correlator::SecretCorrelator;
pub use error::{ConfigError, KeyError};
pub use key::ReconciliationKey;
pub use object::StoreObject;
pub use queue::{MemoryQueue, WorkQueue};

// Re-export commonly used types
pub use certwatch_core::{
    request_matches_spec, secret_data_alt_names_match_spec, ArtifactDecoder, Certificate,
    CertificateRequest, CertificateSpec, DecodeError, Secret, Violation,
};
pub use certwatch_store::{CertificatePredicateFamily, LabelSelector, Lister, StoreError};
