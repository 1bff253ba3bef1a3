//! # Certwatch Store
//!
//! Read access to cached resources, and the predicates used to pick resources
//! out of a listing.
//!
//! ## Key Types
//!
//! - [`Lister`] - The async trait for listing and getting resources
//! - [`MemoryLister`] - In-memory lister for tests
//! - [`LabelSelector`] - Label requirements passed through to the lister
//! - [`Predicate`] / [`Conjunction`] - Composable resource tests
//!
//! ## Usage
//!
//! ```rust
//! use certwatch_core::{Certificate, CertificateSpec, ObjectMeta};
//! use certwatch_store::{list_matching, LabelSelector, MemoryLister, WithSecretName};
//!
//! async fn example() {
//!     let lister = MemoryLister::with_objects([Certificate::new(
//!         ObjectMeta::new("default", "web"),
//!         CertificateSpec {
//!             secret_name: "web-tls".into(),
//!             ..Default::default()
//!         },
//!     )]);
//!
//!     let owners = list_matching(
//!         &lister,
//!         "default",
//!         &LabelSelector::everything(),
//!         &WithSecretName("web-tls".into()),
//!     )
//!     .await
//!     .unwrap();
//!     assert_eq!(owners.len(), 1);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Single read**: filtering calls the lister once and never re-sorts
//! - **No partial results**: a failing lister fails the whole filter
//! - **Predicates never error**: missing data is a non-match

pub mod error;
pub mod filter;
pub mod memory;
pub mod predicate;
pub mod selector;
pub mod traits;

pub use error::{Result, SelectorError, StoreError};
pub use filter::{
    list_certificate_requests_matching_predicates, list_certificates_matching_predicate,
    list_matching, list_matching_all,
};
pub use memory::MemoryLister;
pub use predicate::{
    matches_all, predicate_fn, BoxPredicate, CertificatePredicateFamily, Conjunction,
    ControlledBy, Everything, FnPredicate, Predicate, WithNextPrivateKeySecretName, WithRevision,
    WithSecretName,
};
pub use selector::{LabelSelector, Requirement};
pub use traits::Lister;
