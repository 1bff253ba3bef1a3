//! # Certwatch Testkit
//!
//! Testing utilities for certwatch.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Codec**: [`CborDecoder`], an [`ArtifactDecoder`](certwatch_core::ArtifactDecoder)
//!   for fixture bytes, so tests need no real PEM material
//! - **Fixtures**: Certificates together with compliant requests and secrets
//! - **Generators**: Proptest strategies for specs and set-valued fields
//!
//! ## Test Fixtures
//!
//! ```rust
//! use certwatch_core::request_matches_spec;
//! use certwatch_testkit::{CborDecoder, CertificateFixture};
//!
//! let fixture = CertificateFixture::new("web", "web-tls");
//! let req = fixture.compliant_request(1);
//! let violations = request_matches_spec(&req, fixture.spec(), &CborDecoder).unwrap();
//! assert!(violations.is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use certwatch_testkit::generators::certificate_spec;
//!
//! proptest! {
//!     #[test]
//!     fn compliant_request_is_clean(spec in certificate_spec()) {
//!         // ...
//!     }
//! }
//! ```

pub mod codec;
pub mod fixtures;
pub mod generators;

pub use codec::{encode, CborDecoder};
pub use fixtures::{
    artifact_for, certificate_lister, corrupt_secret, empty_secret, CertificateFixture,
    DEFAULT_NAMESPACE,
};
pub use generators::{certificate_spec, shuffle_and_duplicate};
