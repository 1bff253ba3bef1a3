//! # Certwatch Core
//!
//! Resource model and spec-compliance checks for certwatch.
//!
//! This crate performs no I/O. It describes the resources a certificate
//! controller works with and compares decoded X.509 artifacts against the
//! desired state of a certificate.
//!
//! ## Key Types
//!
//! - [`Certificate`] / [`CertificateSpec`] - Desired state of one certificate
//! - [`CertificateRequest`] - A signing attempt, carrying a PEM encoded CSR
//! - [`Secret`] - Credential store object holding the issued certificate
//! - [`DecodedX509`] - Names extracted from a CSR or certificate
//! - [`ArtifactDecoder`] - Seam for turning raw bytes into [`DecodedX509`]
//! - [`Violation`] - A spec field whose observed counterpart differs
//!
//! ## Compliance
//!
//! [`request_matches_spec`] performs the full comparison of a request
//! against a spec. [`secret_data_alt_names_match_spec`] is a narrower check of
//! an issued certificate, limited to the common name and alternative names.

pub mod certificate;
pub mod compliance;
pub mod error;
pub mod meta;
pub mod request;
pub mod secret;
pub mod set;
pub mod usage;
pub mod x509;

pub use certificate::{Certificate, CertificateSpec, CertificateStatus, IssuerRef, X509Subject};
pub use compliance::{
    issuer_ref_matches, request_matches_spec, secret_data_alt_names_match_spec, violation_paths,
    Violation,
};
pub use error::{DecodeError, ParseKeyUsageError};
pub use meta::{ObjectMeta, OwnerReference, Resource};
pub use request::{CertificateRequest, CertificateRequestSpec, REVISION_ANNOTATION_KEY};
pub use secret::{Secret, TLS_CERT_KEY};
pub use set::{canonical_ip, equal_unsorted};
pub use usage::KeyUsage;
pub use x509::{ArtifactDecoder, DecodedX509, DistinguishedName};
