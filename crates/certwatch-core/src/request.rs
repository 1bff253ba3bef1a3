//! The CertificateRequest resource: one signing attempt for a Certificate.

use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::certificate::IssuerRef;
use crate::meta::{ObjectMeta, Resource};
use crate::usage::KeyUsage;

/// Annotation recording which revision of the owning Certificate a request
/// was created for. The value is the revision in decimal.
pub const REVISION_ANNOTATION_KEY: &str = "cert-manager.io/certificate-revision";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    /// PEM encoded certificate signing request.
    #[serde(rename = "request")]
    pub csr_pem: Bytes,
    #[serde(default, rename = "isCA")]
    pub is_ca: bool,
    #[serde(default)]
    pub usages: Vec<KeyUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    pub issuer_ref: IssuerRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CertificateRequest {
    #[serde(rename = "metadata")]
    pub meta: ObjectMeta,
    pub spec: CertificateRequestSpec,
}

impl CertificateRequest {
    pub fn new(meta: ObjectMeta, spec: CertificateRequestSpec) -> Self {
        Self { meta, spec }
    }

    /// The revision annotation, if present.
    pub fn revision(&self) -> Option<&str> {
        self.meta
            .annotations
            .get(REVISION_ANNOTATION_KEY)
            .map(String::as_str)
    }
}

impl Resource for CertificateRequest {
    const KIND: &'static str = "CertificateRequest";

    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
}
