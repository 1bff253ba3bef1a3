//! Test fixtures and helpers.
//!
//! Builders for Certificates together with a CertificateRequest and Secret
//! that comply with them, so tests only spell out the field they perturb.

use bytes::Bytes;
use url::Url;

use certwatch_core::{
    Certificate, CertificateRequest, CertificateRequestSpec, CertificateSpec, DecodedX509,
    DistinguishedName, IssuerRef, ObjectMeta, Secret, REVISION_ANNOTATION_KEY, TLS_CERT_KEY,
};
use certwatch_store::MemoryLister;

use crate::codec::encode;

pub const DEFAULT_NAMESPACE: &str = "default";

/// A Certificate plus the artifacts a compliant issuance would produce.
pub struct CertificateFixture {
    pub certificate: Certificate,
}

impl CertificateFixture {
    /// A Certificate `name` storing into `secret_name`, for `example.com`.
    pub fn new(name: &str, secret_name: &str) -> Self {
        let meta = ObjectMeta::new(DEFAULT_NAMESPACE, name).with_uid(format!("uid-{name}"));
        let spec = CertificateSpec {
            common_name: "example.com".into(),
            dns_names: vec!["example.com".into(), "www.example.com".into()],
            secret_name: secret_name.into(),
            issuer_ref: IssuerRef::new("ca-issuer", "Issuer"),
            ..Default::default()
        };
        Self {
            certificate: Certificate::new(meta, spec),
        }
    }

    /// Replace the spec.
    pub fn with_spec(mut self, spec: CertificateSpec) -> Self {
        self.certificate.spec = spec;
        self
    }

    /// Set `status.nextPrivateKeySecretName`.
    pub fn with_next_secret(mut self, name: &str) -> Self {
        self.certificate.status.next_private_key_secret_name = Some(name.into());
        self
    }

    pub fn spec(&self) -> &CertificateSpec {
        &self.certificate.spec
    }

    /// The names a CSR or certificate issued for this spec would carry.
    pub fn compliant_artifact(&self) -> DecodedX509 {
        artifact_for(&self.certificate.spec)
    }

    /// A request for `revision`, owned by this Certificate, carrying `artifact`.
    pub fn request_with(&self, revision: u32, artifact: &DecodedX509) -> CertificateRequest {
        let spec = &self.certificate.spec;
        let meta = ObjectMeta::new(
            self.certificate.meta.namespace.clone(),
            format!("{}-{revision}", self.certificate.meta.name),
        )
        .with_annotation(REVISION_ANNOTATION_KEY, revision.to_string())
        .with_owner(
            self.certificate
                .meta
                .controller_reference_to("cert-manager.io/v1alpha2", "Certificate"),
        );

        CertificateRequest::new(
            meta,
            CertificateRequestSpec {
                csr_pem: encode(artifact),
                is_ca: spec.is_ca,
                usages: spec.usages.clone(),
                duration: spec.duration,
                issuer_ref: spec.issuer_ref.clone(),
            },
        )
    }

    /// A request that fully complies with the spec.
    pub fn compliant_request(&self, revision: u32) -> CertificateRequest {
        self.request_with(revision, &self.compliant_artifact())
    }

    /// The Secret named by `spec.secretName`, holding `artifact`.
    pub fn secret_with(&self, artifact: &DecodedX509) -> Secret {
        Secret::new(ObjectMeta::new(
            self.certificate.meta.namespace.clone(),
            self.certificate.spec.secret_name.clone(),
        ))
        .with_data(TLS_CERT_KEY, encode(artifact))
    }

    pub fn compliant_secret(&self) -> Secret {
        self.secret_with(&self.compliant_artifact())
    }
}

/// The decoded names matching a spec exactly.
///
/// Spec IPs and URIs that do not parse are dropped.
pub fn artifact_for(spec: &CertificateSpec) -> DecodedX509 {
    let subject = spec.subject.clone().unwrap_or_default();
    DecodedX509 {
        subject: DistinguishedName {
            common_name: spec.common_name.clone(),
            serial_number: subject.serial_number,
            organization: subject.organizations,
            country: subject.countries,
            organizational_unit: subject.organizational_units,
            locality: subject.localities,
            province: subject.provinces,
            street_address: subject.street_addresses,
            postal_code: subject.postal_codes,
        },
        dns_names: spec.dns_names.clone(),
        ip_addresses: spec.ip_addresses.iter().filter_map(|s| s.parse().ok()).collect(),
        uris: spec.uri_sans.iter().filter_map(|s| Url::parse(s).ok()).collect(),
    }
}

/// A Secret with no certificate data.
pub fn empty_secret(namespace: &str, name: &str) -> Secret {
    Secret::new(ObjectMeta::new(namespace, name))
}

/// A Secret whose certificate bytes are not decodable.
pub fn corrupt_secret(namespace: &str, name: &str) -> Secret {
    empty_secret(namespace, name).with_data(TLS_CERT_KEY, Bytes::from_static(b"not a certificate"))
}

/// A lister pre-populated with the fixtures' Certificates, in order.
pub fn certificate_lister<'a>(
    fixtures: impl IntoIterator<Item = &'a CertificateFixture>,
) -> MemoryLister<Certificate> {
    MemoryLister::with_objects(fixtures.into_iter().map(|f| f.certificate.clone()))
}
