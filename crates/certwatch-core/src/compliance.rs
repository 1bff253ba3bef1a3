//! Spec compliance: does an observed artifact still satisfy the desired spec?
//!
//! Both checks decode the raw artifact first and fail with [`DecodeError`] if
//! that is impossible. Otherwise they return the list of [`Violation`]s, in a
//! fixed field order. An empty list means the artifact is compliant.

use std::fmt;

use crate::certificate::{CertificateSpec, IssuerRef, X509Subject};
use crate::error::DecodeError;
use crate::request::CertificateRequest;
use crate::secret::Secret;
use crate::set::{equal_unsorted, normalize_ip, normalize_uri};
use crate::x509::{ArtifactDecoder, DecodedX509};

/// A field on the Certificate spec whose observed counterpart differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    CommonName,
    DnsNames,
    IpAddresses,
    UriSans,
    SerialNumber,
    Organizations,
    Countries,
    Localities,
    OrganizationalUnits,
    PostalCodes,
    Provinces,
    StreetAddresses,
    IsCa,
    Usages,
    Duration,
    IssuerRef,
}

impl Violation {
    /// The stable field path reported to callers.
    pub const fn path(&self) -> &'static str {
        match self {
            Violation::CommonName => "spec.commonName",
            Violation::DnsNames => "spec.dnsNames",
            Violation::IpAddresses => "spec.ipAddresses",
            Violation::UriSans => "spec.uriSANs",
            Violation::SerialNumber => "spec.subject.serialNumber",
            Violation::Organizations => "spec.subject.organizations",
            Violation::Countries => "spec.subject.countries",
            Violation::Localities => "spec.subject.localities",
            Violation::OrganizationalUnits => "spec.subject.organizationalUnits",
            Violation::PostalCodes => "spec.subject.postCodes",
            Violation::Provinces => "spec.subject.provinces",
            Violation::StreetAddresses => "spec.subject.streetAddresses",
            Violation::IsCa => "spec.isCA",
            Violation::Usages => "spec.usages",
            Violation::Duration => "spec.duration",
            Violation::IssuerRef => "spec.issuerRef",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Render a violation list as field paths.
pub fn violation_paths(violations: &[Violation]) -> Vec<&'static str> {
    violations.iter().map(Violation::path).collect()
}

/// Compare a CertificateRequest against a CertificateSpec.
///
/// Names and subject come from the decoded CSR; is-CA, usages, duration and
/// the issuer reference come from the request resource itself. Duration is
/// only compared when both sides set it.
pub fn request_matches_spec<D: ArtifactDecoder>(
    req: &CertificateRequest,
    spec: &CertificateSpec,
    decoder: &D,
) -> Result<Vec<Violation>, DecodeError> {
    let csr = decoder.decode_certificate_request(&req.spec.csr_pem)?;

    // Work on a copy of the subject so an unset subject compares as empty
    // without touching the caller's spec.
    let subject: X509Subject = spec.subject.clone().unwrap_or_default();

    let mut violations = alt_name_violations(&csr, spec);

    let dn = &csr.subject;
    if dn.serial_number != subject.serial_number {
        violations.push(Violation::SerialNumber);
    }
    if !equal_unsorted(&dn.organization, &subject.organizations) {
        violations.push(Violation::Organizations);
    }
    if !equal_unsorted(&dn.country, &subject.countries) {
        violations.push(Violation::Countries);
    }
    if !equal_unsorted(&dn.locality, &subject.localities) {
        violations.push(Violation::Localities);
    }
    if !equal_unsorted(&dn.organizational_unit, &subject.organizational_units) {
        violations.push(Violation::OrganizationalUnits);
    }
    if !equal_unsorted(&dn.postal_code, &subject.postal_codes) {
        violations.push(Violation::PostalCodes);
    }
    if !equal_unsorted(&dn.province, &subject.provinces) {
        violations.push(Violation::Provinces);
    }
    if !equal_unsorted(&dn.street_address, &subject.street_addresses) {
        violations.push(Violation::StreetAddresses);
    }

    if req.spec.is_ca != spec.is_ca {
        violations.push(Violation::IsCa);
    }
    if !equal_unsorted(&req.spec.usages, &spec.usages) {
        violations.push(Violation::Usages);
    }
    if let (Some(want), Some(got)) = (spec.duration, req.spec.duration) {
        if want != got {
            violations.push(Violation::Duration);
        }
    }
    if !issuer_ref_matches(&spec.issuer_ref, &req.spec.issuer_ref) {
        violations.push(Violation::IssuerRef);
    }

    Ok(violations)
}

/// Compare the certificate stored in a Secret against a CertificateSpec.
///
/// Only the common name and subject alternative names are checked. Issuers
/// may legitimately override the remaining fields.
pub fn secret_data_alt_names_match_spec<D: ArtifactDecoder>(
    secret: &Secret,
    spec: &CertificateSpec,
    decoder: &D,
) -> Result<Vec<Violation>, DecodeError> {
    let cert = decoder.decode_certificate(secret.certificate_bytes())?;
    Ok(alt_name_violations(&cert, spec))
}

fn alt_name_violations(decoded: &DecodedX509, spec: &CertificateSpec) -> Vec<Violation> {
    let mut violations = Vec::new();

    if decoded.subject.common_name != spec.common_name {
        violations.push(Violation::CommonName);
    }
    if !equal_unsorted(&decoded.dns_names, &spec.dns_names) {
        violations.push(Violation::DnsNames);
    }

    let want_ips: Vec<String> = spec.ip_addresses.iter().map(|s| normalize_ip(s)).collect();
    if !equal_unsorted(&decoded.ip_address_strings(), &want_ips) {
        violations.push(Violation::IpAddresses);
    }

    let want_uris: Vec<String> = spec.uri_sans.iter().map(|s| normalize_uri(s)).collect();
    if !equal_unsorted(&decoded.uri_strings(), &want_uris) {
        violations.push(Violation::UriSans);
    }

    violations
}

/// Field-by-field comparison of two issuer references.
pub fn issuer_ref_matches(a: &IssuerRef, b: &IssuerRef) -> bool {
    a.name == b.name && a.kind == b.kind && a.group == b.group
}
