//! Decoded X.509 names and the decoder seam.
//!
//! Parsing PEM/DER material is not done here. Callers plug in an
//! [`ArtifactDecoder`] that turns raw signing-request or certificate bytes into
//! a [`DecodedX509`], and the compliance checks compare that against the
//! desired [`CertificateSpec`](crate::CertificateSpec).

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DecodeError;
use crate::set::canonical_ip;

/// Subject distinguished name as found in a decoded artifact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DistinguishedName {
    pub common_name: String,
    pub serial_number: String,
    pub organization: Vec<String>,
    pub country: Vec<String>,
    pub organizational_unit: Vec<String>,
    pub locality: Vec<String>,
    pub province: Vec<String>,
    pub street_address: Vec<String>,
    pub postal_code: Vec<String>,
}

/// Names carried by a decoded signing request or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodedX509 {
    pub subject: DistinguishedName,
    pub dns_names: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    pub uris: Vec<Url>,
}

impl DecodedX509 {
    /// IP SANs rendered in canonical textual form.
    pub fn ip_address_strings(&self) -> Vec<String> {
        self.ip_addresses.iter().map(canonical_ip).collect()
    }

    /// URI SANs rendered as strings.
    pub fn uri_strings(&self) -> Vec<String> {
        self.uris.iter().map(|u| u.as_str().to_string()).collect()
    }
}

/// Turns raw artifact bytes into decoded names.
///
/// Implementations must be pure: the same bytes always decode to the same
/// value or the same error.
pub trait ArtifactDecoder {
    /// Decode a PEM encoded certificate signing request.
    fn decode_certificate_request(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError>;

    /// Decode a PEM encoded certificate (the leaf of a chain).
    fn decode_certificate(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError>;
}

impl<D: ArtifactDecoder + ?Sized> ArtifactDecoder for &D {
    fn decode_certificate_request(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError> {
        (**self).decode_certificate_request(bytes)
    }

    fn decode_certificate(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError> {
        (**self).decode_certificate(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_strings_are_canonical() {
        let decoded = DecodedX509 {
            ip_addresses: vec![
                "10.0.0.1".parse().unwrap(),
                "0:0:0:0:0:0:0:1".parse().unwrap(),
            ],
            ..Default::default()
        };
        assert_eq!(decoded.ip_address_strings(), vec!["10.0.0.1", "::1"]);
    }

    #[test]
    fn test_uri_strings() {
        let decoded = DecodedX509 {
            uris: vec![Url::parse("spiffe://cluster.local/ns/default/sa/web").unwrap()],
            ..Default::default()
        };
        assert_eq!(
            decoded.uri_strings(),
            vec!["spiffe://cluster.local/ns/default/sa/web"]
        );
    }
}
