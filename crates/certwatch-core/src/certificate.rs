//! The Certificate resource: the declarative desired state of one certificate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::meta::{ObjectMeta, Resource};
use crate::usage::KeyUsage;

/// Reference to the issuing backend that should sign a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssuerRef {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub group: String,
}

impl IssuerRef {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            group: String::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }
}

/// Distinguished-name fields requested for the certificate subject.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct X509Subject {
    pub organizations: Vec<String>,
    pub countries: Vec<String>,
    pub organizational_units: Vec<String>,
    pub localities: Vec<String>,
    pub provinces: Vec<String>,
    pub street_addresses: Vec<String>,
    pub postal_codes: Vec<String>,
    pub serial_number: String,
}

/// Desired state of a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    #[serde(default)]
    pub common_name: String,
    #[serde(default)]
    pub dns_names: Vec<String>,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default, rename = "uriSANs")]
    pub uri_sans: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<X509Subject>,
    #[serde(default, rename = "isCA")]
    pub is_ca: bool,
    #[serde(default)]
    pub usages: Vec<KeyUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    /// Name of the secret the signed certificate is stored in.
    pub secret_name: String,
    pub issuer_ref: IssuerRef,
}

/// Observed state of a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatus {
    /// Secret holding the private key for the issuance currently in flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_private_key_secret_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "metadata")]
    pub meta: ObjectMeta,
    pub spec: CertificateSpec,
    #[serde(default)]
    pub status: CertificateStatus,
}

impl Certificate {
    pub fn new(meta: ObjectMeta, spec: CertificateSpec) -> Self {
        Self {
            meta,
            spec,
            status: CertificateStatus::default(),
        }
    }
}

impl Resource for Certificate {
    const KIND: &'static str = "Certificate";

    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_field_names() {
        let spec = CertificateSpec {
            common_name: "example.com".into(),
            uri_sans: vec!["spiffe://cluster.local/ns/default".into()],
            is_ca: true,
            usages: vec![KeyUsage::ServerAuth],
            secret_name: "web-tls".into(),
            issuer_ref: IssuerRef::new("ca-issuer", "Issuer"),
            ..Default::default()
        };

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["commonName"], "example.com");
        assert_eq!(json["uriSANs"][0], "spiffe://cluster.local/ns/default");
        assert_eq!(json["isCA"], true);
        assert_eq!(json["usages"][0], "server auth");
        assert_eq!(json["secretName"], "web-tls");
        assert!(json.get("subject").is_none());
    }

    #[test]
    fn test_certificate_from_manifest() {
        let json = r#"{
            "metadata": {"namespace": "default", "name": "web"},
            "spec": {
                "secretName": "web-tls",
                "dnsNames": ["example.com"],
                "issuerRef": {"name": "ca-issuer", "kind": "Issuer"}
            },
            "status": {"nextPrivateKeySecretName": "web-tls-abcde"}
        }"#;

        let crt: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(crt.name(), "web");
        assert_eq!(crt.spec.issuer_ref.group, "");
        assert_eq!(
            crt.status.next_private_key_secret_name.as_deref(),
            Some("web-tls-abcde")
        );
    }
}
