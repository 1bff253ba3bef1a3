//! CBOR stand-in for PEM encoded artifacts.
//!
//! Tests need raw bytes to put in `CertificateRequest.spec.request` and in a
//! Secret's `tls.crt`. Instead of generating real key material, fixtures
//! serialize the [`DecodedX509`] they want the decoder to see, and
//! [`CborDecoder`] reverses that.

use bytes::Bytes;

use certwatch_core::{ArtifactDecoder, DecodeError, DecodedX509};

/// Serialize a decoded artifact into fixture bytes.
pub fn encode(artifact: &DecodedX509) -> Bytes {
    let mut buf = Vec::new();
    ciborium::into_writer(artifact, &mut buf).expect("CBOR encoding to a Vec cannot fail");
    Bytes::from(buf)
}

/// Decodes bytes produced by [`encode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CborDecoder;

impl CborDecoder {
    fn decode(bytes: &[u8]) -> Result<DecodedX509, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        ciborium::from_reader(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}

impl ArtifactDecoder for CborDecoder {
    fn decode_certificate_request(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError> {
        Self::decode(bytes)
    }

    fn decode_certificate(&self, bytes: &[u8]) -> Result<DecodedX509, DecodeError> {
        Self::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certwatch_core::DistinguishedName;

    #[test]
    fn test_decodes_what_was_encoded() {
        let artifact = DecodedX509 {
            subject: DistinguishedName {
                common_name: "example.com".into(),
                ..Default::default()
            },
            dns_names: vec!["example.com".into()],
            ip_addresses: vec!["10.0.0.1".parse().unwrap()],
            uris: vec![url::Url::parse("spiffe://td/web").unwrap()],
        };

        let decoded = CborDecoder.decode_certificate(&encode(&artifact)).unwrap();
        assert_eq!(decoded, artifact);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(CborDecoder.decode_certificate(b""), Err(DecodeError::Empty));
        assert!(matches!(
            CborDecoder.decode_certificate_request(b"-----BEGIN CERTIFICATE REQUEST-----"),
            Err(DecodeError::Malformed(_))
        ));
    }
}
