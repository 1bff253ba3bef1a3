//! The Secret resource: the credential store object holding issued material.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::meta::{ObjectMeta, Resource};

/// Data key holding the PEM encoded certificate chain.
pub const TLS_CERT_KEY: &str = "tls.crt";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Secret {
    #[serde(rename = "metadata")]
    pub meta: ObjectMeta,
    #[serde(default)]
    pub data: BTreeMap<String, Bytes>,
}

impl Secret {
    pub fn new(meta: ObjectMeta) -> Self {
        Self {
            meta,
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// The stored certificate bytes; empty if the key is absent.
    pub fn certificate_bytes(&self) -> &[u8] {
        self.data.get(TLS_CERT_KEY).map(|b| &b[..]).unwrap_or_default()
    }
}

impl Resource for Secret {
    const KIND: &'static str = "Secret";

    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_bytes() {
        let secret = Secret::new(ObjectMeta::new("default", "web-tls"));
        assert!(secret.certificate_bytes().is_empty());

        let secret = secret.with_data(TLS_CERT_KEY, b"cert".to_vec());
        assert_eq!(secret.certificate_bytes(), b"cert");
    }
}
