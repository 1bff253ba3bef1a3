//! Objects delivered by store change notifications.
//!
//! Watch handlers receive whatever changed in the store. The variant is
//! decided once here so downstream logic never has to inspect types at
//! runtime.

use certwatch_core::{Certificate, CertificateRequest, ObjectMeta, Resource, Secret};

/// A changed object as delivered by a watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreObject {
    Secret(Secret),
    Certificate(Certificate),
    CertificateRequest(CertificateRequest),
    /// Any kind this crate does not model.
    Other { kind: String, meta: ObjectMeta },
}

impl StoreObject {
    pub fn kind(&self) -> &str {
        match self {
            StoreObject::Secret(_) => Secret::KIND,
            StoreObject::Certificate(_) => Certificate::KIND,
            StoreObject::CertificateRequest(_) => CertificateRequest::KIND,
            StoreObject::Other { kind, .. } => kind,
        }
    }

    pub fn meta(&self) -> &ObjectMeta {
        match self {
            StoreObject::Secret(s) => &s.meta,
            StoreObject::Certificate(c) => &c.meta,
            StoreObject::CertificateRequest(r) => &r.meta,
            StoreObject::Other { meta, .. } => meta,
        }
    }
}

impl From<Secret> for StoreObject {
    fn from(secret: Secret) -> Self {
        StoreObject::Secret(secret)
    }
}

impl From<Certificate> for StoreObject {
    fn from(crt: Certificate) -> Self {
        StoreObject::Certificate(crt)
    }
}

impl From<CertificateRequest> for StoreObject {
    fn from(req: CertificateRequest) -> Self {
        StoreObject::CertificateRequest(req)
    }
}
