//! Reconciliation keys.

use std::fmt;

use certwatch_core::Resource;

use crate::error::KeyError;

/// Opaque token identifying an object for re-evaluation.
///
/// Rendered as `namespace/name`, or just `name` for cluster-scoped objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReconciliationKey(String);

impl ReconciliationKey {
    /// Derive the key for a stored object.
    pub fn for_object<R: Resource>(obj: &R) -> Result<Self, KeyError> {
        let meta = obj.meta();
        if meta.name.is_empty() {
            return Err(KeyError::MissingName {
                kind: R::KIND,
                namespace: meta.namespace.clone(),
            });
        }
        if meta.namespace.is_empty() {
            Ok(Self(meta.name.clone()))
        } else {
            Ok(Self(format!("{}/{}", meta.namespace, meta.name)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReconciliationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReconciliationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
