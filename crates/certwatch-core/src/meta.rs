//! Object metadata shared by every stored resource.
//!
//! Resources are identified by `(namespace, name)` and carry labels,
//! annotations and owner references the way the backing store records them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reference from a dependent object to the object that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
    /// Set to `Some(true)` on the single managing owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,
}

impl OwnerReference {
    /// Whether this reference marks its owner as the managing controller.
    pub fn is_controller(&self) -> bool {
        self.controller == Some(true)
    }
}

/// Metadata common to all stored objects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Empty for cluster-scoped objects.
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub owner_references: Vec<OwnerReference>,
}

impl ObjectMeta {
    /// Create metadata for a namespaced object.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the object's UID.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Add a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Add an owner reference.
    pub fn with_owner(mut self, owner: OwnerReference) -> Self {
        self.owner_references.push(owner);
        self
    }

    /// The first owner reference flagged as controller, if any.
    pub fn controller_ref(&self) -> Option<&OwnerReference> {
        self.owner_references.iter().find(|r| r.is_controller())
    }

    /// Whether the object is controlled by the owner with the given UID.
    ///
    /// Only the controlling reference counts; a plain (non-controller)
    /// reference to the same owner does not.
    pub fn is_controlled_by(&self, owner_uid: &str) -> bool {
        self.controller_ref().is_some_and(|r| r.uid == owner_uid)
    }

    /// Build a controlling owner reference pointing at this object.
    pub fn controller_reference_to(
        &self,
        api_version: impl Into<String>,
        kind: impl Into<String>,
    ) -> OwnerReference {
        OwnerReference {
            api_version: api_version.into(),
            kind: kind.into(),
            name: self.name.clone(),
            uid: self.uid.clone(),
            controller: Some(true),
        }
    }
}

/// Anything stored with [`ObjectMeta`].
pub trait Resource {
    /// The object's kind, e.g. `"Certificate"`.
    const KIND: &'static str;

    fn meta(&self) -> &ObjectMeta;

    fn namespace(&self) -> &str {
        &self.meta().namespace
    }

    fn name(&self) -> &str {
        &self.meta().name
    }
}
