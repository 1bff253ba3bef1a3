//! In-memory implementation of the Lister trait.
//!
//! This is primarily for testing. It behaves like an informer cache: objects
//! are keyed by namespace and name, and listing returns them in insertion
//! order.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use certwatch_core::Resource;

use crate::error::{Result, StoreError};
use crate::selector::LabelSelector;
use crate::traits::Lister;

/// In-memory lister. Thread-safe via RwLock.
pub struct MemoryLister<R> {
    inner: RwLock<MemoryListerInner<R>>,
}

struct MemoryListerInner<R> {
    objects: Vec<R>,

    /// When set, every call fails with this message.
    unavailable: Option<String>,
}

impl<R: Resource + Clone> MemoryLister<R> {
    /// Create a new empty lister.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryListerInner {
                objects: Vec::new(),
                unavailable: None,
            }),
        }
    }

    /// Create a lister holding `objects`, inserted in order.
    pub fn with_objects(objects: impl IntoIterator<Item = R>) -> Self {
        let lister = Self::new();
        for obj in objects {
            lister.insert(obj);
        }
        lister
    }

    /// Insert an object, replacing any object with the same namespace and
    /// name in place.
    pub fn insert(&self, obj: R) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let existing = inner
            .objects
            .iter()
            .position(|o| o.namespace() == obj.namespace() && o.name() == obj.name());
        match existing {
            Some(idx) => inner.objects[idx] = obj,
            None => inner.objects.push(obj),
        }
    }

    /// Remove an object, returning it if it was present.
    pub fn remove(&self, namespace: &str, name: &str) -> Option<R> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let idx = inner
            .objects
            .iter()
            .position(|o| o.namespace() == namespace && o.name() == name)?;
        Some(inner.objects.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .objects
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every subsequent call fail as if the store were down.
    /// `None` restores normal operation.
    pub fn set_unavailable(&self, reason: Option<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unavailable = reason;
    }
}

impl<R: Resource + Clone> Default for MemoryLister<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> MemoryListerInner<R> {
    fn check_available(&self) -> Result<()> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R> Lister<R> for MemoryLister<R>
where
    R: Resource + Clone + Send + Sync,
{
    async fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<R>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.check_available()?;

        Ok(inner
            .objects
            .iter()
            .filter(|o| namespace.is_empty() || o.namespace() == namespace)
            .filter(|o| selector.matches(&o.meta().labels))
            .cloned()
            .collect())
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<R> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.check_available()?;

        inner
            .objects
            .iter()
            .find(|o| o.namespace() == namespace && o.name() == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: R::KIND,
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certwatch_core::{Certificate, CertificateSpec, ObjectMeta};

    fn cert(ns: &str, name: &str, secret: &str) -> Certificate {
        Certificate::new(
            ObjectMeta::new(ns, name).with_label("app", name),
            CertificateSpec {
                secret_name: secret.into(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let lister = MemoryLister::with_objects([
            cert("default", "c", "c-tls"),
            cert("default", "a", "a-tls"),
            cert("other", "b", "b-tls"),
            cert("default", "b", "b-tls"),
        ]);

        let names: Vec<String> = lister
            .list("default", &LabelSelector::everything())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.meta.name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        let all = lister.list("", &LabelSelector::everything()).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_list_applies_selector() {
        let lister = MemoryLister::with_objects([cert("default", "a", "a-tls"), cert("default", "b", "b-tls")]);
        let sel = LabelSelector::parse("app=b").unwrap();

        let found = lister.list("default", &sel).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].meta.name, "b");
    }

    #[tokio::test]
    async fn test_insert_replaces_in_place() {
        let lister = MemoryLister::with_objects([cert("default", "a", "a-tls"), cert("default", "b", "b-tls")]);
        lister.insert(cert("default", "a", "renamed-tls"));

        assert_eq!(lister.len(), 2);
        let found = lister.list("default", &LabelSelector::everything()).await.unwrap();
        assert_eq!(found[0].spec.secret_name, "renamed-tls");
    }

    #[tokio::test]
    async fn test_get_and_not_found() {
        let lister = MemoryLister::with_objects([cert("default", "a", "a-tls")]);

        let got = lister.get("default", "a").await.unwrap();
        assert_eq!(got.spec.secret_name, "a-tls");

        let err = lister.get("default", "missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Certificate default/missing not found");
    }

    #[tokio::test]
    async fn test_unavailable() {
        let lister = MemoryLister::with_objects([cert("default", "a", "a-tls")]);
        lister.set_unavailable(Some("cache not synced".into()));

        let err = lister.list("default", &LabelSelector::everything()).await.unwrap_err();
        assert_eq!(err, StoreError::Unavailable("cache not synced".into()));
        assert!(!lister.get("default", "a").await.unwrap_err().is_not_found());

        lister.set_unavailable(None);
        assert!(lister.get("default", "a").await.is_ok());
    }

    #[test]
    fn test_remove() {
        let lister = MemoryLister::with_objects([cert("default", "a", "a-tls")]);
        assert!(lister.remove("default", "a").is_some());
        assert!(lister.remove("default", "a").is_none());
        assert!(lister.is_empty());
    }
}
