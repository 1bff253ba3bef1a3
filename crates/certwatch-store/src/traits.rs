//! Lister trait: read access to a cached collection of resources.
//!
//! The controller never talks to the API server directly. It reads from a
//! lister backed by an informer cache (or, in tests, by [`MemoryLister`]).
//!
//! [`MemoryLister`]: crate::MemoryLister

use async_trait::async_trait;

use crate::error::Result;
use crate::selector::LabelSelector;

/// Read access to resources of type `R`.
///
/// # Design Notes
///
/// - **Order**: `list` returns objects in whatever order the store holds
///   them. Callers must not assume sorting.
/// - **Not found**: `get` reports a missing object as
///   [`StoreError::NotFound`](crate::StoreError::NotFound), which callers can
///   tell apart from a failing store.
/// - **Read only**: returned objects are copies; mutating them has no effect
///   on the store.
#[async_trait]
pub trait Lister<R: Send>: Send + Sync {
    /// List objects in `namespace` whose labels match `selector`.
    ///
    /// An empty namespace lists across all namespaces.
    async fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<R>>;

    /// Get a single object by namespace and name.
    async fn get(&self, namespace: &str, name: &str) -> Result<R>;
}

#[async_trait]
impl<R: Send, L: Lister<R> + ?Sized> Lister<R> for std::sync::Arc<L> {
    async fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<R>> {
        (**self).list(namespace, selector).await
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<R> {
        (**self).get(namespace, name).await
    }
}
