//! Work queue abstraction for reconciliation keys.
//!
//! The queue itself belongs to the controller runtime. This module only
//! defines what the correlator needs from it, plus an in-memory queue for
//! tests and embedding.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use crate::key::ReconciliationKey;

/// Accepts keys for later reconciliation.
///
/// `add` must not block. Implementations are expected to deduplicate keys that
/// are already pending.
pub trait WorkQueue: Send + Sync {
    fn add(&self, key: ReconciliationKey);
}

impl<Q: WorkQueue + ?Sized> WorkQueue for Arc<Q> {
    fn add(&self, key: ReconciliationKey) {
        (**self).add(key)
    }
}

/// Deduplicating FIFO queue.
#[derive(Default)]
pub struct MemoryQueue {
    inner: Mutex<MemoryQueueInner>,
}

#[derive(Default)]
struct MemoryQueueInner {
    order: VecDeque<ReconciliationKey>,
    pending: HashSet<ReconciliationKey>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending key.
    pub fn pop(&self) -> Option<ReconciliationKey> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let key = inner.order.pop_front()?;
        inner.pending.remove(&key);
        Some(key)
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of pending keys, oldest first.
    pub fn pending(&self) -> Vec<ReconciliationKey> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .iter()
            .cloned()
            .collect()
    }
}

impl WorkQueue for MemoryQueue {
    fn add(&self, key: ReconciliationKey) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.pending.insert(key.clone()) {
            inner.order.push_back(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certwatch_core::{Certificate, CertificateSpec, ObjectMeta};

    fn key(name: &str) -> ReconciliationKey {
        let crt = Certificate::new(ObjectMeta::new("default", name), CertificateSpec::default());
        ReconciliationKey::for_object(&crt).unwrap()
    }

    #[test]
    fn test_dedup_while_pending() {
        let queue = MemoryQueue::new();
        queue.add(key("a"));
        queue.add(key("b"));
        queue.add(key("a"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending(), vec![key("a"), key("b")]);
    }

    #[test]
    fn test_readd_after_pop() {
        let queue = MemoryQueue::new();
        queue.add(key("a"));
        assert_eq!(queue.pop(), Some(key("a")));
        assert!(queue.is_empty());

        queue.add(key("a"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_shared_through_arc() {
        let queue = Arc::new(MemoryQueue::new());
        let handle: Arc<dyn WorkQueue> = queue.clone();
        handle.add(key("a"));
        assert_eq!(queue.pop(), Some(key("a")));
        assert_eq!(queue.pop(), None);
    }
}
