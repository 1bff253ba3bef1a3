//! Secret change correlation.
//!
//! When a Secret changes, the Certificates that reference it need to be
//! reconciled again. The correlator finds those Certificates through a
//! [`Lister`] and pushes their keys onto a [`WorkQueue`].
//!
//! Which Certificate field is compared with the Secret name is chosen by a
//! [`CertificatePredicateFamily`], so the same correlator serves both the
//! "issued secret changed" and the "next private key secret changed"
//! triggers.

use certwatch_core::{Certificate, Secret};
use certwatch_store::{
    list_certificates_matching_predicate, CertificatePredicateFamily, LabelSelector, Lister,
    StoreError,
};

use crate::key::ReconciliationKey;
use crate::object::StoreObject;
use crate::queue::WorkQueue;

/// Maps Secret changes to the keys of Certificates that must be requeued.
pub struct SecretCorrelator<L, Q> {
    lister: L,
    queue: Q,
    selector: LabelSelector,
    family: CertificatePredicateFamily,
}

impl<L, Q> SecretCorrelator<L, Q>
where
    L: Lister<Certificate>,
    Q: WorkQueue,
{
    pub fn new(
        lister: L,
        queue: Q,
        selector: LabelSelector,
        family: CertificatePredicateFamily,
    ) -> Self {
        Self {
            lister,
            queue,
            selector,
            family,
        }
    }

    pub fn family(&self) -> CertificatePredicateFamily {
        self.family
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Keys of the Certificates in the secret's namespace that reference it.
    ///
    /// Does not touch the queue. A Certificate whose key cannot be derived is
    /// logged and skipped; the remaining matches are still returned.
    pub async fn owners_of(&self, secret: &Secret) -> Result<Vec<ReconciliationKey>, StoreError> {
        let predicate = self.family.bind(&secret.meta.name);
        let certs = list_certificates_matching_predicate(
            &self.lister,
            &secret.meta.namespace,
            &self.selector,
            &predicate,
        )
        .await?;

        let mut keys = Vec::with_capacity(certs.len());
        for crt in &certs {
            match ReconciliationKey::for_object(crt) {
                Ok(key) => keys.push(key),
                Err(e) => {
                    tracing::error!(error = %e, namespace = %crt.meta.namespace, "error determining key for certificate");
                }
            }
        }
        Ok(keys)
    }

    /// Handle a change notification.
    ///
    /// Non-Secret objects are ignored. If listing fails nothing is enqueued.
    /// Returns the keys that were pushed onto the queue.
    pub async fn on_secret_changed(&self, obj: &StoreObject) -> Vec<ReconciliationKey> {
        let secret = match obj {
            StoreObject::Secret(secret) => secret,
            StoreObject::Certificate(_)
            | StoreObject::CertificateRequest(_)
            | StoreObject::Other { .. } => {
                let meta = obj.meta();
                tracing::debug!(
                    kind = obj.kind(),
                    namespace = %meta.namespace,
                    name = %meta.name,
                    "ignoring non-Secret object"
                );
                return Vec::new();
            }
        };

        let keys = match self.owners_of(secret).await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    namespace = %secret.meta.namespace,
                    secret = %secret.meta.name,
                    "failed listing certificates"
                );
                return Vec::new();
            }
        };

        for key in &keys {
            tracing::debug!(%key, secret = %secret.meta.name, "enqueueing certificate");
            self.queue.add(key.clone());
        }
        keys
    }
}
