//! List-then-filter over a [`Lister`].

use certwatch_core::{Certificate, CertificateRequest};

use crate::error::Result;
use crate::predicate::{Conjunction, Predicate};
use crate::selector::LabelSelector;
use crate::traits::Lister;

/// List objects in `namespace` matching `selector`, keeping those that satisfy
/// `predicate`.
///
/// The lister is called exactly once. The result keeps the lister's order.
/// A failing lister fails the whole call; no partial result is returned.
pub async fn list_matching<R, L, P>(
    lister: &L,
    namespace: &str,
    selector: &LabelSelector,
    predicate: &P,
) -> Result<Vec<R>>
where
    R: Send,
    L: Lister<R> + ?Sized,
    P: Predicate<R> + ?Sized,
{
    let candidates = lister.list(namespace, selector).await?;
    let total = candidates.len();

    let matched: Vec<R> = candidates
        .into_iter()
        .filter(|obj| predicate.matches(obj))
        .collect();

    tracing::trace!(namespace, %selector, total, matched = matched.len(), "filtered listing");
    Ok(matched)
}

/// Like [`list_matching`], requiring every predicate in the conjunction.
pub async fn list_matching_all<R, L, P>(
    lister: &L,
    namespace: &str,
    selector: &LabelSelector,
    predicates: &Conjunction<P>,
) -> Result<Vec<R>>
where
    R: Send,
    L: Lister<R> + ?Sized,
    P: Predicate<R>,
{
    list_matching(lister, namespace, selector, predicates).await
}

/// Certificates in `namespace` satisfying `predicate`.
pub async fn list_certificates_matching_predicate<L, P>(
    lister: &L,
    namespace: &str,
    selector: &LabelSelector,
    predicate: &P,
) -> Result<Vec<Certificate>>
where
    L: Lister<Certificate> + ?Sized,
    P: Predicate<Certificate> + ?Sized,
{
    list_matching(lister, namespace, selector, predicate).await
}

/// CertificateRequests in `namespace` satisfying every predicate.
pub async fn list_certificate_requests_matching_predicates<L, P>(
    lister: &L,
    namespace: &str,
    selector: &LabelSelector,
    predicates: &Conjunction<P>,
) -> Result<Vec<CertificateRequest>>
where
    L: Lister<CertificateRequest> + ?Sized,
    P: Predicate<CertificateRequest>,
{
    list_matching_all(lister, namespace, selector, predicates).await
}
