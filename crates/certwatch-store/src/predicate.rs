//! Predicates over resources.
//!
//! A predicate is a small immutable value that answers "does this resource
//! match?". Predicates never fail: a missing annotation or field is simply a
//! non-match. They compose by conjunction through [`Conjunction`], which is
//! non-empty by construction.

use certwatch_core::{Certificate, CertificateRequest, ObjectMeta};
use serde::{Deserialize, Serialize};

/// A pure boolean test over one resource.
pub trait Predicate<R: ?Sized> {
    fn matches(&self, resource: &R) -> bool;
}

impl<R: ?Sized, P: Predicate<R> + ?Sized> Predicate<R> for &P {
    fn matches(&self, resource: &R) -> bool {
        (**self).matches(resource)
    }
}

impl<R: ?Sized, P: Predicate<R> + ?Sized> Predicate<R> for Box<P> {
    fn matches(&self, resource: &R) -> bool {
        (**self).matches(resource)
    }
}

/// A boxed, thread-safe predicate.
pub type BoxPredicate<R> = Box<dyn Predicate<R> + Send + Sync>;

/// Matches every resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct Everything;

impl<R: ?Sized> Predicate<R> for Everything {
    fn matches(&self, _: &R) -> bool {
        true
    }
}

/// Adapts a closure into a [`Predicate`].
#[derive(Clone, Copy)]
pub struct FnPredicate<F>(F);

/// Wrap a closure as a predicate.
pub fn predicate_fn<R, F>(f: F) -> FnPredicate<F>
where
    F: Fn(&R) -> bool,
{
    FnPredicate(f)
}

impl<R, F: Fn(&R) -> bool> Predicate<R> for FnPredicate<F> {
    fn matches(&self, resource: &R) -> bool {
        (self.0)(resource)
    }
}

/// `true` iff every predicate matches, evaluated left to right and stopping at
/// the first non-match. An empty slice matches.
pub fn matches_all<R: ?Sized, P: Predicate<R>>(predicates: &[P], resource: &R) -> bool {
    predicates.iter().all(|p| p.matches(resource))
}

/// A non-empty conjunction of predicates.
#[derive(Debug, Clone)]
pub struct Conjunction<P> {
    predicates: Vec<P>,
}

impl<P> Conjunction<P> {
    pub fn new(first: P) -> Self {
        Self {
            predicates: vec![first],
        }
    }

    /// Append another predicate.
    pub fn and(mut self, next: P) -> Self {
        self.predicates.push(next);
        self
    }

    /// The predicates in evaluation order. Never empty.
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }
}

impl<R: ?Sized, P: Predicate<R>> Predicate<R> for Conjunction<P> {
    fn matches(&self, resource: &R) -> bool {
        matches_all(&self.predicates, resource)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Certificate predicates
// ─────────────────────────────────────────────────────────────────────────────

/// Matches certificates whose `spec.secretName` equals the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithSecretName(pub String);

impl Predicate<Certificate> for WithSecretName {
    fn matches(&self, crt: &Certificate) -> bool {
        crt.spec.secret_name == self.0
    }
}

/// Matches certificates whose `status.nextPrivateKeySecretName` is set and
/// equals the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithNextPrivateKeySecretName(pub String);

impl Predicate<Certificate> for WithNextPrivateKeySecretName {
    fn matches(&self, crt: &Certificate) -> bool {
        crt.status.next_private_key_secret_name.as_deref() == Some(self.0.as_str())
    }
}

/// Which secret-name field of a certificate to correlate a secret against.
///
/// Binding a family to a secret name yields the concrete predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificatePredicateFamily {
    /// The secret the signed certificate is stored in.
    #[default]
    SecretName,
    /// The secret holding the private key for the next issuance.
    NextPrivateKeySecretName,
}

impl CertificatePredicateFamily {
    pub fn bind(self, secret_name: &str) -> BoxPredicate<Certificate> {
        match self {
            CertificatePredicateFamily::SecretName => {
                Box::new(WithSecretName(secret_name.to_string()))
            }
            CertificatePredicateFamily::NextPrivateKeySecretName => {
                Box::new(WithNextPrivateKeySecretName(secret_name.to_string()))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CertificateRequest predicates
// ─────────────────────────────────────────────────────────────────────────────

/// Matches requests annotated with the given certificate revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithRevision(pub u32);

impl Predicate<CertificateRequest> for WithRevision {
    fn matches(&self, req: &CertificateRequest) -> bool {
        req.revision() == Some(self.0.to_string().as_str())
    }
}

/// Matches requests whose controlling owner reference points at the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlledBy {
    owner_uid: String,
}

impl ControlledBy {
    pub fn new(owner: &ObjectMeta) -> Self {
        Self {
            owner_uid: owner.uid.clone(),
        }
    }

    pub fn uid(owner_uid: impl Into<String>) -> Self {
        Self {
            owner_uid: owner_uid.into(),
        }
    }
}

impl Predicate<CertificateRequest> for ControlledBy {
    fn matches(&self, req: &CertificateRequest) -> bool {
        req.meta.is_controlled_by(&self.owner_uid)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use certwatch_core::{
        CertificateRequestSpec, CertificateSpec, OwnerReference, REVISION_ANNOTATION_KEY,
    };

    fn cert(secret: &str, next: Option<&str>) -> Certificate {
        let mut crt = Certificate::new(
            ObjectMeta::new("default", "web"),
            CertificateSpec {
                secret_name: secret.into(),
                ..Default::default()
            },
        );
        crt.status.next_private_key_secret_name = next.map(String::from);
        crt
    }

    fn request(meta: ObjectMeta) -> CertificateRequest {
        CertificateRequest::new(meta, CertificateRequestSpec::default())
    }

    #[test]
    fn test_secret_name() {
        let p = WithSecretName("web-tls".into());
        assert!(p.matches(&cert("web-tls", None)));
        assert!(!p.matches(&cert("other", Some("web-tls"))));
    }

    #[test]
    fn test_next_secret_name_absent_is_no_match() {
        let p = WithNextPrivateKeySecretName("web-tls".into());
        assert!(!p.matches(&cert("web-tls", None)));
        assert!(!p.matches(&cert("web-tls", Some("other"))));
        assert!(p.matches(&cert("other", Some("web-tls"))));
    }

    #[test]
    fn test_family_bind() {
        let crt = cert("web-tls", Some("web-tls-next"));
        assert!(CertificatePredicateFamily::SecretName.bind("web-tls").matches(&crt));
        assert!(!CertificatePredicateFamily::SecretName.bind("web-tls-next").matches(&crt));
        assert!(CertificatePredicateFamily::NextPrivateKeySecretName
            .bind("web-tls-next")
            .matches(&crt));
    }

    #[test]
    fn test_revision() {
        let annotated = request(
            ObjectMeta::new("default", "web-1").with_annotation(REVISION_ANNOTATION_KEY, "3"),
        );
        assert!(WithRevision(3).matches(&annotated));
        assert!(!WithRevision(4).matches(&annotated));

        let bare = request(ObjectMeta::new("default", "web-1"));
        assert!(!WithRevision(3).matches(&bare));
    }

    #[test]
    fn test_controlled_by() {
        let owner = ObjectMeta::new("default", "web").with_uid("uid-web");
        let controlled = request(
            ObjectMeta::new("default", "web-1")
                .with_owner(owner.controller_reference_to("cert-manager.io/v1alpha2", "Certificate")),
        );
        let referenced = request(ObjectMeta::new("default", "web-2").with_owner(OwnerReference {
            uid: "uid-web".into(),
            controller: None,
            ..Default::default()
        }));

        let p = ControlledBy::new(&owner);
        assert!(p.matches(&controlled));
        assert!(!p.matches(&referenced));
        assert!(!ControlledBy::uid("uid-other").matches(&controlled));
    }

    fn counting(calls: &Cell<u32>, result: bool) -> FnPredicate<impl Fn(&u32) -> bool + '_> {
        predicate_fn(move |_: &u32| {
            calls.set(calls.get() + 1);
            result
        })
    }

    #[test]
    fn test_conjunction_short_circuits() {
        let calls = Cell::new(0);
        let conj = Conjunction::new(counting(&calls, true))
            .and(counting(&calls, false))
            .and(counting(&calls, true));

        assert!(!conj.matches(&0));
        assert_eq!(calls.get(), 2);
        assert_eq!(conj.predicates().len(), 3);
    }

    #[test]
    fn test_mixed_request_predicates() {
        let owner = ObjectMeta::new("default", "web").with_uid("uid-web");
        let req = request(
            ObjectMeta::new("default", "web-1")
                .with_annotation(REVISION_ANNOTATION_KEY, "2")
                .with_owner(owner.controller_reference_to("cert-manager.io/v1alpha2", "Certificate")),
        );

        let both: Conjunction<BoxPredicate<CertificateRequest>> =
            Conjunction::new(Box::new(WithRevision(2)) as BoxPredicate<_>)
                .and(Box::new(ControlledBy::new(&owner)));
        assert!(both.matches(&req));

        let wrong_rev: Conjunction<BoxPredicate<CertificateRequest>> =
            Conjunction::new(Box::new(WithRevision(1)) as BoxPredicate<_>)
                .and(Box::new(ControlledBy::new(&owner)));
        assert!(!wrong_rev.matches(&req));
    }

    #[test]
    fn test_matches_all_empty_and_everything() {
        let none: [Everything; 0] = [];
        assert!(matches_all(&none, &1u8));
        assert!(Everything.matches(&cert("a", None)));
    }
}
