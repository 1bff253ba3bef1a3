//! Proptest generators for property-based testing.

use std::time::Duration;

use proptest::prelude::*;

use certwatch_core::{CertificateSpec, IssuerRef, KeyUsage, X509Subject};

/// A DNS-ish name.
pub fn dns_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.(com|org|local)".prop_map(String::from)
}

/// An IPv4 or IPv6 address in canonical form.
pub fn ip_address() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(|o| std::net::Ipv4Addr::from(o).to_string()),
        any::<[u16; 8]>().prop_map(|s| std::net::Ipv6Addr::from(s).to_string()),
    ]
}

/// A SPIFFE style URI.
pub fn uri_san() -> impl Strategy<Value = String> {
    "[a-z]{1,6}/[a-z]{1,6}".prop_map(|path| format!("spiffe://cluster.local/{path}"))
}

pub fn key_usage() -> impl Strategy<Value = KeyUsage> {
    proptest::sample::select(KeyUsage::ALL.to_vec())
}

/// A short list of short words, suitable for subject fields.
pub fn words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,6}", 0..=max)
}

pub fn subject() -> impl Strategy<Value = X509Subject> {
    (
        words(2),
        words(2),
        words(2),
        words(2),
        words(2),
        words(2),
        words(2),
        "[0-9]{0,4}",
    )
        .prop_map(|(o, c, ou, l, p, sa, pc, serial)| X509Subject {
            organizations: o,
            countries: c,
            organizational_units: ou,
            localities: l,
            provinces: p,
            street_addresses: sa,
            postal_codes: pc,
            serial_number: serial,
        })
}

/// An arbitrary Certificate spec with every compared field populated at random.
pub fn certificate_spec() -> impl Strategy<Value = CertificateSpec> {
    (
        "[a-z]{0,8}\\.com",
        prop::collection::vec(dns_name(), 0..4),
        prop::collection::vec(ip_address(), 0..3),
        prop::collection::vec(uri_san(), 0..3),
        proptest::option::of(subject()),
        any::<bool>(),
        prop::collection::vec(key_usage(), 0..4),
        proptest::option::of((1u64..=365).prop_map(|d| Duration::from_secs(d * 86_400))),
        prop_oneof![Just("Issuer"), Just("ClusterIssuer")],
    )
        .prop_map(
            |(cn, dns, ips, uris, subject, is_ca, usages, duration, kind)| CertificateSpec {
                common_name: cn,
                dns_names: dns,
                ip_addresses: ips,
                uri_sans: uris,
                subject,
                is_ca,
                usages,
                duration,
                secret_name: "generated-tls".into(),
                issuer_ref: IssuerRef::new("issuer", kind),
            },
        )
}

/// Reverse a list and repeat its first element, keeping the same set.
pub fn shuffle_and_duplicate<T: Clone>(v: &[T]) -> Vec<T> {
    let mut out: Vec<T> = v.iter().rev().cloned().collect();
    if let Some(first) = v.first() {
        out.push(first.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use certwatch_core::equal_unsorted;

    proptest! {
        #[test]
        fn test_shuffle_and_duplicate_keeps_set(v in words(5)) {
            prop_assert!(equal_unsorted(&v, &shuffle_and_duplicate(&v)));
        }

        #[test]
        fn test_generated_ips_parse(ip in ip_address()) {
            prop_assert!(ip.parse::<std::net::IpAddr>().is_ok());
        }
    }
}
