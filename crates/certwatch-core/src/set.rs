//! Unordered (set) equality over sequences.
//!
//! Two sequences are equal when they contain the same distinct values.
//! Order and duplicate counts are ignored; an empty sequence is the empty set.

use std::collections::BTreeSet;
use std::net::IpAddr;

use url::Url;

/// Compare two sequences as sets of distinct values.
pub fn equal_unsorted<T: Ord>(a: &[T], b: &[T]) -> bool {
    let a: BTreeSet<&T> = a.iter().collect();
    let b: BTreeSet<&T> = b.iter().collect();
    a == b
}

/// Canonical text of an address. IPv4-mapped IPv6 renders as plain IPv4.
pub fn canonical_ip(ip: &IpAddr) -> String {
    ip.to_canonical().to_string()
}

/// Re-render an IP address string in canonical form if it parses.
pub fn normalize_ip(s: &str) -> String {
    s.parse::<IpAddr>()
        .map(|ip| canonical_ip(&ip))
        .unwrap_or_else(|_| s.to_string())
}

/// Re-render a URI string the way a parsed [`Url`] displays if it parses.
pub fn normalize_uri(s: &str) -> String {
    Url::parse(s)
        .map(|u| u.as_str().to_string())
        .unwrap_or_else(|_| s.to_string())
}
