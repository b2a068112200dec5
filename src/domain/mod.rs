// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host naming and primary domain inference
//!
//! Domains here are coarse: the last two labels of a host name. There is no
//! public suffix list, so `example.co.uk` collapses to `co.uk`.

mod inference;

pub use inference::{
    DomainInference, DomainInferencer, DomainScores, DomainSource, ScoreWeights, DEFAULT_SCAN_LIMIT,
};

use url::Url;

/// Naive eTLD+1: strip any port, then keep the last two dot-separated labels
pub fn coarse_domain(host: &str) -> String {
    if host.is_empty() {
        return String::new();
    }

    let host = match host.split_once(':') {
        Some((name, _)) => name,
        None => host,
    };

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1])
    } else {
        host.to_string()
    }
}

/// Authority of a URL exactly as written: host, plus `:port` when present,
/// case preserved. Empty when the URL has no `//` authority section.
pub fn netloc_of(url: &str) -> &str {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    };
    match rest.strip_prefix("//") {
        Some(authority) => authority.split(['/', '?', '#']).next().unwrap_or(""),
        None => "",
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalized host of a URL: lowercase, no port. Empty if the URL does not
/// parse or has no host.
pub fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_default()
}

/// Suffix match of a netloc against the primary domain.
///
/// This is a plain string suffix test: `evilexample.com` matches
/// `example.com`, while `api.example.com:8443` and `API.EXAMPLE.COM` do not.
pub fn host_matches(netloc: &str, primary_domain: &str) -> bool {
    netloc.ends_with(primary_domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coarse_domain() {
        assert_eq!(coarse_domain("api.example.com:8443"), "example.com");
        assert_eq!(coarse_domain("example.com"), "example.com");
        assert_eq!(coarse_domain("localhost"), "localhost");
        assert_eq!(coarse_domain("localhost:3000"), "localhost");
        assert_eq!(coarse_domain(""), "");
    }

    #[test]
    fn test_coarse_domain_is_naive() {
        assert_eq!(coarse_domain("shop.example.co.uk"), "co.uk");
        assert_eq!(coarse_domain("a.b.c.d"), "c.d");
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://Shop.Example.com:8443/cart?x=1"), "shop.example.com");
        assert_eq!(host_of("https://user:pw@example.com/"), "example.com");
        assert_eq!(host_of("not a url"), "");
        assert_eq!(host_of(""), "");
    }

    #[test]
    fn test_netloc_of() {
        assert_eq!(netloc_of("https://api.example.com/v1?x=1"), "api.example.com");
        assert_eq!(netloc_of("https://API.Example.com:8443/v1"), "API.Example.com:8443");
        assert_eq!(netloc_of("https://shop.example.com?q=1"), "shop.example.com");
        assert_eq!(netloc_of("https://example.com#top"), "example.com");
        assert_eq!(netloc_of("//cdn.example.net/a.js"), "cdn.example.net");
        assert_eq!(netloc_of("https://user:pw@example.com/"), "user:pw@example.com");
        assert_eq!(netloc_of("example.com/path"), "");
        assert_eq!(netloc_of("not a url"), "");
        assert_eq!(netloc_of(""), "");
    }

    #[test]
    fn test_netloc_keeps_port_for_coarse_domain() {
        assert_eq!(coarse_domain(netloc_of("https://api.example.com:8443/")), "example.com");
    }

    #[test]
    fn test_host_matches_is_plain_suffix() {
        assert!(host_matches("shop.example.com", "example.com"));
        assert!(host_matches("example.com", "example.com"));
        assert!(host_matches("evilexample.com", "example.com"));
        assert!(!host_matches("example.org", "example.com"));
        assert!(!host_matches("api.example.com:8443", "example.com"));
        assert!(!host_matches("API.EXAMPLE.COM", "example.com"));
    }
}
