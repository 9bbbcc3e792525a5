//! Cookie domain checks backed by the public suffix list.
//!
//! Prevents supercookies: a cookie may not be scoped to a public suffix
//! such as `com` or `co.uk` unless it stays host-only.

use crate::domain::is_ip_address;
use crate::list::SuffixList;
use crate::types::CookieDomainDecision;

/// Check if `host` domain-matches `domain` (RFC 6265 section 5.1.3).
///
/// Both arguments are expected lowercased.
pub fn domain_match(host: &str, domain: &str) -> bool {
    if host == domain {
        return true; // As in 'example.com' matching 'example.com'.
    }

    // As in 'example.com' matching 'www.example.com'.
    host.len() > domain.len()
        && host.ends_with(domain)
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
        && !is_ip_address(host)
}

impl SuffixList {
    /// Decide how a cookie store treats a cookie's Domain attribute.
    ///
    /// A cookie whose domain is a public suffix is kept only as a host-only
    /// cookie when the domain equals the request host (RFC 6265 section 5.3,
    /// steps 5 and 6).
    pub fn check_cookie_domain(
        &self,
        cookie_domain: &str,
        request_host: &str,
    ) -> CookieDomainDecision {
        let cookie_domain = cookie_domain.strip_prefix('.').unwrap_or(cookie_domain);
        let cookie_domain = cookie_domain.to_lowercase();
        let request_host = request_host.to_lowercase();

        if cookie_domain.is_empty() || !domain_match(&request_host, &cookie_domain) {
            return CookieDomainDecision::Reject;
        }

        if self.is_public_suffix(&cookie_domain) {
            if cookie_domain == request_host {
                return CookieDomainDecision::AcceptHostOnly;
            }
            log::debug!(
                "rejecting cookie for public suffix '{}' from '{}'",
                cookie_domain,
                request_host
            );
            return CookieDomainDecision::Reject;
        }

        CookieDomainDecision::Accept
    }
}
