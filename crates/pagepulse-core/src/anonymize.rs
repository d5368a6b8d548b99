//! Client-address anonymization.
//!
//! Addresses are truncated before they ever reach storage so that no stored
//! or logged value can be mapped back to a client. The transform is pure and
//! total: malformed input maps to a sentinel instead of failing ingestion.

/// Sentinel stored for addresses that cannot be anonymized.
pub const UNKNOWN_ADDR: &str = "unknown";

/// Suffix appended to truncated IPv6-form addresses. The discarded tail is
/// not recoverable from the stored value.
pub const IPV6_SUFFIX: &str = "::xxxx";

/// Truncate a raw client address to a non-reversible form.
///
/// - IPv6-form (colon-separated, at least 3 groups): keep the first 3 groups
///   and append [`IPV6_SUFFIX`], discarding the remainder. Exactly 3 groups
///   is treated the same as more than 3.
/// - IPv4-form (4 dot-separated parts): zero the last octet, `a.b.c.d` →
///   `a.b.c.0`.
/// - Anything else, including the empty string, maps to [`UNKNOWN_ADDR`].
pub fn anonymize(addr: &str) -> String {
    if addr.contains(':') {
        let groups: Vec<&str> = addr.split(':').collect();
        if groups.len() >= 3 {
            return format!("{}{}", groups[..3].join(":"), IPV6_SUFFIX);
        }
    } else {
        let octets: Vec<&str> = addr.split('.').collect();
        if octets.len() == 4 {
            return format!("{}.0", octets[..3].join("."));
        }
    }
    UNKNOWN_ADDR.to_string()
}
