//! Lexical address format checks.
//!
//! These functions only look at the shape of a string. They never decide
//! whether an address is numerically valid: `999.999.999.999` is shaped like
//! a single IPv4 address even though no octet fits in a byte. Semantic
//! validation lives in [`crate::address`] and must only run after the
//! matching shape check here has passed.

use std::sync::LazyLock;

use regex::Regex;

static IPV4_SINGLE: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^(([1-9][0-9]{0,2}|0)\.){3}([1-9][0-9]{0,2}|0)$")
        .expect("Invalid IPv4 single regex")
);

static IPV4_CIDR: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^(([1-9][0-9]{0,2}|0)\.){3}([1-9][0-9]{0,2}|0)/([1-9][0-9]*|0)$")
        .expect("Invalid IPv4 CIDR regex")
);

static IPV6_SINGLE: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^[0-9a-fA-F:]+$").expect("Invalid IPv6 single regex")
);

static IPV6_CIDR: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^[0-9a-fA-F:]+/[0-9]{1,3}$").expect("Invalid IPv6 CIDR regex")
);

// Two non-overlapping occurrences; ":::" counts once.
static DOUBLE_COLONS: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"::.*::").expect("Invalid double colon regex")
);

static IPV4_RANGE: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^[0-9.]+-[0-9.]+$").expect("Invalid IPv4 range regex")
);

static IPV6_RANGE: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^[0-9a-fA-F:]+-[0-9a-fA-F:]+$").expect("Invalid IPv6 range regex")
);

/// Is it shaped like a single dotted decimal address (e.g., `192.0.2.1`)?
///
/// Octets may not carry leading zeros, but their value is not checked.
pub fn is_ipv4_single(s: &str) -> bool {
    IPV4_SINGLE.is_match(s)
}

/// Is it shaped like an IPv4 address with a prefix length (e.g., `192.0.2.0/24`)?
pub fn is_ipv4_cidr(s: &str) -> bool {
    IPV4_CIDR.is_match(s)
}

/// Is it shaped like a single IPv6 address (hex digits and colons only)?
pub fn is_ipv6_single(s: &str) -> bool {
    IPV6_SINGLE.is_match(s)
}

/// Is it shaped like an IPv6 address with a prefix length (e.g., `2001:db8::/32`)?
pub fn is_ipv6_cidr(s: &str) -> bool {
    IPV6_CIDR.is_match(s)
}

/// Is it shaped like a CIDR literal of either protocol?
pub fn is_any_cidr(s: &str) -> bool {
    is_ipv4_cidr(s) || is_ipv6_cidr(s)
}

/// Is it shaped like a single address of either protocol?
pub fn is_any_single(s: &str) -> bool {
    is_ipv4_single(s) || is_ipv6_single(s)
}

/// Does it contain more than one `::` zero-compression shortcut?
pub fn duplicate_double_colons(s: &str) -> bool {
    DOUBLE_COLONS.is_match(s)
}

/// Is it a hyphen-separated pair made of IPv4 address characters?
pub fn is_ipv4_range_shape(s: &str) -> bool {
    IPV4_RANGE.is_match(s)
}

/// Is it a hyphen-separated pair made of IPv6 address characters?
pub fn is_ipv6_range_shape(s: &str) -> bool {
    IPV6_RANGE.is_match(s)
}
