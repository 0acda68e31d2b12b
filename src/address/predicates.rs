//! Semantic predicates over parsed addresses.
//!
//! Every predicate is pure and returns `false` for invalid addresses.

use std::fmt;

use super::blocks::{
    self, IPV4_LIMITED_BROADCAST, IPV4_LINK_LOCAL, IPV4_LOOPBACK, IPV4_MULTICAST,
    IPV4_THIS_NETWORK, IPV4_UNSPECIFIED, IPV6_LINK_LOCAL, IPV6_LOOPBACK, IPV6_MULTICAST,
};
use super::{Address, Protocol};
use crate::lexical;

/// Does it look like a valid address of any protocol?
pub fn is_valid(address: &Address) -> bool {
    address.is_valid()
}

/// A correct IPv4 host or network address, with or without a mask.
pub fn is_ipv4(address: &Address) -> bool {
    address.protocol() == Protocol::Ipv4
}

/// A correct IPv6 host or network address, with or without a mask.
pub fn is_ipv6(address: &Address) -> bool {
    address.protocol() == Protocol::Ipv6
}

/// Shared host rule: the address differs from its network address, or the
/// prefix is too narrow to have one (`width - 1` or wider).
fn is_host(address: &Address) -> bool {
    address.value() != address.network().value()
        || address.prefix_len() >= address.bit_width() - 1
}

/// An IPv4 host address, i.e. not a network address.
///
/// /31 (point-to-point) and /32 addresses are always host addresses.
pub fn is_ipv4_host(address: &Address) -> bool {
    is_ipv4(address) && is_host(address)
}

/// An IPv4 network address.
pub fn is_ipv4_net(address: &Address) -> bool {
    is_ipv4(address) && address.value() == address.network().value()
}

/// An IPv4 broadcast address.
///
/// Broadcast does not exist for point-to-point (/31) and isolated (/32)
/// addresses, so those are never broadcast.
pub fn is_ipv4_broadcast(address: &Address) -> bool {
    is_ipv4(address)
        && address.prefix_len() < 31
        && address.value() == address.broadcast().value()
}

pub fn is_ipv4_multicast(address: &Address) -> bool {
    is_ipv4(address) && IPV4_MULTICAST.contains(address)
}

pub fn is_ipv4_loopback(address: &Address) -> bool {
    is_ipv4(address) && IPV4_LOOPBACK.contains(address)
}

pub fn is_ipv4_link_local(address: &Address) -> bool {
    is_ipv4(address) && IPV4_LINK_LOCAL.contains(address)
}

/// A private-use IPv4 address from any of the three RFC1918 blocks.
pub fn is_ipv4_rfc1918(address: &Address) -> bool {
    is_ipv4(address) && blocks::rfc1918_blocks().iter().any(|b| b.contains(address))
}

/// An IPv6 host address.
///
/// The first address of a subnet is the Subnet-Router anycast address
/// (RFC 4291 section 2.6.1) and cannot be assigned to an interface, except
/// at /127 and /128. The last address is fine since IPv6 has no broadcast.
pub fn is_ipv6_host(address: &Address) -> bool {
    is_ipv6(address) && is_host(address)
}

pub fn is_ipv6_net(address: &Address) -> bool {
    is_ipv6(address) && address.value() == address.network().value()
}

pub fn is_ipv6_multicast(address: &Address) -> bool {
    is_ipv6(address) && IPV6_MULTICAST.contains(address)
}

pub fn is_ipv6_link_local(address: &Address) -> bool {
    is_ipv6(address) && IPV6_LINK_LOCAL.contains(address)
}

pub fn is_any_host(address: &Address) -> bool {
    is_ipv4_host(address) || is_ipv6_host(address)
}

pub fn is_any_net(address: &Address) -> bool {
    is_ipv4_net(address) || is_ipv6_net(address)
}

/// Reason an address cannot be assigned to a network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntfViolation {
    Ipv4Broadcast,
    Ipv4Multicast,
    Ipv6Multicast,
    Ipv4Loopback,
    Ipv6Loopback,
    Ipv4Unspecified,
    Ipv4ThisNetwork,
    Ipv4LimitedBroadcast,
    NotHost,
    MissingPrefixLength,
}

impl fmt::Display for IntfViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IntfViolation::Ipv4Broadcast => "it is an IPv4 broadcast address",
            IntfViolation::Ipv4Multicast => "it is an IPv4 multicast address",
            IntfViolation::Ipv6Multicast => "it is an IPv6 multicast address",
            IntfViolation::Ipv4Loopback => "it is an IPv4 loopback address",
            IntfViolation::Ipv6Loopback => "it is the IPv6 loopback address",
            IntfViolation::Ipv4Unspecified => "it is the IPv4 unspecified address",
            IntfViolation::Ipv4ThisNetwork => "it belongs to the \"this\" network 0.0.0.0/8",
            IntfViolation::Ipv4LimitedBroadcast => "it is the IPv4 limited broadcast address",
            IntfViolation::NotHost => "it is not a host address",
            IntfViolation::MissingPrefixLength => "it has no prefix length",
        };
        f.write_str(reason)
    }
}

/// First reason `address` cannot be assigned to an interface, or `None` if
/// it can.
///
/// `raw` is the original text; interface addresses must be written in CIDR
/// form. IPv4 loopback addresses pass only with `allow_loopback`; the IPv6
/// loopback `::1/128` never does.
pub fn intf_address_violation(
    address: &Address,
    raw: &str,
    allow_loopback: bool,
) -> Option<IntfViolation> {
    if is_ipv4_broadcast(address) {
        Some(IntfViolation::Ipv4Broadcast)
    } else if is_ipv4_multicast(address) {
        Some(IntfViolation::Ipv4Multicast)
    } else if is_ipv6_multicast(address) {
        Some(IntfViolation::Ipv6Multicast)
    } else if is_ipv4_loopback(address) && !allow_loopback {
        Some(IntfViolation::Ipv4Loopback)
    } else if IPV6_LOOPBACK.same_as(address) {
        Some(IntfViolation::Ipv6Loopback)
    } else if IPV4_UNSPECIFIED.same_as(address) {
        Some(IntfViolation::Ipv4Unspecified)
    } else if IPV4_THIS_NETWORK.contains(address) {
        Some(IntfViolation::Ipv4ThisNetwork)
    } else if IPV4_LIMITED_BROADCAST.same_as(address) {
        Some(IntfViolation::Ipv4LimitedBroadcast)
    } else if !is_any_host(address) {
        Some(IntfViolation::NotHost)
    } else if !lexical::is_any_cidr(raw) {
        Some(IntfViolation::MissingPrefixLength)
    } else {
        None
    }
}

/// Can it be assigned to a network interface?
///
/// That is, a host address in CIDR form that is not reserved for any
/// special use.
pub fn is_valid_intf_address(address: &Address, raw: &str, allow_loopback: bool) -> bool {
    intf_address_violation(address, raw, allow_loopback).is_none()
}
