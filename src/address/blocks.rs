//! Well-known address blocks used as containment and equality operands.

use std::sync::LazyLock;

use super::Address;

/// A named, immutable CIDR block.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownBlock {
    pub block: Address,
    pub description: &'static str,
}

impl WellKnownBlock {
    fn new(literal: &str, description: &'static str) -> Self {
        let block = Address::parse(literal);
        debug_assert!(block.is_valid(), "well-known block {literal} must parse");
        Self { block, description }
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.block.contains(address)
    }

    pub fn same_as(&self, address: &Address) -> bool {
        self.block.same_as(address)
    }
}

// IPv4 blocks

pub static IPV4_MULTICAST: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("224.0.0.0/4", "IPv4 multicast"));

pub static IPV4_LOOPBACK: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("127.0.0.0/8", "IPv4 loopback"));

pub static IPV4_LINK_LOCAL: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("169.254.0.0/16", "IPv4 link-local"));

pub static IPV4_RFC1918_A: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("10.0.0.0/8", "RFC1918 private-use (A)"));

pub static IPV4_RFC1918_B: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("172.16.0.0/12", "RFC1918 private-use (B)"));

pub static IPV4_RFC1918_C: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("192.168.0.0/16", "RFC1918 private-use (C)"));

pub static IPV4_THIS_NETWORK: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("0.0.0.0/8", "\"this\" network"));

pub static IPV4_UNSPECIFIED: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("0.0.0.0/32", "IPv4 unspecified address"));

pub static IPV4_LIMITED_BROADCAST: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("255.255.255.255/32", "IPv4 limited broadcast"));

// IPv6 blocks

pub static IPV6_MULTICAST: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("ff00::/8", "IPv6 multicast"));

pub static IPV6_LINK_LOCAL: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("fe80::/64", "IPv6 link-local"));

pub static IPV6_LOOPBACK: LazyLock<WellKnownBlock> =
    LazyLock::new(|| WellKnownBlock::new("::1/128", "IPv6 loopback"));

/// The three RFC1918 private-use blocks.
pub fn rfc1918_blocks() -> [&'static WellKnownBlock; 3] {
    [&IPV4_RFC1918_A, &IPV4_RFC1918_B, &IPV4_RFC1918_C]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Protocol;

    #[test]
    fn test_blocks_parse() {
        let all: [&WellKnownBlock; 12] = [
            &IPV4_MULTICAST,
            &IPV4_LOOPBACK,
            &IPV4_LINK_LOCAL,
            &IPV4_RFC1918_A,
            &IPV4_RFC1918_B,
            &IPV4_RFC1918_C,
            &IPV4_THIS_NETWORK,
            &IPV4_UNSPECIFIED,
            &IPV4_LIMITED_BROADCAST,
            &IPV6_MULTICAST,
            &IPV6_LINK_LOCAL,
            &IPV6_LOOPBACK,
        ];
        for block in all {
            assert!(block.block.is_valid(), "{} did not parse", block.description);
            // Every block is written as its own network address
            assert_eq!(block.block.network(), block.block, "{}", block.description);
        }
        assert_eq!(IPV6_LOOPBACK.block.protocol(), Protocol::Ipv6);
    }

    #[test]
    fn test_rfc1918_union_edges() {
        let inside = ["10.255.255.255", "172.16.0.1", "172.31.255.255", "192.168.0.0"];
        let outside = ["11.0.0.0", "172.15.255.255", "172.32.0.0", "192.169.0.0"];

        for s in inside {
            let addr = Address::parse(s);
            assert!(rfc1918_blocks().iter().any(|b| b.contains(&addr)), "{s}");
        }
        for s in outside {
            let addr = Address::parse(s);
            assert!(!rfc1918_blocks().iter().any(|b| b.contains(&addr)), "{s}");
        }
    }
}
