//! Typed address model and prefix arithmetic.
//!
//! An [`Address`] is always a total classification: parsing never fails with
//! an error, it yields an address whose protocol is [`Protocol::Invalid`]
//! instead. Callers are expected to run the matching check from
//! [`crate::lexical`] first so that malformed literals are reported as such
//! rather than as invalid addresses.

pub mod blocks;
pub mod predicates;

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::lexical;

/// Address family of a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Ipv4,
    Ipv6,
    Invalid,
}

impl Protocol {
    /// Number of bits in an address of this protocol (0 for `Invalid`).
    pub fn bit_width(self) -> u8 {
        match self {
            Protocol::Ipv4 => 32,
            Protocol::Ipv6 => 128,
            Protocol::Invalid => 0,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Ipv4 => write!(f, "IPv4"),
            Protocol::Ipv6 => write!(f, "IPv6"),
            Protocol::Invalid => write!(f, "invalid"),
        }
    }
}

/// A parsed IPv4 or IPv6 address with an optional prefix length.
///
/// IPv4 values occupy the low 32 bits of `value`. An absent prefix length
/// means a host address, which behaves as a full-width mask (/32 or /128)
/// in all arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    protocol: Protocol,
    value: u128,
    prefix_len: Option<u8>,
}

impl Address {
    /// The result of any failed parse.
    pub const INVALID: Address = Address {
        protocol: Protocol::Invalid,
        value: 0,
        prefix_len: None,
    };

    /// Parse an address with an optional `/prefix` suffix.
    ///
    /// Octets above 255, groups above `0xffff`, more than one `::` and prefix
    /// lengths wider than the protocol all produce [`Address::INVALID`].
    pub fn parse(s: &str) -> Address {
        let (addr_part, prefix_part) = match s.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (s, None),
        };

        let address = if let Ok(v4) = addr_part.parse::<Ipv4Addr>() {
            Address::from_ipv4(v4)
        } else if lexical::duplicate_double_colons(addr_part) {
            Address::INVALID
        } else if let Ok(v6) = addr_part.parse::<Ipv6Addr>() {
            Address::from_ipv6(v6)
        } else {
            Address::INVALID
        };

        let address = match prefix_part {
            None => address,
            Some(prefix) => match parse_prefix_len(prefix) {
                Some(prefix_len) => address.with_prefix_len(prefix_len),
                None => Address::INVALID,
            },
        };

        log::trace!("Parsed {:?} as {:?}", s, address);
        address
    }

    /// A host address without a prefix length.
    pub fn from_ipv4(addr: Ipv4Addr) -> Address {
        Address {
            protocol: Protocol::Ipv4,
            value: u32::from(addr) as u128,
            prefix_len: None,
        }
    }

    /// A host address without a prefix length.
    pub fn from_ipv6(addr: Ipv6Addr) -> Address {
        Address {
            protocol: Protocol::Ipv6,
            value: u128::from(addr),
            prefix_len: None,
        }
    }

    /// Same value with the given prefix length, or `INVALID` when it does
    /// not fit the protocol.
    pub fn with_prefix_len(self, prefix_len: u8) -> Address {
        if !self.is_valid() || prefix_len > self.bit_width() {
            return Address::INVALID;
        }
        Address {
            prefix_len: Some(prefix_len),
            ..self
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn is_valid(&self) -> bool {
        self.protocol != Protocol::Invalid
    }

    pub fn bit_width(&self) -> u8 {
        self.protocol.bit_width()
    }

    /// Numeric value; IPv4 addresses use the low 32 bits.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The prefix length as written, if any.
    pub fn explicit_prefix_len(&self) -> Option<u8> {
        self.prefix_len
    }

    /// The prefix length used for arithmetic: the explicit one, or the full
    /// width for host addresses written without a mask.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len.unwrap_or_else(|| self.bit_width())
    }

    /// Network mask with the top `prefix_len` bits set.
    pub fn mask(&self) -> u128 {
        prefix_mask(self.prefix_len(), self.bit_width())
    }

    /// The address with all bits past the prefix length cleared.
    pub fn network(&self) -> Address {
        Address {
            value: self.value & self.mask(),
            ..*self
        }
    }

    /// The address with all bits past the prefix length set.
    ///
    /// Only meaningful for IPv4 with a prefix shorter than 31 bits; see
    /// [`predicates::is_ipv4_broadcast`].
    pub fn broadcast(&self) -> Address {
        Address {
            value: self.value | (!self.mask() & width_mask(self.bit_width())),
            ..*self
        }
    }

    /// Same protocol, same value and same effective prefix length.
    pub fn same_as(&self, other: &Address) -> bool {
        self.is_valid()
            && self.protocol == other.protocol
            && self.value == other.value
            && self.prefix_len() == other.prefix_len()
    }

    /// Does `other` fall inside this block?
    ///
    /// `other` must be at least as specific as the block, so a /7 is never
    /// contained in a /8 even when their leading bits agree.
    pub fn contains(&self, other: &Address) -> bool {
        if !self.is_valid() || self.protocol != other.protocol {
            return false;
        }
        if other.prefix_len() < self.prefix_len() {
            return false;
        }
        let mask = self.mask();
        other.value & mask == self.value & mask
    }

    /// Big-endian bytes of the value: 4 for IPv4, 16 for IPv6, none if invalid.
    pub fn octets(&self) -> Vec<u8> {
        match self.protocol {
            Protocol::Ipv4 => (self.value as u32).to_be_bytes().to_vec(),
            Protocol::Ipv6 => self.value.to_be_bytes().to_vec(),
            Protocol::Invalid => Vec::new(),
        }
    }

    /// Order two addresses of the same protocol, most significant byte first.
    ///
    /// Returns `None` when the protocols differ or either side is invalid.
    /// Prefix lengths are ignored.
    pub fn compare(&self, other: &Address) -> Option<Ordering> {
        if !self.is_valid() || self.protocol != other.protocol {
            return None;
        }
        Some(self.octets().cmp(&other.octets()))
    }

    pub fn to_ip_addr(&self) -> Option<IpAddr> {
        match self.protocol {
            Protocol::Ipv4 => Some(IpAddr::V4(Ipv4Addr::from(self.value as u32))),
            Protocol::Ipv6 => Some(IpAddr::V6(Ipv6Addr::from(self.value))),
            Protocol::Invalid => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.to_ip_addr(), self.prefix_len) {
            (Some(ip), Some(prefix_len)) => write!(f, "{}/{}", ip, prefix_len),
            (Some(ip), None) => write!(f, "{}", ip),
            (None, _) => write!(f, "invalid address"),
        }
    }
}

/// Prefix lengths are plain ASCII digits; `+24` or an empty suffix are rejected.
fn parse_prefix_len(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

fn width_mask(width: u8) -> u128 {
    match width {
        0 => 0,
        128 => u128::MAX,
        w => (1u128 << w) - 1,
    }
}

fn prefix_mask(prefix_len: u8, width: u8) -> u128 {
    if prefix_len == 0 || width == 0 {
        return 0;
    }
    (u128::MAX << (width - prefix_len)) & width_mask(width)
}
