//! Hyphen-separated address range validation.
//!
//! A range `first-last` is valid when both sides are single addresses of the
//! expected protocol and `first <= last`. With a non-zero prefix length the
//! last address must also lie inside the network of `first` at that prefix.
//! `first` itself does not have to be the network address.

use std::cmp::Ordering;

use crate::address::{Address, Protocol};
use crate::error::{CheckError, RangeBound};
use crate::lexical;

/// Validate an IPv4 range such as `192.0.2.1-192.0.2.100`.
pub fn validate_ipv4_range(input: &str, prefix_len: Option<u8>) -> Result<(), CheckError> {
    validate_range(input, Protocol::Ipv4, prefix_len)
}

/// Validate an IPv6 range such as `2001:db8::1-2001:db8::ff`.
pub fn validate_ipv6_range(input: &str, prefix_len: Option<u8>) -> Result<(), CheckError> {
    validate_range(input, Protocol::Ipv6, prefix_len)
}

pub fn is_ipv4_range(input: &str, prefix_len: Option<u8>) -> bool {
    validate_ipv4_range(input, prefix_len).is_ok()
}

pub fn is_ipv6_range(input: &str, prefix_len: Option<u8>) -> bool {
    validate_ipv6_range(input, prefix_len).is_ok()
}

fn validate_range(
    input: &str,
    protocol: Protocol,
    prefix_len: Option<u8>,
) -> Result<(), CheckError> {
    log::debug!("Validating {} range {:?} (prefix {:?})", protocol, input, prefix_len);

    let shaped = match protocol {
        Protocol::Ipv4 => lexical::is_ipv4_range_shape(input),
        _ => lexical::is_ipv6_range_shape(input),
    };
    let split = if shaped { input.split_once('-') } else { None };
    let Some((first_text, last_text)) = split else {
        return Err(CheckError::MalformedRange {
            input: input.to_string(),
            protocol,
        });
    };

    let first = parse_bound(input, first_text, RangeBound::First, protocol)?;
    let last = parse_bound(input, last_text, RangeBound::Last, protocol)?;

    if first.compare(&last) == Some(Ordering::Greater) {
        return Err(CheckError::MisorderedRange {
            input: input.to_string(),
            protocol,
        });
    }

    match prefix_len {
        Some(prefix_len) if prefix_len > 0 => check_containment(input, &first, &last, prefix_len),
        _ => Ok(()),
    }
}

/// Lexical check first, then the duplicate `::` check for IPv6, then the
/// semantic parse.
fn parse_bound(
    input: &str,
    text: &str,
    bound: RangeBound,
    protocol: Protocol,
) -> Result<Address, CheckError> {
    let well_formed = match protocol {
        Protocol::Ipv4 => lexical::is_ipv4_single(text),
        _ => lexical::is_ipv6_single(text) && !lexical::duplicate_double_colons(text),
    };

    let address = if well_formed {
        Address::parse(text)
    } else {
        Address::INVALID
    };

    if address.protocol() != protocol {
        log::debug!("Range {:?}: {:?} bound {:?} rejected", input, bound, text);
        return Err(CheckError::InvalidRangeBound {
            input: input.to_string(),
            bound,
            bound_text: text.to_string(),
            protocol,
        });
    }
    Ok(address)
}

fn check_containment(
    input: &str,
    first: &Address,
    last: &Address,
    prefix_len: u8,
) -> Result<(), CheckError> {
    let protocol = first.protocol();
    if prefix_len > protocol.bit_width() {
        return Err(CheckError::PrefixOutOfRange {
            prefix_len,
            max: protocol.bit_width(),
            protocol,
        });
    }

    let network = first.with_prefix_len(prefix_len).network();
    if network.contains(last) {
        Ok(())
    } else {
        Err(CheckError::RangeExceedsPrefix {
            input: input.to_string(),
            prefix_len,
        })
    }
}
