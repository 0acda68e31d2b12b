//! Check selection and evaluation.
//!
//! Maps each selectable check to the lexical and semantic predicates it is
//! made of. The command-line front end builds a list of [`Check`]s from its
//! flags and hands it to [`run_checks`] together with the address string.

use crate::address::predicates::{self, intf_address_violation};
use crate::address::Address;
use crate::error::CheckError;
use crate::lexical;
use crate::range;

/// One check that can be applied to an address or range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    IsValid,
    IsIpv4,
    IsIpv4Cidr,
    IsIpv4Single,
    IsIpv4Host,
    IsIpv4Net,
    IsIpv4Broadcast,
    IsIpv4Multicast,
    IsIpv4Loopback,
    IsIpv4LinkLocal,
    IsIpv4Rfc1918,
    IsIpv6,
    IsIpv6Cidr,
    IsIpv6Single,
    IsIpv6Host,
    IsIpv6Net,
    IsIpv6Multicast,
    IsIpv6LinkLocal,
    IsAnyCidr,
    IsAnySingle,
    IsAnyHost,
    IsAnyNet,
    IsValidIntfAddress,
    IsIpv4Range,
    IsIpv6Range,
}

impl Check {
    /// Range checks take the raw `first-last` string instead of an address.
    pub fn is_range_check(self) -> bool {
        matches!(self, Check::IsIpv4Range | Check::IsIpv6Range)
    }

    /// Noun phrase used in diagnostics: "<input> is not <description>".
    pub fn description(self) -> &'static str {
        match self {
            Check::IsValid => "a valid IPv4 or IPv6 address",
            Check::IsIpv4 => "an IPv4 address",
            Check::IsIpv4Cidr => "an IPv4 address with a prefix length",
            Check::IsIpv4Single => "a single IPv4 address",
            Check::IsIpv4Host => "an IPv4 host address",
            Check::IsIpv4Net => "an IPv4 network address",
            Check::IsIpv4Broadcast => "an IPv4 broadcast address",
            Check::IsIpv4Multicast => "an IPv4 multicast address",
            Check::IsIpv4Loopback => "an IPv4 loopback address",
            Check::IsIpv4LinkLocal => "an IPv4 link-local address",
            Check::IsIpv4Rfc1918 => "a private (RFC1918) IPv4 address",
            Check::IsIpv6 => "an IPv6 address",
            Check::IsIpv6Cidr => "an IPv6 address with a prefix length",
            Check::IsIpv6Single => "a single IPv6 address",
            Check::IsIpv6Host => "an IPv6 host address",
            Check::IsIpv6Net => "an IPv6 network address",
            Check::IsIpv6Multicast => "an IPv6 multicast address",
            Check::IsIpv6LinkLocal => "an IPv6 link-local address",
            Check::IsAnyCidr => "an IPv4 or IPv6 address with a prefix length",
            Check::IsAnySingle => "a single IPv4 or IPv6 address",
            Check::IsAnyHost => "an IPv4 or IPv6 host address",
            Check::IsAnyNet => "an IPv4 or IPv6 network address",
            Check::IsValidIntfAddress => "a valid interface address",
            Check::IsIpv4Range => "a valid IPv4 range",
            Check::IsIpv6Range => "a valid IPv6 range",
        }
    }
}

/// Options shared by all checks in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Required prefix for range checks; `None` or `Some(0)` skips the
    /// containment test.
    pub range_prefix_len: Option<u8>,
    /// Let IPv4 loopback addresses pass the interface address check.
    pub allow_loopback: bool,
}

/// Run every check against `input`, stopping at the first failure.
pub fn run_checks(
    input: &str,
    checks: &[Check],
    options: &CheckOptions,
) -> Result<(), CheckError> {
    if checks.is_empty() {
        return Err(CheckError::NoChecks);
    }

    // Parsed lazily so that range-only runs never go through the address gate
    let mut address: Option<Address> = None;

    for &check in checks {
        log::debug!("Evaluating {:?} on {:?}", check, input);

        if check.is_range_check() {
            evaluate_range(check, input, options)?;
            continue;
        }

        let parsed = match address {
            Some(parsed) => parsed,
            None => {
                let parsed = parse_gated(input)?;
                address = Some(parsed);
                parsed
            }
        };
        evaluate(check, input, &parsed, options)?;
    }

    Ok(())
}

/// Boolean form of [`run_checks`].
pub fn check_all(input: &str, checks: &[Check], options: &CheckOptions) -> bool {
    run_checks(input, checks, options).is_ok()
}

/// Reject anything that is not even shaped like an address before parsing.
fn parse_gated(input: &str) -> Result<Address, CheckError> {
    if !(lexical::is_any_single(input) || lexical::is_any_cidr(input)) {
        return Err(CheckError::MalformedLiteral {
            input: input.to_string(),
        });
    }
    Ok(Address::parse(input))
}

fn evaluate_range(check: Check, input: &str, options: &CheckOptions) -> Result<(), CheckError> {
    match check {
        Check::IsIpv4Range => range::validate_ipv4_range(input, options.range_prefix_len),
        _ => range::validate_ipv6_range(input, options.range_prefix_len),
    }
}

fn evaluate(
    check: Check,
    input: &str,
    address: &Address,
    options: &CheckOptions,
) -> Result<(), CheckError> {
    if check == Check::IsValidIntfAddress {
        return match intf_address_violation(address, input, options.allow_loopback) {
            None => Ok(()),
            Some(_) if !address.is_valid() => Err(CheckError::OutOfRange {
                input: input.to_string(),
            }),
            Some(violation) => Err(CheckError::NotInterfaceAddress {
                input: input.to_string(),
                violation,
            }),
        };
    }

    let ipv4_form = lexical::is_ipv4_single(input) || lexical::is_ipv4_cidr(input);
    let ipv6_form = lexical::is_ipv6_single(input) || lexical::is_ipv6_cidr(input);

    let passed = match check {
        Check::IsValid => predicates::is_valid(address),
        Check::IsIpv4 => ipv4_form && predicates::is_ipv4(address),
        Check::IsIpv4Cidr => lexical::is_ipv4_cidr(input) && predicates::is_ipv4(address),
        Check::IsIpv4Single => lexical::is_ipv4_single(input) && predicates::is_ipv4(address),
        Check::IsIpv4Host => predicates::is_ipv4_host(address),
        Check::IsIpv4Net => predicates::is_ipv4_net(address),
        Check::IsIpv4Broadcast => predicates::is_ipv4_broadcast(address),
        Check::IsIpv4Multicast => predicates::is_ipv4_multicast(address),
        Check::IsIpv4Loopback => predicates::is_ipv4_loopback(address),
        Check::IsIpv4LinkLocal => predicates::is_ipv4_link_local(address),
        Check::IsIpv4Rfc1918 => predicates::is_ipv4_rfc1918(address),
        Check::IsIpv6 => {
            ipv6_form && !lexical::duplicate_double_colons(input) && predicates::is_ipv6(address)
        }
        Check::IsIpv6Cidr => lexical::is_ipv6_cidr(input) && predicates::is_ipv6(address),
        Check::IsIpv6Single => lexical::is_ipv6_single(input) && predicates::is_ipv6(address),
        Check::IsIpv6Host => predicates::is_ipv6_host(address),
        Check::IsIpv6Net => predicates::is_ipv6_net(address),
        Check::IsIpv6Multicast => predicates::is_ipv6_multicast(address),
        Check::IsIpv6LinkLocal => predicates::is_ipv6_link_local(address),
        Check::IsAnyCidr => lexical::is_any_cidr(input) && predicates::is_valid(address),
        Check::IsAnySingle => lexical::is_any_single(input) && predicates::is_valid(address),
        Check::IsAnyHost => predicates::is_any_host(address),
        Check::IsAnyNet => predicates::is_any_net(address),
        Check::IsValidIntfAddress | Check::IsIpv4Range | Check::IsIpv6Range => {
            unreachable!("{check:?} is dispatched before predicate evaluation")
        }
    };

    if passed {
        Ok(())
    } else if !address.is_valid() {
        Err(CheckError::OutOfRange {
            input: input.to_string(),
        })
    } else {
        Err(CheckError::Unsatisfied {
            input: input.to_string(),
            description: check.description(),
        })
    }
}
