//! Diagnostics for failed checks.
//!
//! A failed check is an ordinary outcome, not a fault: every variant here
//! degrades to a boolean `false` and carries the one-line explanation that
//! verbose mode prints.

use crate::address::predicates::IntfViolation;
use crate::address::Protocol;

/// Which side of a range failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    First,
    Last,
}

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The text does not have the shape of the expected literal.
    MalformedLiteral,
    /// The literal is well-shaped but a component is out of range.
    OutOfRange,
    /// The first address of a range is greater than the last.
    Misordered,
    /// The last address of a range is outside the required prefix.
    ExceedsPrefix,
    /// A valid address that does not satisfy the selected check.
    Unsatisfied,
    /// The caller asked for nothing to check.
    Usage,
}

/// Why a check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("Malformed address {input}: not an IPv4 or IPv6 address literal")]
    MalformedLiteral { input: String },

    #[error("Invalid address {input}: a component is out of range")]
    OutOfRange { input: String },

    #[error("Malformed range {input}: must be a pair of hyphen-separated {protocol} addresses")]
    MalformedRange { input: String, protocol: Protocol },

    #[error("Malformed range {input}: {bound_text} is not a valid {protocol} address")]
    InvalidRangeBound {
        input: String,
        bound: RangeBound,
        bound_text: String,
        protocol: Protocol,
    },

    #[error("Malformed {protocol} range {input}: its first address is greater than the last")]
    MisorderedRange { input: String, protocol: Protocol },

    #[error("Invalid range prefix length {prefix_len}: must be between 0 and {max} for {protocol}")]
    PrefixOutOfRange {
        prefix_len: u8,
        max: u8,
        protocol: Protocol,
    },

    #[error("Range {input} does not fit in a single /{prefix_len} network")]
    RangeExceedsPrefix { input: String, prefix_len: u8 },

    #[error("{input} is not {description}")]
    Unsatisfied {
        input: String,
        description: &'static str,
    },

    #[error("{input} is not a valid interface address: {violation}")]
    NotInterfaceAddress {
        input: String,
        violation: IntfViolation,
    },

    #[error("No check selected")]
    NoChecks,
}

impl CheckError {
    pub fn class(&self) -> ErrorClass {
        match self {
            CheckError::MalformedLiteral { .. }
            | CheckError::MalformedRange { .. }
            | CheckError::InvalidRangeBound { .. } => ErrorClass::MalformedLiteral,
            CheckError::OutOfRange { .. } | CheckError::PrefixOutOfRange { .. } => {
                ErrorClass::OutOfRange
            }
            CheckError::MisorderedRange { .. } => ErrorClass::Misordered,
            CheckError::RangeExceedsPrefix { .. } => ErrorClass::ExceedsPrefix,
            CheckError::Unsatisfied { .. } | CheckError::NotInterfaceAddress { .. } => {
                ErrorClass::Unsatisfied
            }
            CheckError::NoChecks => ErrorClass::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages() {
        let err = CheckError::MalformedRange {
            input: "192.0.2.1".to_string(),
            protocol: Protocol::Ipv4,
        };
        assert_eq!(
            err.to_string(),
            "Malformed range 192.0.2.1: must be a pair of hyphen-separated IPv4 addresses"
        );

        let err = CheckError::MisorderedRange {
            input: "2001:db8::10-2001:db8::1".to_string(),
            protocol: Protocol::Ipv6,
        };
        assert_eq!(
            err.to_string(),
            "Malformed IPv6 range 2001:db8::10-2001:db8::1: its first address is greater than the last"
        );
        assert_eq!(err.class(), ErrorClass::Misordered);
    }

    #[test]
    fn test_interface_message_names_violation() {
        let err = CheckError::NotInterfaceAddress {
            input: "192.0.2.1".to_string(),
            violation: IntfViolation::MissingPrefixLength,
        };
        assert_eq!(
            err.to_string(),
            "192.0.2.1 is not a valid interface address: it has no prefix length"
        );
        assert_eq!(err.class(), ErrorClass::Unsatisfied);
    }
}
