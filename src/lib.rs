//! # ipaddrcheck - IPv4/IPv6 address validation predicates
//!
//! This library classifies textual IPv4 and IPv6 addresses, CIDR prefixes
//! and address ranges. It backs the `ipaddrcheck` command, which reports
//! the result of a check through its exit status so that shell scripts and
//! configuration validators can use it directly.
//!
//! ## Overview
//!
//! Validation happens in two strictly separate layers:
//!
//! - **Lexical**: does the string *look like* an address literal? These
//!   checks are pure pattern matches and never look at numeric values.
//! - **Semantic**: is it a *valid* address, and what kind? Parsing produces
//!   a typed [`Address`] which the predicates then classify.
//!
//! Keeping them apart preserves the difference between "looks like an
//! address" and "is a valid address": `192.0.2.666` passes the first and
//! fails the second.
//!
//! ## Architecture
//!
//! - `lexical`: regex format checks for single, CIDR and range literals
//! - `address`: the [`Address`] model, mask arithmetic and well-known blocks
//! - `address::predicates`: host/network/broadcast/multicast/... predicates
//! - `range`: `first-last` range validation with optional prefix containment
//! - `check`: the [`Check`] selector used by the command-line front end
//! - `error`: [`CheckError`] diagnostics and their [`ErrorClass`]
//!
//! ## Example Usage
//!
//! ```rust
//! use ipaddrcheck::{lexical, predicates, range, Address};
//!
//! assert!(lexical::is_ipv4_cidr("192.0.2.1/24"));
//!
//! let address = Address::parse("192.0.2.1/24");
//! assert!(predicates::is_ipv4_host(&address));
//! assert!(predicates::is_valid_intf_address(&address, "192.0.2.1/24", false));
//!
//! assert!(range::is_ipv4_range("192.0.2.0-192.0.2.100", Some(24)));
//! assert!(!range::is_ipv4_range("192.0.2.0-192.0.2.100", Some(29)));
//! ```
//!
//! ## Error Handling
//!
//! Invalid input is never an error in the Rust sense of a fault. Parsing is
//! total and yields an invalid [`Address`]; checks return a [`CheckError`]
//! whose `Display` text is the diagnostic printed in verbose mode.

pub mod address;
pub mod check;
pub mod error;
pub mod lexical;
pub mod range;

pub use address::predicates;
pub use address::{Address, Protocol};
pub use check::{check_all, run_checks, Check, CheckOptions};
pub use error::{CheckError, ErrorClass, RangeBound};
