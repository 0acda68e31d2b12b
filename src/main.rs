use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use color_eyre::Result;
use env_logger::Env;
use log::debug;

use ipaddrcheck::{run_checks, Check, CheckOptions};

/// Check IPv4/IPv6 addresses, prefixes and ranges.
///
/// Exits with status 0 when every selected check passes and 1 otherwise.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address, CIDR prefix or hyphen-separated range to check
    #[arg(allow_hyphen_values = true)]
    address: String,

    /// Valid IPv4 or IPv6 address, with or without prefix length
    #[arg(long)]
    is_valid: bool,

    /// IPv4 address, with or without prefix length
    #[arg(long)]
    is_ipv4: bool,

    /// IPv4 address with prefix length
    #[arg(long)]
    is_ipv4_cidr: bool,

    /// IPv4 address without prefix length
    #[arg(long)]
    is_ipv4_single: bool,

    /// IPv4 host address (not a network address; /31 and /32 always pass)
    #[arg(long)]
    is_ipv4_host: bool,

    /// IPv4 network address
    #[arg(long)]
    is_ipv4_net: bool,

    /// IPv4 broadcast address
    #[arg(long)]
    is_ipv4_broadcast: bool,

    /// IPv4 multicast address
    #[arg(long)]
    is_ipv4_multicast: bool,

    /// IPv4 loopback address
    #[arg(long)]
    is_ipv4_loopback: bool,

    /// IPv4 link-local address
    #[arg(long)]
    is_ipv4_link_local: bool,

    /// Private (RFC1918) IPv4 address
    #[arg(long)]
    is_ipv4_rfc1918: bool,

    /// IPv6 address, with or without prefix length
    #[arg(long)]
    is_ipv6: bool,

    /// IPv6 address with prefix length
    #[arg(long)]
    is_ipv6_cidr: bool,

    /// IPv6 address without prefix length
    #[arg(long)]
    is_ipv6_single: bool,

    /// IPv6 host address (not the subnet-router anycast address)
    #[arg(long)]
    is_ipv6_host: bool,

    /// IPv6 network address
    #[arg(long)]
    is_ipv6_net: bool,

    /// IPv6 multicast address
    #[arg(long)]
    is_ipv6_multicast: bool,

    /// IPv6 link-local address
    #[arg(long)]
    is_ipv6_link_local: bool,

    /// IPv4 or IPv6 address with prefix length
    #[arg(long)]
    is_any_cidr: bool,

    /// IPv4 or IPv6 address without prefix length
    #[arg(long)]
    is_any_single: bool,

    /// IPv4 or IPv6 host address
    #[arg(long)]
    is_any_host: bool,

    /// IPv4 or IPv6 network address
    #[arg(long)]
    is_any_net: bool,

    /// Host address with prefix length that can be assigned to an interface
    #[arg(long)]
    is_valid_intf_address: bool,

    /// Let IPv4 loopback addresses pass --is-valid-intf-address
    #[arg(long)]
    allow_loopback: bool,

    /// Hyphen-separated IPv4 range with the first address not above the last
    #[arg(long)]
    is_ipv4_range: bool,

    /// Hyphen-separated IPv6 range with the first address not above the last
    #[arg(long)]
    is_ipv6_range: bool,

    /// Require range ends to be in the same network of this prefix length
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=128))]
    range_prefix_length: Option<u8>,

    /// Explain why a check failed
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Selected checks, in a fixed order independent of flag order.
    fn checks(&self) -> Vec<Check> {
        let flags = [
            (self.is_valid, Check::IsValid),
            (self.is_ipv4, Check::IsIpv4),
            (self.is_ipv4_cidr, Check::IsIpv4Cidr),
            (self.is_ipv4_single, Check::IsIpv4Single),
            (self.is_ipv4_host, Check::IsIpv4Host),
            (self.is_ipv4_net, Check::IsIpv4Net),
            (self.is_ipv4_broadcast, Check::IsIpv4Broadcast),
            (self.is_ipv4_multicast, Check::IsIpv4Multicast),
            (self.is_ipv4_loopback, Check::IsIpv4Loopback),
            (self.is_ipv4_link_local, Check::IsIpv4LinkLocal),
            (self.is_ipv4_rfc1918, Check::IsIpv4Rfc1918),
            (self.is_ipv6, Check::IsIpv6),
            (self.is_ipv6_cidr, Check::IsIpv6Cidr),
            (self.is_ipv6_single, Check::IsIpv6Single),
            (self.is_ipv6_host, Check::IsIpv6Host),
            (self.is_ipv6_net, Check::IsIpv6Net),
            (self.is_ipv6_multicast, Check::IsIpv6Multicast),
            (self.is_ipv6_link_local, Check::IsIpv6LinkLocal),
            (self.is_any_cidr, Check::IsAnyCidr),
            (self.is_any_single, Check::IsAnySingle),
            (self.is_any_host, Check::IsAnyHost),
            (self.is_any_net, Check::IsAnyNet),
            (self.is_valid_intf_address, Check::IsValidIntfAddress),
            (self.is_ipv4_range, Check::IsIpv4Range),
            (self.is_ipv6_range, Check::IsIpv6Range),
        ];
        flags
            .into_iter()
            .filter_map(|(selected, check)| selected.then_some(check))
            .collect()
    }

    fn options(&self) -> CheckOptions {
        CheckOptions {
            range_prefix_len: self.range_prefix_length,
            allow_loopback: self.allow_loopback,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Quiet by default; RUST_LOG=debug traces every check
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let checks = args.checks();
    if checks.is_empty() {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "at least one check option (e.g. --is-valid) is required",
            )
            .exit();
    }

    debug!("Checking {:?} against {:?}", args.address, checks);

    match run_checks(&args.address, &checks, &args.options()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            debug!("Check failed ({:?}): {}", error.class(), error);
            if args.verbose {
                eprintln!("{}", error);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
