#[cfg(test)]
mod ipaddrcheck_regression_tests {
    use ipaddrcheck::{check_all, lexical, predicates, range, Address, Check, CheckOptions};

    fn passes(input: &str, check: Check) -> bool {
        check_all(input, &[check], &CheckOptions::default())
    }

    /// Inputs every listed check must accept, and inputs it must reject
    fn assert_table(check: Check, valid: &[&str], invalid: &[&str]) {
        for input in valid {
            assert!(passes(input, check), "{check:?} should accept {input}");
        }
        for input in invalid {
            assert!(!passes(input, check), "{check:?} should reject {input}");
        }
    }

    #[test]
    fn test_is_valid() {
        assert_table(
            Check::IsValid,
            &["192.0.2.1", "192.0.2.0/24", "2001:db8::1", "2001:db8::/32", "::", "::/0"],
            &["192.0.2.666", "192.0.2.1/33", "2001:db8::/129", "2001::db8::1", "foo", ""],
        );
    }

    #[test]
    fn test_is_ipv4_family() {
        assert_table(
            Check::IsIpv4,
            &["192.0.2.1", "192.0.2.0/24", "0.0.0.0", "255.255.255.255/32"],
            &["2001:db8::1", "192.0.2.666", "192.0.2", "192.0.2.1/33"],
        );
        assert_table(
            Check::IsIpv4Cidr,
            &["192.0.2.0/24", "192.0.2.1/32", "0.0.0.0/0"],
            &["192.0.2.1", "192.0.2.0/33", "192.0.2.0/024", "2001:db8::/32"],
        );
        assert_table(
            Check::IsIpv4Single,
            &["192.0.2.1", "0.0.0.0"],
            &["192.0.2.1/32", "192.0.2.01", "2001:db8::1"],
        );
    }

    #[test]
    fn test_is_ipv4_host_and_net() {
        assert_table(
            Check::IsIpv4Host,
            &["192.0.2.1/24", "192.0.2.0/31", "192.0.2.1/31", "192.0.2.0/32", "192.0.2.1"],
            &["192.0.2.0/24", "10.0.0.0/8", "2001:db8::1/64"],
        );
        assert_table(
            Check::IsIpv4Net,
            &["192.0.2.0/24", "10.0.0.0/8", "0.0.0.0/0", "192.0.2.1/32"],
            &["192.0.2.1/24", "10.0.0.1/8", "2001:db8::/32"],
        );
    }

    #[test]
    fn test_is_ipv4_special_addresses() {
        assert_table(
            Check::IsIpv4Broadcast,
            &["192.0.2.255/24", "192.0.2.3/30", "10.255.255.255/8"],
            &["192.0.2.254/24", "192.0.2.1/31", "192.0.2.255/32", "192.0.2.255"],
        );
        assert_table(
            Check::IsIpv4Multicast,
            &["224.0.0.1", "239.255.255.255", "224.0.0.0/4"],
            &["223.255.255.255", "240.0.0.1", "ff02::1"],
        );
        assert_table(
            Check::IsIpv4Loopback,
            &["127.0.0.1", "127.0.0.0/8", "127.255.255.254/8"],
            &["126.0.0.1", "::1"],
        );
        assert_table(
            Check::IsIpv4LinkLocal,
            &["169.254.0.1", "169.254.255.255/16"],
            &["169.253.0.1", "fe80::1"],
        );
        assert_table(
            Check::IsIpv4Rfc1918,
            &["10.0.0.1", "172.16.0.1", "172.31.255.255", "192.168.0.1/24"],
            &["11.0.0.1", "172.32.0.1", "192.0.2.1", "fd00::1"],
        );
    }

    #[test]
    fn test_is_ipv6_family() {
        assert_table(
            Check::IsIpv6,
            &["2001:db8::1", "2001:db8::/32", "::", "::1", "FE80::1"],
            &["192.0.2.1", "2001::db8::1", "2001:db8::g", "2001:db8::10000"],
        );
        assert_table(
            Check::IsIpv6Cidr,
            &["2001:db8::/32", "::/0", "::1/128"],
            &["2001:db8::1", "2001:db8::/129", "192.0.2.0/24"],
        );
        assert_table(
            Check::IsIpv6Single,
            &["2001:db8::1", "::"],
            &["2001:db8::/32", "192.0.2.1"],
        );
    }

    #[test]
    fn test_is_ipv6_host_and_net() {
        assert_table(
            Check::IsIpv6Host,
            &["2001:db8::1/64", "2001:db8::/127", "2001:db8::1/127", "2001:db8::/128", "2001:db8::"],
            &["2001:db8::/64", "2001:db8::/32", "192.0.2.1/24"],
        );
        assert_table(
            Check::IsIpv6Net,
            &["2001:db8::/32", "2001:db8:1::/48", "::/0"],
            &["2001:db8::1/64", "192.0.2.0/24"],
        );
    }

    #[test]
    fn test_is_ipv6_special_addresses() {
        assert_table(
            Check::IsIpv6Multicast,
            &["ff02::1", "ff00::/8", "ffff::1"],
            &["fe80::1", "224.0.0.1"],
        );
        assert_table(
            Check::IsIpv6LinkLocal,
            &["fe80::1", "fe80::1/64", "fe80::ffff:ffff:ffff:ffff"],
            &["fe80:0:0:1::1", "2001:db8::1", "169.254.0.1"],
        );
    }

    #[test]
    fn test_is_any_checks() {
        assert_table(
            Check::IsAnyCidr,
            &["192.0.2.0/24", "2001:db8::/32"],
            &["192.0.2.1", "2001:db8::1", "192.0.2.0/33"],
        );
        assert_table(
            Check::IsAnySingle,
            &["192.0.2.1", "2001:db8::1"],
            &["192.0.2.0/24", "2001:db8::/32", "192.0.2.666"],
        );
        assert_table(
            Check::IsAnyHost,
            &["192.0.2.1/24", "2001:db8::1/64"],
            &["192.0.2.0/24", "2001:db8::/32"],
        );
        assert_table(
            Check::IsAnyNet,
            &["192.0.2.0/24", "2001:db8::/32"],
            &["192.0.2.1/24", "2001:db8::1/64"],
        );
    }

    #[test]
    fn test_is_valid_intf_address() {
        assert_table(
            Check::IsValidIntfAddress,
            &["192.0.2.1/24", "192.0.2.0/31", "10.0.0.1/8", "2001:db8::1/64", "fe80::1/64"],
            &[
                "192.0.2.1",
                "2001:db8::1",
                "192.0.2.0/24",
                "192.0.2.255/24",
                "224.0.0.1/24",
                "ff02::1/64",
                "127.0.0.1/8",
                "::1/128",
                "0.0.0.0/32",
                "0.0.0.1/8",
                "255.255.255.255/32",
                "192.0.2.666/24",
            ],
        );

        let options = CheckOptions {
            allow_loopback: true,
            ..CheckOptions::default()
        };
        assert!(check_all("127.0.0.1/8", &[Check::IsValidIntfAddress], &options));
        assert!(!check_all("::1/128", &[Check::IsValidIntfAddress], &options));
    }

    #[test]
    fn test_ranges() {
        assert!(range::is_ipv4_range("192.0.2.0-192.0.2.100", None));
        assert!(range::is_ipv4_range("192.0.2.0-192.0.2.100", Some(24)));
        assert!(!range::is_ipv4_range("192.0.2.0-192.0.2.100", Some(29)));
        assert!(!range::is_ipv4_range("192.0.2.200-192.0.2.100", None));
        assert!(!range::is_ipv4_range("192.0.2.200-192.0.2.100", Some(24)));
        assert!(!range::is_ipv4_range("192.0.2.1", None));
        assert!(!range::is_ipv4_range("192.0.2.1-192.0.2.666", None));

        assert!(range::is_ipv6_range("2001:db8::1-2001:db8::ff", None));
        assert!(range::is_ipv6_range("2001:db8::1-2001:db8::ff", Some(64)));
        assert!(!range::is_ipv6_range("2001:db8::ff-2001:db8::1", None));
        assert!(!range::is_ipv6_range("2001::db8::1:1-2001::db8::1::10", None));
    }

    #[test]
    fn test_lexical_and_semantic_layers_disagree_on_out_of_range_octets() {
        assert!(lexical::is_ipv4_single("192.0.2.666"));
        assert!(!predicates::is_valid(&Address::parse("192.0.2.666")));
    }

    #[test]
    fn test_multiple_checks_combine_with_and() {
        let options = CheckOptions::default();
        let checks = [Check::IsIpv4Cidr, Check::IsIpv4Host, Check::IsIpv4Rfc1918];
        assert!(check_all("192.168.1.1/24", &checks, &options));
        assert!(!check_all("192.0.2.1/24", &checks, &options));
        assert!(!check_all("192.168.1.0/24", &checks, &options));
    }
}
