use super::{UsagePattern, UsageRule};

/// The sixteen second-octet prefixes of 172.16.0.0/12.
const RFC1918_172: &[&str] = &[
    "172.16.", "172.17.", "172.18.", "172.19.", "172.20.", "172.21.", "172.22.", "172.23.",
    "172.24.", "172.25.", "172.26.", "172.27.", "172.28.", "172.29.", "172.30.", "172.31.",
];

/// Ordered IPv4 usage rules, evaluated on the dotted-decimal form.
pub const IPV4_RULES: &[UsageRule] = &[
    UsageRule {
        pattern: UsagePattern::Prefix("192.168."),
        label: "Private network (RFC 1918)",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("10."),
        label: "Private network (RFC 1918)",
    },
    UsageRule {
        pattern: UsagePattern::OneOf(RFC1918_172),
        label: "Private network (RFC 1918)",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("169.254."),
        label: "Link-local (APIPA)",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("224."),
        label: "Multicast",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("127."),
        label: "Loopback",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("100.64."),
        label: "Carrier-grade NAT (RFC 6598)",
    },
    UsageRule {
        pattern: UsagePattern::CatchAll,
        label: "Public address",
    },
];

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use crate::classify::ipv4_common_uses;

    fn label(addr: &str) -> String {
        let ip: Ipv4Addr = addr.parse().unwrap();
        ipv4_common_uses(&ip).remove(0)
    }

    #[test]
    fn test_rfc1918_192_168() {
        assert_eq!(label("192.168.0.1"), "Private network (RFC 1918)");
        assert_eq!(label("192.168.255.255"), "Private network (RFC 1918)");
    }

    #[test]
    fn test_rfc1918_10() {
        assert_eq!(label("10.0.0.1"), "Private network (RFC 1918)");
        assert_eq!(label("10.255.255.255"), "Private network (RFC 1918)");
    }

    #[test]
    fn test_rfc1918_172() {
        assert_eq!(label("172.16.0.1"), "Private network (RFC 1918)");
        assert_eq!(label("172.24.10.10"), "Private network (RFC 1918)");
        assert_eq!(label("172.31.255.255"), "Private network (RFC 1918)");

        // Neighbors of the /12 are public
        assert_eq!(label("172.15.0.1"), "Public address");
        assert_eq!(label("172.32.0.1"), "Public address");
    }

    #[test]
    fn test_link_local() {
        assert_eq!(label("169.254.1.1"), "Link-local (APIPA)");
        assert_eq!(label("169.253.1.1"), "Public address");
    }

    #[test]
    fn test_multicast() {
        assert_eq!(label("224.0.0.1"), "Multicast");
        assert_eq!(label("224.255.0.1"), "Multicast");
    }

    #[test]
    fn test_loopback() {
        assert_eq!(label("127.0.0.1"), "Loopback");
        assert_eq!(label("127.255.255.254"), "Loopback");
    }

    #[test]
    fn test_carrier_grade_nat() {
        assert_eq!(label("100.64.0.1"), "Carrier-grade NAT (RFC 6598)");
        assert_eq!(label("100.64.255.255"), "Carrier-grade NAT (RFC 6598)");
        assert_eq!(label("100.65.0.1"), "Public address");
    }

    #[test]
    fn test_public() {
        assert_eq!(label("8.8.8.8"), "Public address");
        assert_eq!(label("1.1.1.1"), "Public address");
        assert_eq!(label("192.169.0.1"), "Public address");
    }
}
