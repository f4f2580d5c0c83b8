//! Per-address analysis.
//!
//! Derives structural flags, dispatches to the usage classification
//! table for the address family, and attaches reverse-name data.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::Ipv6Net;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::classify::{ipv4_common_uses, ipv6_common_uses};
use crate::resolver::{NameService, SystemNameService};
use crate::types::{AddressDetail, IpVersion};

/// RFC 4193 unique local block, the IPv6 counterpart of RFC 1918.
static UNIQUE_LOCAL: Lazy<Ipv6Net> =
    Lazy::new(|| "fc00::/7".parse().expect("UNIQUE_LOCAL: hardcoded network is invalid"));

/// Analyze a single address using the system name service for the
/// reverse lookup.
pub fn analyze(ip: IpAddr) -> AddressDetail {
    analyze_with(ip, &SystemNameService)
}

/// Analyze a single address.
///
/// Total function: a failing reverse lookup leaves the name fields
/// empty, everything else is derived from the address itself.
///
/// An address counts as IPv4 when it has a 4-byte form, native or
/// IPv4-mapped; flags, version, and table dispatch all follow that
/// form, so `::ffff:192.168.1.1` is handled as a private IPv4 address.
pub fn analyze_with(ip: IpAddr, ns: &dyn NameService) -> AddressDetail {
    let (is_private, is_loopback, version, common_uses) = match ip {
        IpAddr::V4(v4) => v4_facts(&v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => v4_facts(&v4),
            None => v6_facts(&v6),
        },
    };

    let names = match ns.lookup_addr(&ip) {
        Ok(names) => names,
        Err(e) => {
            debug!("reverse lookup of {} failed, leaving names empty: {}", ip, e);
            Vec::new()
        }
    };

    AddressDetail {
        address: ip,
        is_private,
        is_loopback,
        is_ipv4: version == IpVersion::V4,
        is_ipv6: version == IpVersion::V6,
        hostnames: names.clone(),
        reverse_names: names,
        common_uses,
        version,
    }
}

fn v4_facts(v4: &Ipv4Addr) -> (bool, bool, IpVersion, Vec<String>) {
    (
        v4.is_private(),
        v4.is_loopback(),
        IpVersion::V4,
        ipv4_common_uses(v4),
    )
}

fn v6_facts(v6: &Ipv6Addr) -> (bool, bool, IpVersion, Vec<String>) {
    (
        UNIQUE_LOCAL.contains(v6),
        v6.is_loopback(),
        IpVersion::V6,
        ipv6_common_uses(v6),
    )
}
