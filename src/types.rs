use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// IP protocol version of a resolved address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl IpVersion {
    /// Conventional label for this version ("IPv4" or "IPv6")
    pub fn as_str(&self) -> &'static str {
        match self {
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detailed information about a single resolved address.
///
/// One record is produced per address returned by resolution. All fields
/// are derived from `address` except the name fields, which come from a
/// reverse lookup and are empty when that lookup fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetail {
    /// The resolved address
    pub address: IpAddr,
    /// Address is in a private range (RFC 1918 / RFC 4193)
    pub is_private: bool,
    /// Address identifies the local host (127.0.0.0/8 or ::1)
    pub is_loopback: bool,
    /// Address has a 4-byte form (native IPv4 or IPv4-mapped IPv6)
    pub is_ipv4: bool,
    /// Address has no 4-byte form
    pub is_ipv6: bool,
    /// Hostnames from reverse lookup
    pub hostnames: Vec<String>,
    /// Reverse (PTR) names. Populated from the same reverse lookup as
    /// `hostnames` and always equal to it; both fields are kept for
    /// compatibility with existing consumers of the record shape.
    pub reverse_names: Vec<String>,
    /// Well-known usage labels, first matching rule wins
    pub common_uses: Vec<String>,
    /// Version label, consistent with `is_ipv4`/`is_ipv6`
    pub version: IpVersion,
}
