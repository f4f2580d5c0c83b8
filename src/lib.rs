//! ipinspect - IP address resolution and classification for Rust
//!
//! This library resolves a target (hostname or literal address text) and
//! annotates every resulting address with:
//! - Address family (IPv4/IPv6, IPv4-mapped forms count as IPv4)
//! - Structural flags (private, loopback)
//! - Well-known usage labels (RFC 1918, link-local, multicast, CGNAT,
//!   ULA, Teredo, documentation, 6to4, ...)
//! - Reverse (PTR) names
//!
//! Resolution is delegated to a name service. [`lookup`] uses the OS
//! resolver; [`lookup_with`] accepts any [`NameService`], which keeps
//! tests deterministic and lets callers plug in their own resolution.
//!
//! # Example
//!
//! ```rust
//! use ipinspect::{lookup_with, IpVersion, StaticNameService};
//!
//! let ns = StaticNameService::new()
//!     .with_host("dns.google", vec!["8.8.8.8".parse().unwrap()])
//!     .with_ptr("8.8.8.8".parse().unwrap(), vec!["dns.google".to_string()]);
//!
//! let results = lookup_with("dns.google", &ns).unwrap();
//! assert_eq!(results.len(), 1);
//!
//! let detail = &results[0];
//! assert_eq!(detail.address.to_string(), "8.8.8.8");
//! assert_eq!(detail.version, IpVersion::V4);
//! assert!(!detail.is_private);
//! assert_eq!(detail.common_uses, vec!["Public address"]);
//! assert_eq!(detail.hostnames, vec!["dns.google".to_string()]);
//! ```
//!
//! # Resolution fallback
//!
//! A target is first handed to the name service; if that fails, it is
//! parsed as literal address text (dotted-quad or colon-hex). When both
//! fail, the name-resolution error is surfaced since it is the more
//! informative one. There is no caching, no retry layer, and no timeout
//! beyond what the platform resolver imposes.
//!
//! # Classification
//!
//! Usage labels come from ordered per-family rule tables evaluated
//! first-match-wins against the canonical text form of the address; each
//! table ends in a catch-all, so every address gets exactly one label.
//! The tables are plain data ([`IPV4_RULES`], [`IPV6_RULES`]) and adding
//! a well-known block is a one-line table addition.

pub mod analyze;
pub mod classify;
pub mod error;
pub mod lookup;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use analyze::{analyze, analyze_with};
pub use classify::{
    ipv4_common_uses, ipv6_common_uses, UsagePattern, UsageRule, IPV4_RULES, IPV6_RULES,
};
pub use error::{LookupError, Result};
pub use lookup::{lookup, lookup_with};
pub use resolver::{
    resolve_target, NameService, NilNameService, StaticNameService, SystemNameService,
};
pub use types::{AddressDetail, IpVersion};
