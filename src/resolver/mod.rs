//! Name service module.
//!
//! Provides the forward/reverse name-resolution interface and
//! implementations, plus target resolution with literal-address fallback.

use std::collections::HashMap;
use std::net::IpAddr;

use tracing::debug;

use crate::error::{LookupError, Result};

/// Forward and reverse name-resolution interface.
pub trait NameService: Send + Sync {
    /// Resolve a hostname to its addresses, in resolution order.
    ///
    /// The returned list may mix IPv4 and IPv6 addresses. Returns an
    /// error if the resolution fails.
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>>;

    /// Resolve an address back to its hostnames (PTR lookup).
    fn lookup_addr(&self, addr: &IpAddr) -> Result<Vec<String>>;
}

/// Name service backed by the OS resolver.
pub struct SystemNameService;

impl SystemNameService {
    /// Create a new system name service.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemNameService {
    fn default() -> Self {
        Self::new()
    }
}

impl NameService for SystemNameService {
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>> {
        dns_lookup::lookup_host(host)
            .map_err(|e| LookupError::NameService(format!("failed to resolve {}: {}", host, e)))
    }

    fn lookup_addr(&self, addr: &IpAddr) -> Result<Vec<String>> {
        let name = dns_lookup::lookup_addr(addr).map_err(|e| {
            LookupError::NameService(format!("reverse lookup of {} failed: {}", addr, e))
        })?;
        Ok(vec![name])
    }
}

/// Name service that always fails.
///
/// Useful in tests to force the literal-address fallback and the
/// empty-name-fields path without touching the OS resolver.
pub struct NilNameService;

impl NilNameService {
    /// Create a new nil name service.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NilNameService {
    fn default() -> Self {
        Self::new()
    }
}

impl NameService for NilNameService {
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>> {
        Err(LookupError::NameService(format!(
            "name service disabled, cannot resolve {}",
            host
        )))
    }

    fn lookup_addr(&self, addr: &IpAddr) -> Result<Vec<String>> {
        Err(LookupError::NameService(format!(
            "name service disabled, cannot reverse {}",
            addr
        )))
    }
}

/// Name service with predefined mappings.
///
/// Strictly map-based: unknown hosts and addresses are errors, and
/// literal address text is not passed through. Literal handling belongs
/// to [`resolve_target`]'s fallback, which this keeps reachable in tests.
pub struct StaticNameService {
    hosts: HashMap<String, Vec<IpAddr>>,
    ptrs: HashMap<IpAddr, Vec<String>>,
}

impl StaticNameService {
    /// Create a new empty static name service.
    pub fn new() -> Self {
        Self {
            hosts: HashMap::new(),
            ptrs: HashMap::new(),
        }
    }

    /// Add a forward mapping for a hostname.
    pub fn add_host(&mut self, host: impl Into<String>, addrs: Vec<IpAddr>) {
        self.hosts.insert(host.into().to_lowercase(), addrs);
    }

    /// Add a reverse mapping for an address.
    pub fn add_ptr(&mut self, addr: IpAddr, names: Vec<String>) {
        self.ptrs.insert(addr, names);
    }

    /// Add a forward mapping and return self for chaining.
    pub fn with_host(mut self, host: impl Into<String>, addrs: Vec<IpAddr>) -> Self {
        self.add_host(host, addrs);
        self
    }

    /// Add a reverse mapping and return self for chaining.
    pub fn with_ptr(mut self, addr: IpAddr, names: Vec<String>) -> Self {
        self.add_ptr(addr, names);
        self
    }
}

impl Default for StaticNameService {
    fn default() -> Self {
        Self::new()
    }
}

impl NameService for StaticNameService {
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>> {
        self.hosts
            .get(&host.to_lowercase())
            .cloned()
            .ok_or_else(|| LookupError::NameService(format!("host not found: {}", host)))
    }

    fn lookup_addr(&self, addr: &IpAddr) -> Result<Vec<String>> {
        self.ptrs
            .get(addr)
            .cloned()
            .ok_or_else(|| LookupError::NameService(format!("no PTR record for {}", addr)))
    }
}

/// Resolve a target string to one or more addresses.
///
/// Name resolution is attempted first; if it fails (or yields nothing),
/// the target is parsed as literal address text. When both attempts fail
/// the resolution failure is surfaced, since it is the more informative
/// of the two.
pub fn resolve_target(target: &str, ns: &dyn NameService) -> Result<Vec<IpAddr>> {
    let lookup_err = match ns.lookup_host(target) {
        Ok(addrs) if !addrs.is_empty() => return Ok(addrs),
        Ok(_) => LookupError::NameService(format!("no addresses found for {}", target)),
        Err(e) => e,
    };

    debug!("name resolution of '{}' failed, trying literal parse", target);
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(vec![ip]);
    }

    Err(LookupError::Resolution {
        target: target.to_string(),
        message: lookup_err.to_string(),
    })
}
