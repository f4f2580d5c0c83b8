//! The lookup pipeline.
//!
//! Resolves a target to addresses, then analyzes each address in
//! resolution order.

use tracing::debug;

use crate::analyze::analyze_with;
use crate::error::Result;
use crate::resolver::{resolve_target, NameService, SystemNameService};
use crate::types::AddressDetail;

/// Look up a target using the system name service.
///
/// `target` may be a hostname or literal IP address text. On success the
/// returned records follow resolution order and the list is never empty;
/// on failure no partial results are returned.
pub fn lookup(target: &str) -> Result<Vec<AddressDetail>> {
    lookup_with(target, &SystemNameService)
}

/// Look up a target using the given name service.
pub fn lookup_with(target: &str, ns: &dyn NameService) -> Result<Vec<AddressDetail>> {
    let addrs = resolve_target(target, ns)?;
    debug!("resolved '{}' to {} address(es)", target, addrs.len());

    let mut results = Vec::with_capacity(addrs.len());
    for addr in addrs {
        results.push(analyze_with(addr, ns));
    }

    Ok(results)
}
