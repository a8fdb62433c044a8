//! # Local Range Inference
//!
//! Derives "interesting" local networks from the host's interface table.
//!
//! Ranges are sized for practical host discovery rather than mirroring the
//! configured subnet: an address bound with a prefix of /24 or broader is
//! rewritten to its first three octets (`a.b.c.0/<prefix>`), while anything
//! narrower than /24 is kept exactly as bound.

use std::net::Ipv4Addr;

use lanrange_common::config::Config;
use lanrange_common::network::interface::{InterfaceAddress, NetworkInterfaceProvider};
use lanrange_common::network::spec::NetworkSpec;
use tracing::{debug, warn};

/// Prefixes at or below this are rewritten to their first three octets.
pub const WIDEN_THRESHOLD: u8 = 24;

/// Returns the candidate local ranges, or the configured fallback when the
/// interface table cannot be read or holds no usable IPv4 address.
///
/// Never fails and never returns an empty list.
pub fn infer_local_ranges(provider: &dyn NetworkInterfaceProvider, cfg: &Config) -> Vec<NetworkSpec> {
    let addrs: Vec<InterfaceAddress> = match provider.interface_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            warn!("{e}; falling back to {}", cfg.fallback_range);
            return vec![cfg.fallback_range];
        }
    };

    ranges_or_fallback(&addrs, cfg)
}

/// Same policy as [`infer_local_ranges`], over an existing snapshot.
pub fn ranges_or_fallback(addrs: &[InterfaceAddress], cfg: &Config) -> Vec<NetworkSpec> {
    let ranges = ranges_from_addrs(addrs);
    if ranges.is_empty() {
        warn!("No local IPv4 ranges found; falling back to {}", cfg.fallback_range);
        return vec![cfg.fallback_range];
    }
    ranges
}

/// Candidate ranges for a snapshot, in interface order, duplicates removed.
/// May be empty.
pub fn ranges_from_addrs(addrs: &[InterfaceAddress]) -> Vec<NetworkSpec> {
    let mut ranges: Vec<NetworkSpec> = Vec::new();

    for range in addrs.iter().filter_map(candidate_range) {
        if !ranges.contains(&range) {
            ranges.push(range);
        }
    }

    ranges
}

/// The candidate range contributed by a single interface address, if any.
pub fn candidate_range(addr: &InterfaceAddress) -> Option<NetworkSpec> {
    let ip: Ipv4Addr = addr.lan_ipv4()?;

    let range = if addr.prefix <= WIDEN_THRESHOLD {
        let [a, b, c, _] = ip.octets();
        NetworkSpec::new(Ipv4Addr::new(a, b, c, 0), addr.prefix).ok()?
    } else {
        addr.spec()?
    };

    debug!("{} ({ip}/{}) contributes {range}", addr.interface, addr.prefix);
    Some(range)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
