//! # Local Address Resolution
//!
//! Finds the addresses this host holds on its local networks.
//!
//! * [`local_ip`]: the first non-loopback IPv4 address.
//! * [`local_addrs_for_ranges`]: which local address lives in each candidate range.
//! * [`local_range`]: the first inferred range that holds a local address.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use lanrange_common::config::Config;
use lanrange_common::error::LookupError;
use lanrange_common::network::interface::{InterfaceAddress, NetworkInterfaceProvider};
use lanrange_common::network::spec::NetworkSpec;
use tracing::{debug, warn};

use crate::discovery;

/// Candidate range (canonical string) to the local address inside it.
pub type RangeAddressMap = BTreeMap<String, Ipv4Addr>;

/// Returns the first non-loopback IPv4 address, in interface order.
pub fn local_ip(provider: &dyn NetworkInterfaceProvider) -> Result<Ipv4Addr, LookupError> {
    let addrs: Vec<InterfaceAddress> = provider.interface_addrs()?;

    first_lan_ipv4(&addrs).ok_or(LookupError::NoAddressFound)
}

fn first_lan_ipv4(addrs: &[InterfaceAddress]) -> Option<Ipv4Addr> {
    addrs.iter().find_map(InterfaceAddress::lan_ipv4)
}

/// Maps every inferred local range to the local address it contains.
///
/// Ranges are inferred from the same snapshot that is searched, so the two
/// never disagree. Enumeration failure propagates; an empty map is reported
/// as [`LookupError::NoMatchingRanges`].
pub fn local_addrs_for_ranges(
    provider: &dyn NetworkInterfaceProvider,
    cfg: &Config,
) -> Result<RangeAddressMap, LookupError> {
    let addrs: Vec<InterfaceAddress> = provider.interface_addrs()?;
    let ranges: Vec<NetworkSpec> = discovery::ranges_or_fallback(&addrs, cfg);

    let map = map_ranges_to_addrs(&ranges_as_strings(&ranges), &addrs);
    if map.is_empty() {
        return Err(LookupError::NoMatchingRanges);
    }

    Ok(map)
}

/// The first range, in inference order, that holds a local address, along
/// with that address. Errors as [`local_addrs_for_ranges`].
pub fn local_range(
    provider: &dyn NetworkInterfaceProvider,
    cfg: &Config,
) -> Result<(NetworkSpec, Ipv4Addr), LookupError> {
    let addrs: Vec<InterfaceAddress> = provider.interface_addrs()?;
    let ranges: Vec<NetworkSpec> = discovery::ranges_or_fallback(&addrs, cfg);

    let map = map_ranges_to_addrs(&ranges_as_strings(&ranges), &addrs);

    ranges
        .into_iter()
        .find_map(|spec| map.get(&spec.to_string()).map(|ip| (spec, *ip)))
        .ok_or(LookupError::NoMatchingRanges)
}

fn ranges_as_strings(ranges: &[NetworkSpec]) -> Vec<String> {
    ranges.iter().map(NetworkSpec::to_string).collect()
}

/// Containment pass over caller-supplied candidates.
///
/// A candidate that fails to parse is skipped, not fatal. When several local
/// addresses fall in one range, the last in interface order wins.
pub fn map_ranges_to_addrs<S: AsRef<str>>(candidates: &[S], addrs: &[InterfaceAddress]) -> RangeAddressMap {
    let mut map = RangeAddressMap::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let spec: NetworkSpec = match candidate.parse() {
            Ok(spec) => spec,
            Err(e) => {
                warn!("Skipping candidate range: {e}");
                continue;
            }
        };

        if let Some(ip) = addrs.iter().filter_map(InterfaceAddress::lan_ipv4).rfind(|ip| spec.contains(*ip)) {
            debug!("{ip} lies within {spec}");
            map.insert(spec.to_string(), ip);
        }
    }

    map
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
