//! # Host Range Expansion
//!
//! Turns a [`NetworkSpec`] into the ascending list of usable host addresses,
//! i.e. every address strictly between the network and broadcast addresses.
//! `/31` and `/32` blocks have no interior and expand to nothing.

use std::net::Ipv4Addr;
use std::ops::Range;

use tracing::debug;

use crate::error::ExpandError;
use crate::network::spec::NetworkSpec;

/// Most hosts the collecting functions will materialise: one `/8`.
///
/// Larger blocks must go through [`hosts`].
pub const MAX_EXPANDED_HOSTS: u64 = (1 << 24) - 2;

/// Inclusive span of usable host addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }
}

/// Lazy, ascending iterator over the interior of a block.
#[derive(Debug, Clone)]
pub struct HostIter {
    inner: Range<u32>,
}

impl Iterator for HostIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Ipv4Addr::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for HostIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Ipv4Addr::from)
    }
}

impl ExactSizeIterator for HostIter {}

/// Iterates the usable hosts of `spec` without allocating.
pub fn hosts(spec: &NetworkSpec) -> HostIter {
    let mask: u32 = spec.mask();
    let start: u32 = u32::from(spec.addr()) & mask;
    let finish: u32 = start | !mask;

    // 255.255.255.255/32 has no successor; the range is simply empty.
    let first: u32 = start.checked_add(1).unwrap_or(finish);

    HostIter { inner: first..finish }
}

/// The first and last usable host, or `None` for `/31` and `/32` blocks.
pub fn usable_range(spec: &NetworkSpec) -> Option<Ipv4Range> {
    let mut iter = hosts(spec);
    let first = iter.next()?;
    let last = iter.next_back().unwrap_or(first);
    Some(Ipv4Range::new(first, last))
}

/// Collects every usable host of `spec` in ascending order.
///
/// Blocks above [`MAX_EXPANDED_HOSTS`] are refused before allocating.
pub fn expand_spec(spec: &NetworkSpec) -> Result<Vec<Ipv4Addr>, ExpandError> {
    let count: u64 = spec.host_count();
    if count > MAX_EXPANDED_HOSTS {
        return Err(ExpandError::RangeTooLarge {
            range: spec.to_string(),
            hosts: count,
            limit: MAX_EXPANDED_HOSTS,
        });
    }

    let hosts: Vec<Ipv4Addr> = hosts(spec).collect();
    debug!("Expanded {spec} into {} host(s)", hosts.len());
    Ok(hosts)
}

/// Parses `network` and expands it. A malformed or oversized specification
/// yields an error and no addresses at all.
pub fn expand(network: &str) -> Result<Vec<Ipv4Addr>, ExpandError> {
    let spec: NetworkSpec = network.parse()?;
    expand_spec(&spec)
}

/// Same as [`expand`], rendered as dotted-quad strings.
pub fn expand_strings(network: &str) -> Result<Vec<String>, ExpandError> {
    Ok(expand(network)?.into_iter().map(|ip| ip.to_string()).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
