//! # Network Specification
//!
//! A network specification is an IPv4 address plus a prefix length, written in
//! CIDR notation (`192.168.1.0/24`). The address is kept exactly as written, so
//! `10.0.0.5/28` renders back as `10.0.0.5/28`; arithmetic always works on the
//! masked base address.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ParseError;

pub const MAX_PREFIX: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    inner: Ipv4Network,
}

impl NetworkSpec {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, ParseError> {
        let inner = Ipv4Network::new(addr, prefix).map_err(|_| ParseError::PrefixOutOfRange(prefix))?;
        Ok(Self { inner })
    }

    /// Infallible constructor; prefixes above 32 are clamped.
    pub fn clamped(addr: Ipv4Addr, prefix: u8) -> Self {
        let inner = Ipv4Network::new(addr, prefix.min(MAX_PREFIX)).unwrap_or_else(|_| Ipv4Network::from(addr));
        Self { inner }
    }

    /// The address as written, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.inner.ip()
    }

    pub fn prefix(&self) -> u8 {
        self.inner.prefix()
    }

    pub fn mask(&self) -> u32 {
        prefix_mask(self.prefix())
    }

    /// The base address of the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr()) & self.mask())
    }

    /// The highest address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from((u32::from(self.addr()) & self.mask()) | !self.mask())
    }

    /// Number of usable hosts, network and broadcast excluded.
    pub fn host_count(&self) -> u64 {
        let block: u64 = 1 << (MAX_PREFIX - self.prefix());
        block.saturating_sub(2)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask() == u32::from(self.network())
    }
}

/// 32-bit mask for a prefix length; `0` yields an all-zero mask.
pub fn prefix_mask(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        p => u32::MAX << (MAX_PREFIX - p.min(MAX_PREFIX)),
    }
}

impl FromStr for NetworkSpec {
    type Err = ParseError;

    /// Parses `a.b.c.d/prefix`. The prefix is mandatory.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(ParseError::MissingPrefix(s.to_string()));
        };

        let addr = ip_str.parse::<Ipv4Addr>().map_err(|_| ParseError::InvalidAddress {
            input: s.to_string(),
            addr: ip_str.to_string(),
        })?;

        let prefix = prefix_str.parse::<u8>().map_err(|_| ParseError::InvalidPrefix {
            input: s.to_string(),
            prefix: prefix_str.to_string(),
        })?;

        if prefix > MAX_PREFIX {
            return Err(ParseError::PrefixOutOfRange(prefix));
        }

        Self::new(addr, prefix)
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
