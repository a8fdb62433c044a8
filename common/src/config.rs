use std::net::Ipv4Addr;

use crate::network::spec::NetworkSpec;

/// Range used when no local range can be inferred.
pub const DEFAULT_FALLBACK_ADDR: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 0);
pub const DEFAULT_FALLBACK_PREFIX: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Returned by range inference when the interface table yields nothing.
    ///
    /// Never substituted anywhere else.
    pub fallback_range: NetworkSpec,
}

impl Config {
    pub fn default_fallback() -> NetworkSpec {
        NetworkSpec::clamped(DEFAULT_FALLBACK_ADDR, DEFAULT_FALLBACK_PREFIX)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_range: Self::default_fallback(),
        }
    }
}
