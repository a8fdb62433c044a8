//! # Interface Addresses
//!
//! Snapshots of the addresses bound to the host's network interfaces.
//!
//! All lookups go through [`NetworkInterfaceProvider`], so policies can run
//! against the live OS table ([`SystemInterfaces`]) or a captured one
//! ([`StaticInterfaces`]).

use std::net::{IpAddr, Ipv4Addr};

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::error::EnumerationError;
use crate::network::spec::NetworkSpec;

/// An address bound to a live interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceAddress {
    pub interface: String,
    pub ip: IpAddr,
    pub prefix: u8,
    pub loopback: bool,
}

impl InterfaceAddress {
    pub fn new(interface: &str, ip: IpAddr, prefix: u8) -> Self {
        Self {
            interface: interface.to_string(),
            ip,
            prefix,
            loopback: ip.is_loopback(),
        }
    }

    /// The IPv4 address, if this is a non-loopback IPv4 binding.
    pub fn lan_ipv4(&self) -> Option<Ipv4Addr> {
        match self.ip {
            IpAddr::V4(v4) if !self.loopback => Some(v4),
            _ => None,
        }
    }

    /// The interface's own subnet, address as bound.
    pub fn spec(&self) -> Option<NetworkSpec> {
        match self.ip {
            IpAddr::V4(v4) => NetworkSpec::new(v4, self.prefix).ok(),
            IpAddr::V6(_) => None,
        }
    }
}

/// Source of interface addresses. Each call returns a fresh snapshot.
pub trait NetworkInterfaceProvider {
    fn interface_addrs(&self) -> Result<Vec<InterfaceAddress>, EnumerationError>;
}

/// Reads the live interface table through `pnet::datalink`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl NetworkInterfaceProvider for SystemInterfaces {
    fn interface_addrs(&self) -> Result<Vec<InterfaceAddress>, EnumerationError> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        debug!("Identified {} network interface(s)", interfaces.len());

        if interfaces.is_empty() {
            return Err(EnumerationError::NoInterfaces);
        }

        Ok(addresses_of(&interfaces))
    }
}

/// A fixed interface table, captured once and queried many times.
#[derive(Debug, Default, Clone)]
pub struct StaticInterfaces {
    interfaces: Vec<NetworkInterface>,
}

impl StaticInterfaces {
    pub fn new(interfaces: Vec<NetworkInterface>) -> Self {
        Self { interfaces }
    }

    /// Takes a snapshot of the live table.
    pub fn capture() -> Self {
        Self::new(datalink::interfaces())
    }
}

impl NetworkInterfaceProvider for StaticInterfaces {
    fn interface_addrs(&self) -> Result<Vec<InterfaceAddress>, EnumerationError> {
        if self.interfaces.is_empty() {
            return Err(EnumerationError::NoInterfaces);
        }
        Ok(addresses_of(&self.interfaces))
    }
}

pub trait NetworkInterfaceExtension {
    fn addresses(&self) -> Vec<InterfaceAddress>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn addresses(&self) -> Vec<InterfaceAddress> {
        self.ips
            .iter()
            .map(|net: &IpNetwork| InterfaceAddress::new(&self.name, net.ip(), net.prefix()))
            .collect()
    }
}

/// Flattens interfaces into their addresses, preserving OS order.
pub fn addresses_of(interfaces: &[NetworkInterface]) -> Vec<InterfaceAddress> {
    interfaces.iter().flat_map(|iface| iface.addresses()).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
