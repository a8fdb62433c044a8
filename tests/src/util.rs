use lanrange_common::error::EnumerationError;
use lanrange_common::network::interface::{InterfaceAddress, NetworkInterfaceProvider, StaticInterfaces};
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Provider whose enumeration always fails.
pub struct BrokenInterfaces;

impl NetworkInterfaceProvider for BrokenInterfaces {
    fn interface_addrs(&self) -> Result<Vec<InterfaceAddress>, EnumerationError> {
        Err(EnumerationError::Os("netlink socket unavailable".into()))
    }
}

pub fn table(interfaces: Vec<NetworkInterface>) -> StaticInterfaces {
    StaticInterfaces::new(interfaces)
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

pub fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), tun0(), ipv6leakintrf0(), wlan0(), docker0(), veth1234()]
}

pub fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

/// Loopback interface carrying an anycast service address.
pub fn lo_anycast() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v4(10, 1, 1, 1, 32), v6("::1", 128)],
        65609,
    )
}

pub fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

pub fn tun0() -> NetworkInterface {
    ni(
        "tun0",
        5,
        None,
        &[v4(10, 0, 0, 5, 28), v6("fe80::c137:8964:5a63:efde", 64)],
        69841,
    )
}

pub fn ipv6leakintrf0() -> NetworkInterface {
    ni(
        "ipv6leakintrf0",
        6,
        Some(MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd)),
        &[v6("fdeb:446c:912d:8da::", 64), v6("fe80::7f87:ff4a:9ad8:d2f0", 64)],
        65731,
    )
}

pub fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 42, 24), v6("fe80::36cf:f6ff:fe9a:1122", 64)],
        69699,
    )
}

pub fn docker0() -> NetworkInterface {
    ni(
        "docker0",
        7,
        Some(MacAddr::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x01)),
        &[v4(172, 16, 5, 10, 16)],
        69699,
    )
}

pub fn veth1234() -> NetworkInterface {
    ni(
        "veth1234",
        8,
        Some(MacAddr::new(0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f)),
        &[v6("fe80::1a2b:3cff:fe4d:5e6f", 64)],
        69699,
    )
}
