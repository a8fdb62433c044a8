use std::net::Ipv4Addr;

use lanrange_common::config::Config;
use lanrange_common::error::{ExpandError, ParseError};
use lanrange_common::network::range;
use lanrange_core::resolver;

use crate::util::{iface_all, table};

#[test]
fn home_lan_expands_to_254_hosts() {
    let hosts = range::expand_strings("192.168.1.0/24").unwrap();
    assert_eq!(hosts.len(), 254);
    assert_eq!(hosts[0], "192.168.1.1");
    assert_eq!(hosts[253], "192.168.1.254");
}

#[test]
fn malformed_specification_yields_no_hosts() {
    assert!(matches!(
        range::expand_strings("not-an-ip/24"),
        Err(ExpandError::Parse(ParseError::InvalidAddress { .. }))
    ));
}

#[test]
fn whole_address_space_is_refused_not_collected() {
    assert!(matches!(
        range::expand_strings("0.0.0.0/0"),
        Err(ExpandError::RangeTooLarge { .. })
    ));
}

#[test]
fn point_to_point_blocks_are_empty() {
    assert_eq!(range::expand("192.168.1.4/31"), Ok(vec![]));
    assert_eq!(range::expand("192.168.1.4/32"), Ok(vec![]));
}

#[test]
fn local_ranges_expand_around_their_local_address() {
    // infer -> resolve -> expand, the order a scanner would use.
    let map = resolver::local_addrs_for_ranges(&table(iface_all()), &Config::default()).unwrap();

    let tun = range::expand("10.0.0.5/28").unwrap();
    assert_eq!(tun.len(), 14);
    assert_eq!(tun.first(), Some(&Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(tun.last(), Some(&Ipv4Addr::new(10, 0, 0, 14)));

    for (spec, local) in &map {
        let hosts = range::expand(spec).unwrap();
        assert!(hosts.contains(local), "{local} missing from {spec}");
    }
}
