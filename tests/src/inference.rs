use lanrange_common::config::Config;
use lanrange_core::discovery;

use crate::util::{BrokenInterfaces, docker0, iface_all, ipv6leakintrf0, lo, lo_anycast, table, tun0, veth1234};

fn inferred(interfaces: Vec<pnet::datalink::NetworkInterface>) -> Vec<String> {
    discovery::infer_local_ranges(&table(interfaces), &Config::default())
        .iter()
        .map(|r| r.to_string())
        .collect()
}

#[test]
fn infers_every_lan_range_in_interface_order() {
    assert_eq!(
        inferred(iface_all()),
        vec!["192.168.0.0/24", "10.0.0.5/28", "192.168.1.0/24", "172.16.5.0/16"]
    );
}

#[test]
fn broad_subnet_is_rewritten_to_first_three_octets() {
    assert!(inferred(vec![docker0()]).contains(&"172.16.5.0/16".to_string()));
}

#[test]
fn narrow_subnet_is_kept_as_bound() {
    assert!(inferred(vec![tun0()]).contains(&"10.0.0.5/28".to_string()));
}

#[test]
fn loopback_and_ipv6_only_falls_back() {
    assert_eq!(inferred(vec![lo(), ipv6leakintrf0(), veth1234()]), vec!["192.168.1.0/24"]);
}

#[test]
fn routable_address_on_loopback_interface_is_kept() {
    assert_eq!(inferred(vec![lo_anycast()]), vec!["10.1.1.1/32"]);
}

#[test]
fn empty_table_falls_back() {
    assert_eq!(inferred(vec![]), vec!["192.168.1.0/24"]);
}

#[test]
fn enumeration_failure_falls_back() {
    let ranges = discovery::infer_local_ranges(&BrokenInterfaces, &Config::default());
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].to_string(), "192.168.1.0/24");
}

#[test]
fn inference_is_idempotent() {
    let provider = table(iface_all());
    let cfg = Config::default();
    assert_eq!(
        discovery::infer_local_ranges(&provider, &cfg),
        discovery::infer_local_ranges(&provider, &cfg)
    );
}
