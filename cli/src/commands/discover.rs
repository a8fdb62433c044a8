use colored::*;
use lanrange_common::config::Config;
use lanrange_common::network::interface::NetworkInterfaceProvider;
use lanrange_core::{discovery, resolver};
use tracing::info;

use crate::terminal::print;

pub fn ranges(provider: &dyn NetworkInterfaceProvider, cfg: &Config) -> anyhow::Result<()> {
    let ranges = discovery::infer_local_ranges(provider, cfg);

    for range in &ranges {
        print::line(&range.to_string());
    }

    info!("{} range(s) found", ranges.len());
    Ok(())
}

pub fn local_ip(provider: &dyn NetworkInterfaceProvider) -> anyhow::Result<()> {
    let ip = resolver::local_ip(provider)?;
    print::line(&ip.to_string());
    Ok(())
}

pub fn map(provider: &dyn NetworkInterfaceProvider, cfg: &Config) -> anyhow::Result<()> {
    let map = resolver::local_addrs_for_ranges(provider, cfg)?;

    for (range, ip) in &map {
        print::pair(range, ip.to_string().green());
    }

    info!("{} range(s) hold a local address", map.len());
    Ok(())
}
