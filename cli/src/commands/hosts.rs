use std::io::{self, BufWriter, Write};

use lanrange_common::config::Config;
use lanrange_common::network::interface::NetworkInterfaceProvider;
use lanrange_common::network::range;
use lanrange_common::network::spec::NetworkSpec;
use lanrange_core::{discovery, resolver};
use tracing::{info, warn};

pub fn hosts(
    spec: Option<NetworkSpec>,
    provider: &dyn NetworkInterfaceProvider,
    cfg: &Config,
) -> anyhow::Result<()> {
    let spec: NetworkSpec = match spec {
        Some(spec) => spec,
        None => choose_local_range(provider, cfg),
    };

    match range::usable_range(&spec) {
        Some(r) => info!("Enumerating hosts from {} to {}", r.start_addr, r.end_addr),
        None => warn!("{spec} has no usable host addresses"),
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for ip in range::hosts(&spec) {
        writeln!(out, "{ip}")?;
    }
    out.flush()?;

    Ok(())
}

/// Prefers the first inferred range this host sits in; otherwise the first
/// inferred range.
fn choose_local_range(provider: &dyn NetworkInterfaceProvider, cfg: &Config) -> NetworkSpec {
    match resolver::local_range(provider, cfg) {
        Ok((spec, ip)) => {
            info!("Using {spec} (local address {ip})");
            return spec;
        }
        Err(e) => warn!("{e}"),
    }

    let spec = discovery::infer_local_ranges(provider, cfg)
        .into_iter()
        .next()
        .unwrap_or(cfg.fallback_range);
    info!("Using {spec}");
    spec
}
