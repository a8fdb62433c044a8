pub mod discover;
pub mod hosts;

use clap::{Parser, Subcommand};
use lanrange_common::config::Config;
use lanrange_common::network::spec::NetworkSpec;

#[derive(Parser)]
#[command(name = "lanrange")]
#[command(about = "Find local networks and the hosts worth scanning in them.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Range reported when no local range can be inferred
    #[arg(long, global = true, default_value_t = Config::default_fallback())]
    pub fallback: NetworkSpec,

    /// Only print results and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the local ranges worth scanning
    #[command(alias = "r")]
    Ranges,
    /// Show the first non-loopback IPv4 address of this device
    #[command(alias = "l")]
    LocalIp,
    /// Show which local address lives in each local range
    #[command(alias = "m")]
    Map,
    /// Enumerate the usable hosts of a range (defaults to the local one)
    #[command(alias = "h")]
    Hosts { spec: Option<NetworkSpec> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
