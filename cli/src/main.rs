mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, hosts};
use lanrange_common::config::Config;
use lanrange_common::network::interface::{StaticInterfaces, SystemInterfaces};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        fallback_range: commands.fallback,
    };
    let provider = SystemInterfaces;

    match commands.command {
        Commands::Ranges => {
            print::header("local ranges", commands.quiet);
            discover::ranges(&provider, &cfg)
        }
        Commands::LocalIp => {
            print::header("local address", commands.quiet);
            discover::local_ip(&provider)
        }
        Commands::Map => {
            print::header("ranges to local addresses", commands.quiet);
            discover::map(&provider, &cfg)
        }
        Commands::Hosts { spec } => {
            print::header("usable hosts", commands.quiet);
            // One snapshot for both the range lookup and its fallback.
            hosts::hosts(spec, &StaticInterfaces::capture(), &cfg)
        }
    }
}
