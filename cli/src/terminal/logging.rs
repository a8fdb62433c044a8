use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Status lines for stderr.
///
/// `info` and above read as plain status; `debug` and `trace` carry the
/// emitting module so `RUST_LOG=lanrange_core=debug` output stays traceable.
pub struct StatusFormatter;

impl<S, N> FormatEvent<S, N> for StatusFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        match *meta.level() {
            Level::ERROR => write!(writer, "{} ", "[-]".red().bold())?,
            Level::WARN => write!(writer, "{} ", "[*]".yellow().bold())?,
            Level::INFO => write!(writer, "{} ", "[+]".green().bold())?,
            _ => write!(writer, "{} {} ", "[?]".blue(), meta.target().dimmed())?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Diagnostics go to stderr so that stdout carries only results.
///
/// `RUST_LOG` overrides the default level.
pub fn init(quiet: bool) {
    let default_level: &str = if quiet { "warn" } else { "info" };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(StatusFormatter)
        .init();
}
