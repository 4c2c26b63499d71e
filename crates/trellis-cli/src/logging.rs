//! Tracing subscriber setup for the `trellis` binary.
//!
//! The library crates only emit events; this module decides what reaches
//! stderr. `RUST_LOG` takes precedence. Otherwise `-v`/`-vv`/`-vvv` raise the
//! workspace crates to info/debug/trace, `--quiet` lowers them to error, and
//! the default is warn.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the verbosity flags control.
const WORKSPACE_TARGETS: [&str; 3] = ["trellis", "trellis_core", "trellis_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `trellis=debug,trellis_core=debug,...`; dependencies stay at their
/// default (off).
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
