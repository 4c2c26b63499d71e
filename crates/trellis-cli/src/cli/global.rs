//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    -v      which layout wrapped the page
    -vv     reference resolution and layout probes
    -vvv    every template frame entered and left"
    )]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Also set by a `NO_COLOR` environment variable.
    #[arg(long, global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE instead of the default locations"
    )]
    pub config: Option<PathBuf>,

    /// Layouts are searched up to this directory and `/`-prefixed references
    /// resolve from it.
    #[arg(
        short,
        long,
        global = true,
        value_name = "DIR",
        help = "Project root (default: render.root, then the working directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How status messages are styled"
    )]
    pub output_format: OutputFormat,
}

/// Styling of status output. Rendered pages are always written verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}
