//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Render pages through their partials and layouts",
    long_about = "Trellis renders a page template, the partials it pulls in, \
                  and the nearest `_layout` file above it into one response body.",
    after_help = "EXAMPLES:\n\
        \x20 trellis render site/blog/post.html.tera --root site\n\
        \x20 trellis render feed.xml.j2 --headers\n\
        \x20 trellis layout site/blog/post.html.tera\n\
        \x20 trellis list --root site\n\
        \x20 trellis completions bash > /usr/share/bash-completion/completions/trellis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a page, wrapped in its layout.
    #[command(
        visible_alias = "r",
        about = "Render a page",
        after_help = "EXAMPLES:\n\
            \x20 trellis render index.tera\n\
            \x20 trellis render blog/post.html.j2 --no-layout\n\
            \x20 trellis render style.css.tera -o public/style.css\n\
            \x20 trellis render index.tera --format json"
    )]
    Render(RenderArgs),

    /// Show which layout would wrap a page.
    #[command(
        about = "Show the layout for a page",
        after_help = "EXAMPLES:\n\
            \x20 trellis layout blog/post.html.tera"
    )]
    Layout(LayoutArgs),

    /// List renderable pages under the project root.
    #[command(
        visible_alias = "ls",
        about = "List pages and their layouts",
        after_help = "EXAMPLES:\n\
            \x20 trellis list\n\
            \x20 trellis list --root site --format json"
    )]
    List(ListArgs),

    /// Initialise a Trellis configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 trellis init           # .trellis.toml in CWD\n\
            \x20 trellis init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trellis completions bash > ~/.local/share/bash-completion/completions/trellis\n\
            \x20 trellis completions zsh  > ~/.zfunc/_trellis\n\
            \x20 trellis completions fish > ~/.config/fish/completions/trellis.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Trellis configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trellis config get render.max_depth\n\
            \x20 trellis config list\n\
            \x20 trellis config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `trellis render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page to render.
    #[arg(value_name = "FILE", help = "Page template to render")]
    pub file: PathBuf,

    /// Skip the layout lookup.
    #[arg(long = "no-layout", help = "Render the page on its own")]
    pub no_layout: bool,

    /// Print a `Content-Type` header line before the body.
    #[arg(long = "headers", help = "Print the content type before the body")]
    pub headers: bool,

    /// Write the result to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write output to FILE"
    )]
    pub output: Option<PathBuf>,

    /// What to print.
    #[arg(
        long = "format",
        value_enum,
        default_value = "body",
        help = "Output format"
    )]
    pub format: RenderFormat,
}

/// Output format for the `render` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// The rendered body only.
    Body,
    /// Content type, layout and body as a JSON object.
    Json,
}

// ── layout ────────────────────────────────────────────────────────────────────

/// Arguments for `trellis layout`.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Page to look up.
    #[arg(value_name = "FILE", help = "Page template")]
    pub file: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One page per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location instead of `.trellis.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `trellis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `trellis config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.max_depth`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
