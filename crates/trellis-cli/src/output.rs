//! Output management and formatting.
//!
//! Rendered pages and machine-readable output go to stdout untouched; status
//! lines are decorated and suppressed in quiet mode.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Command output proper (a rendered page). Written verbatim and never
    /// suppressed.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    /// Pretty JSON on its own line. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> Result<(), crate::error::CliError> {
        let json = serde_json::to_string_pretty(value)?;
        self.term.write_line(&json)?;
        Ok(())
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dim secondary text, or as-is without colour.
    pub fn dim(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            root: None,
            output_format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false, OutputFormat::Human);
        let no_color = make_manager(false, true, OutputFormat::Human);
        assert_ne!(colored.dim("x"), "x");
        assert_eq!(no_color.dim("x"), "x");
    }

    #[test]
    fn plain_format_never_colours() {
        let out = make_manager(false, false, OutputFormat::Plain);
        assert_eq!(out.dim("x"), "x");
    }

    #[test]
    fn config_no_color_is_honoured() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            root: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert_eq!(OutputManager::new(&args, &config).dim("x"), "x");
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }
}
