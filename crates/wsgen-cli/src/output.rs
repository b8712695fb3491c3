//! Terminal output for command results.
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const CHECK: &str = "\u{2713}";
const WARN: &str = "\u{26a0}";
const INFO: &str = "\u{2139}";

/// Writes status lines to stdout according to the resolved flags.
#[derive(Debug, Clone)]
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = resolve_format(args.output_format, &config.output.format, || {
            io::stdout().is_terminal()
        });

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unstyled line; suppressed by `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = if self.color {
            format!("{} {}", CHECK.green().bold(), msg.green())
        } else {
            format!("{CHECK} {msg}")
        };
        self.print(&line)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = if self.color {
            format!("{} {}", WARN.yellow().bold(), msg.yellow())
        } else {
            format!("{WARN} {msg}")
        };
        self.print(&line)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = if self.color {
            format!("{} {msg}", INFO.blue().bold())
        } else {
            format!("{INFO} {msg}")
        };
        self.print(&line)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    /// One build action, indented under the header.
    pub fn step(&self, msg: &str) -> io::Result<()> {
        if self.color {
            self.term.write_line(&format!("  {}", msg.dimmed()))
        } else {
            self.term.write_line(&format!("  {msg}"))
        }
    }

    /// Pretty JSON, written regardless of `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// The flag wins unless it was left at `auto`, then the configured value,
/// then terminal detection.
fn resolve_format(
    flag: OutputFormat,
    configured: &str,
    stdout_is_tty: impl FnOnce() -> bool,
) -> OutputFormat {
    let requested = match flag {
        OutputFormat::Auto => OutputFormat::from_config(configured),
        explicit => explicit,
    };
    match requested {
        OutputFormat::Auto if stdout_is_tty() => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        resolved => resolved,
    }
}
