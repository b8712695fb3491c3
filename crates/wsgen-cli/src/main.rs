//! `wsgen`: generate hardware verification workspaces.
//!
//! Arguments are parsed first, then logging is installed. Configuration is
//! loaded, and the subcommand runs with an [`OutputManager`]. Any
//! [`CliError`] becomes a stderr message and one of the exit codes below.
//!
//! ## Exit codes
//!
//! | Code | Meaning                      |
//! |------|------------------------------|
//! |  0   | Success                      |
//! |  1   | Filesystem / internal error  |
//! |  2   | Invalid argument             |
//! |  4   | Configuration error          |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and must exit 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    let stderr_tty = std::io::stderr().is_terminal();
    let mut report = ErrorReport::new(&cli.global, stderr_tty);

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("wsgen: {e}");
        return ExitCode::from(1);
    }
    debug!(global = ?cli.global, "arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            return report.exit(CliError::ConfigError {
                message: e.to_string(),
                source: Some(e.into()),
            });
        }
    };

    report.apply_config(&config);
    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => report.exit(e),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(args) => commands::new::execute(args, cli.global, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// How a failed run is presented on stderr.
struct ErrorReport {
    verbose: bool,
    color: bool,
}

impl ErrorReport {
    fn new(global: &GlobalArgs, stderr_tty: bool) -> Self {
        Self {
            verbose: global.verbose > 0,
            color: !global.no_color && stderr_tty,
        }
    }

    /// `output.no_color` in the settings also disables styled errors.
    fn apply_config(&mut self, config: &AppConfig) {
        if config.output.no_color {
            self.color = false;
        }
    }

    fn exit(&self, err: CliError) -> ExitCode {
        err.log();
        let text = if self.color {
            err.format_colored(self.verbose)
        } else {
            err.format_plain(self.verbose)
        };
        eprint!("{text}");
        ExitCode::from(err.exit_code())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn configured_no_color_disables_error_styling() {
        let mut report = ErrorReport {
            verbose: false,
            color: true,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        report.apply_config(&config);
        assert!(!report.color);
    }

    #[test]
    fn no_color_flag_disables_error_styling() {
        let cli = Cli::parse_from(["wsgen", "--no-color", "config", "path"]);
        assert!(!ErrorReport::new(&cli.global, true).color);
    }

    #[test]
    fn new_has_visible_alias() {
        let cmd = Cli::command();
        let new = cmd.find_subcommand("new").unwrap();
        assert!(new.get_visible_aliases().any(|a| a == "n"));
    }
}
