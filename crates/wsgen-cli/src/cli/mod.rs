//! Command-line surface of `wsgen` (clap derive).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "wsgen",
    version,
    author,
    about = "Workspace generator for hardware verification projects",
    long_about = "Lays out <root>/<name> with per-core rtl, sim/env, sim/tb and syn \
                  folders, HDL stubs, comp.yml build descriptors and a shared \
                  UVM library descriptor.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a workspace.
    #[command(
        visible_alias = "n",
        after_help = "Examples:\n  wsgen new -n soc -r ~/work -c cpu dma uart\n  \
                      wsgen new -n soc -r ~/work -c cpu -p --variant framework\n  \
                      wsgen -v new -n soc -r /tmp --dry-run"
    )]
    New(NewArgs),

    /// Write a default configuration file.
    Init(InitArgs),

    /// Print a shell completion script to stdout.
    Completions(CompletionsArgs),

    /// Show the effective configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of workspace
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// List of cores
    #[arg(short, long, value_name = "CORE", num_args = 1..)]
    pub cores: Vec<String>,

    /// Root directory to create workspace [default: defaults.root]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Purge previous workspace, if exists
    #[arg(short, long)]
    pub purge: bool,

    /// Boilerplate flavour [default: defaults.variant]
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Build in memory and print the planned tree instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Bare design and testbench stubs.
    Basic,
    /// UVM test phase, environment package and test class.
    #[value(alias = "uvm")]
    Framework,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Framework => "framework",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write ./wsgen.toml instead of the user config file
    #[arg(long)]
    pub local: bool,

    /// Replace an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `defaults.variant`.
    Get { key: String },
    /// Print every value as TOML.
    List,
    /// Print the user configuration file location.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn variant_display() {
        assert_eq!(Variant::Basic.to_string(), "basic");
        assert_eq!(Variant::Framework.to_string(), "framework");
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "wsgen", "new", "-n", "ws1", "-r", "/tmp", "-c", "cpu", "dma", "-p",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "ws1");
        assert_eq!(args.root, Some(PathBuf::from("/tmp")));
        assert_eq!(args.cores, ["cpu", "dma"]);
        assert!(args.purge);
        assert!(!args.dry_run);
        assert_eq!(args.variant, None);
    }

    #[test]
    fn cores_are_optional() {
        let cli = Cli::parse_from(["wsgen", "new", "--name", "ws", "--root", "out"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.cores.is_empty());
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["wsgen", "new", "-r", "/tmp"]).is_err());
    }

    #[test]
    fn uvm_alias_selects_framework() {
        let cli = Cli::parse_from(["wsgen", "n", "-n", "ws", "--variant", "uvm"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.variant, Some(Variant::Framework));
    }

    #[test]
    fn verbose_flag_after_subcommand() {
        let cli = Cli::parse_from(["wsgen", "new", "-n", "ws", "-r", "/tmp", "-v"]);
        assert_eq!(cli.global.verbose, 1);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["wsgen", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}
