//! Settings for the `wsgen` binary.
//!
//! Loaded once in `main` and handed to the commands; the library crates only
//! see the `WorkspaceRequest` built from them.
//!
//! Later layers win:
//!
//! 1. built-in defaults
//! 2. `--config <FILE>` if given, otherwise the user config file followed
//!    by `./wsgen.toml` (both optional)
//! 3. `WSGEN_*` environment variables, `__` between sections
//!    (`WSGEN_DEFAULTS__VARIANT=framework`)
//! 4. command-line flags, applied by the commands themselves

use std::path::{Path, PathBuf};

use anyhow::Context;
use ::config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};

use wsgen_core::domain::TemplateVariant;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "wsgen.toml";

const ENV_PREFIX: &str = "WSGEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new workspaces.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub variant: TemplateVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering files and environment over the
    /// built-in defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
        );

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path).required(true)),
            None => builder
                .add_source(toml_file(&Self::config_path()).required(false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the user configuration file.
    ///
    /// Platform config directory (`~/.config/wsgen/config.toml` on Linux),
    /// or `./wsgen.toml` when no home directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "wsgen", "wsgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

/// Settings files are TOML whatever their extension.
fn toml_file(path: &Path) -> File<FileSourceFile, FileFormat> {
    File::new(&path.to_string_lossy(), FileFormat::Toml)
}
