//! Errors surfaced by the `wsgen` binary and their exit codes.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use wsgen_core::error::{ErrorCategory as CoreCategory, WsgenError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or serialised.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// The builder rejected the request or failed on the filesystem.
    #[error("Workspace generation failed: {0}")]
    Core(#[from] WsgenError),

    /// Terminal or config-file I/O outside the builder.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// How an error is classified for exit codes and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid arguments. Exit code 2.
    UserError,
    /// Unreadable or invalid settings. Exit code 4.
    Configuration,
    /// Filesystem and other runtime failures. Exit code 1.
    Internal,
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the settings file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check WSGEN_* environment variables".into(),
                "Run 'wsgen init --force' to write fresh defaults".into(),
            ],
            Self::Core(core) => {
                let mut hints = core.suggestions();
                if core.is_invalid_argument() {
                    hints.push("Run 'wsgen new --help' for the accepted options".into());
                }
                hints
            }
            Self::IoError { .. } => vec![
                "Check permissions on the target directory".into(),
                "Check that the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::InvalidArgument => ErrorCategory::UserError,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Message, cause chain (when `verbose`) and suggestions, with ANSI
    /// styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, styled: bool) -> String {
        let paint = |text: String, style: fn(&str) -> String| {
            if styled { style(&text) } else { text }
        };

        let mut out = format!(
            "\n{}\n",
            paint(format!("Error: {self}"), |t| t.red().bold().to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(format!("  Caused by: {err}"), |t| {
                    t.dimmed().to_string()
                }));
                out.push('\n');
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:".into(), |t| t.yellow().bold().to_string()));
            out.push('\n');
            for hint in hints {
                out.push_str(&format!("  - {hint}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Use -v / --verbose for more details.".into(), |t| {
                t.dimmed().to_string()
            }));
            out.push('\n');
        }

        out
    }

    /// Record the failure in the log at a severity matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(error = %self, "rejected"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "error source");
        }
    }
}

/// Attach a context message when converting a foreign error.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use wsgen_core::application::ApplicationError;
    use wsgen_core::domain::DomainError;

    fn missing_root() -> CliError {
        CliError::Core(WsgenError::from(DomainError::MissingRequiredField {
            field: "root directory",
        }))
    }

    fn path_exists() -> CliError {
        CliError::Core(WsgenError::from(ApplicationError::PathExists {
            path: PathBuf::from("/tmp/ws1/tmp"),
        }))
    }

    #[test]
    fn missing_argument_is_user_error() {
        assert_eq!(missing_root().category(), ErrorCategory::UserError);
        assert_eq!(missing_root().exit_code(), 2);
    }

    #[test]
    fn filesystem_failure_exits_one() {
        assert_eq!(path_exists().exit_code(), 1);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_io() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn existing_workspace_suggests_purge() {
        assert!(path_exists().suggestions().iter().any(|s| s.contains("--purge")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = path_exists().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("/tmp/ws1/tmp"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn colored_and_plain_share_content() {
        let err = path_exists();
        let colored = err.format_colored(false);
        assert!(colored.contains("/tmp/ws1/tmp"));
        assert!(colored.contains("\u{1b}["));
        assert!(!err.format_plain(false).contains("\u{1b}["));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = missing_root().format_plain(true);
        assert!(!s.contains("Use -v / --verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err: CliResult<()> =
            Err(io::Error::other("disk full")).with_cli_context(|| "writing config");
        let s = err.unwrap_err().format_plain(true);
        assert!(s.contains("Caused by: disk full"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}
