//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wsgen-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::WsgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wsgen_adapters::filesystem::LocalFilesystem` (production)
/// - `wsgen_adapters::filesystem::MemoryFilesystem` (dry runs, testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WsgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> WsgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WsgenResult<()>;
}

/// One observable action taken by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Purged(PathBuf),
    DirectoryCreated(PathBuf),
    FileWritten(PathBuf),
}

impl BuildEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::Purged(p) | Self::DirectoryCreated(p) | Self::FileWritten(p) => p,
        }
    }
}

impl fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purged(p) => write!(f, "Removing directory {}", p.display()),
            Self::DirectoryCreated(p) => write!(f, "Creating directory {}", p.display()),
            Self::FileWritten(p) => write!(f, "Writing file {}", p.display()),
        }
    }
}

/// Port for progress reporting.
///
/// The builder never touches a global logger; whoever constructs it decides
/// where events go.
///
/// Implemented by:
/// - `wsgen_adapters::reporter::TracingReporter` (events as `tracing` INFO)
/// - `wsgen_adapters::reporter::NullReporter` (discard)
/// - the CLI's console reporter (prints when `--verbose`)
#[cfg_attr(test, mockall::automock)]
pub trait BuildReporter: Send + Sync {
    fn report(&self, event: &BuildEvent);
}
