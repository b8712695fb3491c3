//! Application layer errors.
//!
//! These errors represent failures while materialising a workspace.
//! Request validation failures are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during workspace orchestration.
///
/// Every variant is fatal: the run aborts at the first one and nothing that
/// was already created is rolled back.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (create, write or remove).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A directory the builder must create is already present.
    #[error("Filesystem error at {path}: path already exists")]
    PathExists { path: PathBuf },

    /// Adapter state could not be accessed (lock poisoned).
    #[error("Filesystem adapter lock poisoned")]
    AdapterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the root directory is reachable".into(),
            ],
            Self::PathExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use -p / --purge to remove the previous workspace (destructive)".into(),
                "Or choose a different workspace name".into(),
            ],
            Self::AdapterLockError => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PathExists { .. } => ErrorCategory::Filesystem,
            Self::AdapterLockError => ErrorCategory::Internal,
        }
    }
}
