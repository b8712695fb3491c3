//! Unified error handling for wsgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for wsgen core operations.
#[derive(Debug, Error, Clone)]
pub enum WsgenError {
    /// Invalid or missing arguments (raised before any filesystem action).
    #[error("Invalid argument: {0}")]
    Domain(#[from] DomainError),

    /// Filesystem failures while building the workspace.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl WsgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::InvalidArgument,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the invalid-argument kind.
    pub fn is_invalid_argument(&self) -> bool {
        self.category() == ErrorCategory::InvalidArgument
    }

    /// `true` for the filesystem kind.
    pub fn is_filesystem(&self) -> bool {
        self.category() == ErrorCategory::Filesystem
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type WsgenResult<T> = Result<T, WsgenError>;
