// ============================================================================
// domain/error.rs - REQUEST VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is an invalid-argument condition: it is raised while the
/// request is being assembled, before the builder touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid {field} '{name}': {reason}")]
    InvalidName {
        field: &'static str,
        name: String,
        reason: String,
    },

    #[error("Unknown template variant '{0}'")]
    UnknownVariant(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The {field} must be provided"),
                match *field {
                    "workspace name" => "Pass it with -n / --name".into(),
                    "root directory" => {
                        "Pass it with -r / --root or set defaults.root in the config".into()
                    }
                    _ => "Use --help for usage information".into(),
                },
            ],
            Self::InvalidName { field, .. } => vec![
                format!("A {field} becomes a directory name"),
                "Avoid path separators and the names '.' and '..'".into(),
                "Examples: cpu, uart_rx, dma0".into(),
            ],
            Self::UnknownVariant(_) => vec![
                "Supported variants:".into(),
                "  • basic      - plain design/testbench stubs".into(),
                "  • framework  - UVM test phase and environment stubs".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
