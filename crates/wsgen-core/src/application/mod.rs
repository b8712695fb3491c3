//! Application layer for wsgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`WorkspaceBuilder`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; naming conventions,
//! templates and descriptor formats live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BuildSession, WorkspaceBuilder};

// Re-export port traits (for adapter implementation)
pub use ports::{BuildEvent, BuildReporter, Filesystem};

pub use error::ApplicationError;
