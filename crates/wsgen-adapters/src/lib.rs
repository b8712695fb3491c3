//! Infrastructure adapters for wsgen.
//!
//! This crate implements the ports defined in `wsgen-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod reporter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{NullReporter, TracingReporter};
