//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `wsgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `BuildReporter`: Progress events (the injected logger)

pub mod output;

pub use output::{BuildEvent, BuildReporter, Filesystem};

#[cfg(test)]
pub use output::{MockBuildReporter, MockFilesystem};
