//! Application services - orchestrate use cases.
//!
//! The single use case is "generate a workspace"; `WorkspaceBuilder` owns the
//! adapters and `BuildSession` carries one run.

pub mod workspace_builder;

pub use workspace_builder::{BuildSession, UVM_INCDIR, UVM_LIB, UVM_PKG_FILE, WorkspaceBuilder};
