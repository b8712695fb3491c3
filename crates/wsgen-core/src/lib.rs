//! wsgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the wsgen
//! verification workspace generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             wsgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │    (WorkspaceBuilder, BuildSession)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │       (Filesystem, BuildReporter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     wsgen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wsgen_core::prelude::*;
//!
//! let request = WorkspaceRequest::builder()
//!     .root_dir("/tmp")
//!     .workspace_name("ws1")
//!     .cores(["cpu"])
//!     .build()?;
//!
//! let builder = WorkspaceBuilder::new(filesystem, reporter);
//! let report = builder.execute(request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildSession, WorkspaceBuilder,
        ports::{BuildEvent, BuildReporter, Filesystem},
    };
    pub use crate::domain::{
        ComponentDescriptor, TemplateKind, TemplateVariant, WorkspaceLayout, WorkspaceReport,
        WorkspaceRequest,
    };
    pub use crate::error::{WsgenError, WsgenResult};
}
