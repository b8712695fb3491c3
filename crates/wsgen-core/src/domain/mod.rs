//! Core domain layer for wsgen.
//!
//! Pure data and rules: the workspace request, its layout, component
//! descriptors and the HDL templates. All I/O goes through the ports
//! defined in the application layer.
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No async**: Domain logic is synchronous
//! - **Immutable inputs**: `WorkspaceRequest` is frozen by its builder

pub mod entities;
pub mod error;
pub mod templates;
pub mod value_objects;

mod validation;

pub use entities::{
    descriptor::{COMPONENT_PREFIX, ComponentDescriptor, DESCRIPTOR_FILE, component_ref},
    layout::{CoreLayout, WorkspaceLayout},
    report::WorkspaceReport,
    request::{WorkspaceRequest, WorkspaceRequestBuilder},
};

pub use error::{DomainError, ErrorCategory};
pub use templates::{RenderContext, TemplateKind};
pub use validation::DomainValidator;
pub use value_objects::TemplateVariant;
