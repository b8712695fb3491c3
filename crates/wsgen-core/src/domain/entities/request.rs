//! The immutable input to a workspace build.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{DomainError, TemplateVariant, validation::DomainValidator as validator};

/// Everything the builder needs to generate one workspace.
///
/// Invariants (enforced by [`WorkspaceRequestBuilder::build`]):
/// - `root_dir` is non-empty.
/// - `workspace_name` is a single non-empty path component.
/// - every core name is a single non-empty path component.
///
/// `core_names` may be empty, in which case only the skeleton and the shared
/// library folder are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceRequest {
    root_dir: PathBuf,
    workspace_name: String,
    core_names: Vec<String>,
    purge_existing: bool,
    verbose: bool,
    variant: TemplateVariant,
}

impl WorkspaceRequest {
    pub fn builder() -> WorkspaceRequestBuilder {
        WorkspaceRequestBuilder::default()
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn workspace_name(&self) -> &str {
        &self.workspace_name
    }

    pub fn core_names(&self) -> &[String] {
        &self.core_names
    }

    pub const fn purge_existing(&self) -> bool {
        self.purge_existing
    }

    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    pub const fn variant(&self) -> TemplateVariant {
        self.variant
    }

    /// `<root>/<name>`, the directory that `execute` creates (and purges).
    pub fn workspace_path(&self) -> PathBuf {
        self.root_dir.join(&self.workspace_name)
    }

    /// Re-check the invariants before anything touches the filesystem.
    pub fn validate(&self) -> Result<(), DomainError> {
        validator::validate_root(&self.root_dir)?;
        validator::validate_name("workspace name", &self.workspace_name)?;
        for core in &self.core_names {
            validator::validate_name("core name", core)?;
        }
        Ok(())
    }
}

/// Fluent builder for [`WorkspaceRequest`].
#[derive(Debug, Clone, Default)]
pub struct WorkspaceRequestBuilder {
    root_dir: Option<PathBuf>,
    workspace_name: Option<String>,
    core_names: Vec<String>,
    purge_existing: bool,
    verbose: bool,
    variant: TemplateVariant,
}

impl WorkspaceRequestBuilder {
    pub fn root_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root.into());
        self
    }

    pub fn workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = Some(name.into());
        self
    }

    pub fn core(mut self, name: impl Into<String>) -> Self {
        self.core_names.push(name.into());
        self
    }

    pub fn cores<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn purge_existing(mut self, purge: bool) -> Self {
        self.purge_existing = purge;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn variant(mut self, variant: TemplateVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Validate and freeze the request.
    ///
    /// # Errors
    /// - `MissingRequiredField` when the root or the workspace name is
    ///   absent or empty.
    /// - `InvalidName` when a name is not a single path component.
    pub fn build(self) -> Result<WorkspaceRequest, DomainError> {
        let root_dir = self
            .root_dir
            .ok_or(DomainError::MissingRequiredField {
                field: "root directory",
            })?;
        let workspace_name = self
            .workspace_name
            .ok_or(DomainError::MissingRequiredField {
                field: "workspace name",
            })?;

        let request = WorkspaceRequest {
            root_dir,
            workspace_name,
            core_names: self.core_names,
            purge_existing: self.purge_existing,
            verbose: self.verbose,
            variant: self.variant,
        };
        request.validate()?;
        Ok(request)
    }
}
