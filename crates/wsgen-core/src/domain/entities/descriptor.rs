use std::fmt;
use std::path::Path;

use serde::Serialize;

/// File name every component directory carries its descriptor under.
pub const DESCRIPTOR_FILE: &str = "comp.yml";

/// Prefix applied to component names in descriptors and `requires` lists.
pub const COMPONENT_PREFIX: &str = "comp_";

/// A build-component manifest.
///
/// Serialised by [`fmt::Display`] into a fixed four-line layout whose key
/// order never changes:
///
/// ```text
/// name: comp_<name>
/// files: [a.v,b.sv]
/// options: []
/// requires: [comp_uvm]
/// ```
///
/// Lists are joined with `,` and no padding; an unset list renders as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub files: Vec<String>,
    pub requires: Vec<String>,
    pub options: Vec<String>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// The name other descriptors use to depend on this one.
    pub fn component_name(&self) -> String {
        component_ref(&self.name)
    }

    /// Include-path flag pointing at `dir`.
    pub fn include_dir_option(dir: &Path) -> String {
        format!("\"+incdir+{}\"", dir.display())
    }
}

/// `comp_<name>`: how a descriptor is referenced from a `requires` list.
pub fn component_ref(name: &str) -> String {
    format!("{COMPONENT_PREFIX}{name}")
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.component_name())?;
        writeln!(f, "files: [{}]", self.files.join(","))?;
        writeln!(f, "options: [{}]", self.options.join(","))?;
        writeln!(f, "requires: [{}]", self.requires.join(","))
    }
}
