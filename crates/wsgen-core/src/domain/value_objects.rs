use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::DomainError;

// ── TemplateVariant ───────────────────────────────────────────────────────────

/// Which flavour of boilerplate to emit.
///
/// `Basic` writes bare design and testbench stubs with empty descriptor
/// options. `Framework` wires the testbench into the UVM test-phase runner,
/// emits a companion test class next to the environment package, and
/// defaults empty descriptor options to an include path for the component
/// directory.
///
/// Deserialising goes through [`FromStr`], so settings files accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Basic,
    Framework,
}

impl TemplateVariant {
    pub const ALL: [Self; 2] = [Self::Basic, Self::Framework];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Framework => "framework",
        }
    }

    /// Whether this variant emits the verification-framework test class.
    pub const fn emits_test_class(self) -> bool {
        matches!(self, Self::Framework)
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "framework" | "uvm" => Ok(Self::Framework),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TemplateVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
