use std::path::Path;

use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_root(root: &Path) -> Result<(), DomainError> {
        if root.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "root directory",
            });
        }
        Ok(())
    }

    /// A name that becomes exactly one directory level below its parent.
    pub fn validate_name(field: &'static str, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field });
        }

        let invalid = |reason: &str| DomainError::InvalidName {
            field,
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.contains('/') || name.contains('\\') {
            return Err(invalid("contains a path separator"));
        }
        if name == "." || name == ".." {
            return Err(invalid("refers to a relative directory"));
        }
        Ok(())
    }
}
