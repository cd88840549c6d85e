//! Error types for project scaffolding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A filesystem failure while copying the template tree.
///
/// Holds the template entry that was being processed when the copy aborted.
#[derive(Error, Debug)]
#[error("Failed to copy template entry '{}': {source}", .path.display())]
pub struct CopyError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl CopyError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Every way a scaffold operation can fail.
///
/// The first three variants are raised before anything is written to disk.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}'. Project name must be a valid directory name")]
    InvalidName { name: String },

    #[error("Directory '{}' already exists and is not empty", .path.display())]
    DestinationNotEmpty { path: PathBuf },

    #[error("Template directory not found at '{}'", .path.display())]
    TemplateMissing { path: PathBuf },

    #[error(
        "Project directory '{}' would be created inside the template '{}'",
        .path.display(),
        .template.display()
    )]
    DestinationInsideTemplate { path: PathBuf, template: PathBuf },

    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy template files: {0}")]
    CopyFailed(#[from] CopyError),
}

impl ScaffoldError {
    /// True when the failure happened before any filesystem mutation.
    pub fn is_pre_write(&self) -> bool {
        matches!(
            self,
            ScaffoldError::InvalidName { .. }
                | ScaffoldError::DestinationNotEmpty { .. }
                | ScaffoldError::TemplateMissing { .. }
                | ScaffoldError::DestinationInsideTemplate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_failed_includes_cause() {
        let err: ScaffoldError = CopyError::new(
            "template/src/index.ts",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        )
        .into();

        let message = err.to_string();
        assert!(message.contains("template/src/index.ts"));
        assert!(message.contains("access denied"));
        assert!(!err.is_pre_write());
    }

    #[test]
    fn test_validation_errors_are_pre_write() {
        let err = ScaffoldError::InvalidName {
            name: "my:app".to_string(),
        };
        assert!(err.is_pre_write());
        assert!(err.to_string().contains("my:app"));
    }
}
