//! Application layer errors.
//!
//! These errors represent failures while materializing a scaffold, not
//! resolution rules. Resolution errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold materialization.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The project root was absent and could not be created.
    #[error("Failed to create directory {path}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// The project root already holds files.
    #[error("Refusing to scaffold into non-empty directory {path}")]
    TargetNotEmpty { path: PathBuf },

    /// A catalog template could not be found or rendered.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRenderFailed { template: String, reason: String },

    /// A rendered file could not be written.
    #[error("Failed to write file {path}")]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// The target could not be inspected.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn directory_create_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryCreateFailed {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn file_write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWriteFailed {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn render_failed(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TemplateRenderFailed {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreateFailed { path, source } => vec![
                format!("Could not create {}: {}", path.display(), source),
                "Check that you have write permissions on the parent directory".into(),
            ],
            Self::TargetNotEmpty { path } => vec![
                format!("'{}' already contains files", path.display()),
                "crudy only scaffolds into empty or missing directories".into(),
                "Choose a different path or empty the directory first".into(),
            ],
            Self::TemplateRenderFailed { template, .. } => vec![
                format!("Template '{}' is broken", template),
                "If you use a templates directory, check your override file".into(),
            ],
            Self::FileWriteFailed { path, source } => vec![
                format!("Could not write {}: {}", path.display(), source),
                "Check file permissions".into(),
                "Check available disk space".into(),
                "Files written before this one were left in place".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::StoreLockError => vec!["Internal state was poisoned; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetNotEmpty { .. } => ErrorCategory::Validation,
            Self::DirectoryCreateFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::TemplateRenderFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn write_failure_keeps_io_cause() {
        let err = ApplicationError::file_write_failed(
            "/tmp/app/main.go",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io cause");
        assert_eq!(source.to_string(), "denied");
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn target_not_empty_is_validation() {
        let err = ApplicationError::TargetNotEmpty {
            path: PathBuf::from("/tmp/app"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("/tmp/app"));
    }
}
