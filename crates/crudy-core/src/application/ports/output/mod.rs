//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudy-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{License, Project, RenderContext};
use crate::error::CrudyResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudy_adapters::filesystem::LocalFilesystem` (production)
/// - `crudy_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// `true` only for an existing directory with zero entries.
    fn is_empty_dir(&self, path: &Path) -> CrudyResult<bool>;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> CrudyResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> CrudyResult<()>;
}

/// Port for named template sources.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Source text of the template registered under `name`.
    fn source(&self, name: &str) -> CrudyResult<String>;

    /// Names of all registered templates.
    fn names(&self) -> Vec<String>;
}

/// Port for template rendering.
///
/// Implementations must be pure: the same source and context always yield
/// the same output.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` (registered as `name` for diagnostics) against `context`.
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> CrudyResult<String>;
}

/// Port for license lookup.
#[cfg_attr(test, mockall::automock)]
pub trait LicenseProvider: Send + Sync {
    /// License to attach to `project`. [`License::none`] means "omit".
    fn license_for(&self, project: &Project) -> CrudyResult<License>;
}
