//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudy-adapters` implement these.
//!
//! - `Filesystem`: directory inspection, creation and file writes
//! - `TemplateStore`: named template sources
//! - `TemplateRenderer`: template rendering
//! - `LicenseProvider`: license header lookup

pub mod output;

pub use output::{Filesystem, LicenseProvider, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockLicenseProvider, MockTemplateRenderer, MockTemplateStore};
