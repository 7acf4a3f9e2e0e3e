//! Application layer for crudy.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Resolution rules and the catalog live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{MaterializeReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LicenseProvider, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
