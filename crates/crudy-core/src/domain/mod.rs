//! Core domain layer for crudy.
//!
//! Pure logic with no I/O: project identity resolution, the scaffold
//! catalog, render contexts and the options that shape them. Filesystem,
//! template storage and rendering are reached through the ports defined in
//! the application layer.

pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod resolver;

pub use catalog::{CATALOG, CatalogEntry, ContextInputs};
pub use config::{DatabaseDefaults, ScaffoldConfig};
pub use entities::{
    ContextValue, License, Project, RenderContext,
    common::{RelativePath, normalize},
};
pub use error::{DomainError, ErrorCategory};
pub use resolver::ProjectResolver;
