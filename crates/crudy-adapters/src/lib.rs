//! Infrastructure adapters for crudy.
//!
//! This crate implements the ports defined in `crudy-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod license;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use license::BuiltinLicenses;
pub use renderer::MiniJinjaRenderer;
pub use template_store::InMemoryStore;
