pub mod common;
pub mod context;
pub mod project;

pub use crate::domain::DomainError;
pub use context::{ContextValue, RenderContext};
pub use project::{License, Project};
