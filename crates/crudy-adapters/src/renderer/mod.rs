//! Template renderer adapters.

mod filters;
mod jinja;

pub use filters::comment;
pub use jinja::MiniJinjaRenderer;
