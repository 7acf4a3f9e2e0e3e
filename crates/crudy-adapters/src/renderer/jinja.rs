//! MiniJinja-based template renderer.

use minijinja::{Environment, UndefinedBehavior};
use tracing::{instrument, trace};

use crudy_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::CrudyResult,
};

use super::filters;

/// Renders template sources with MiniJinja.
///
/// Undefined keys are errors, so optional blocks must be guarded with
/// `{% if key is defined %}`. Block tags swallow their own line, and a
/// trailing newline in the source is kept.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        filters::register_filters(&mut env);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, source, context), fields(keys = context.len()))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> CrudyResult<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|e| ApplicationError::render_failed(name, e.to_string()))?;

        let template = env
            .get_template(name)
            .map_err(|e| ApplicationError::render_failed(name, e.to_string()))?;

        let rendered = template
            .render(context)
            .map_err(|e| ApplicationError::render_failed(name, e.to_string()))?;

        trace!(bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}
