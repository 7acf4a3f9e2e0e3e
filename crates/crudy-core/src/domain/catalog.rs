//! The fixed scaffold catalog.
//!
//! Each entry names a template, the path it is written to relative to the
//! project root, and the function that builds its render context. Order is
//! significant only for directory creation; no entry reads another's output.

use crate::domain::{
    config::ScaffoldConfig,
    entities::{common::RelativePath, Project, RenderContext},
    error::DomainError,
};

/// Inputs shared by every context builder.
#[derive(Debug, Clone, Copy)]
pub struct ContextInputs<'a> {
    pub project: &'a Project,
    pub config: &'a ScaffoldConfig,
    pub year: i32,
}

pub type ContextBuilder = fn(&ContextInputs<'_>) -> RenderContext;

/// One (template, destination, context builder) tuple.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub template: &'static str,
    pub destination: &'static str,
    build_context: ContextBuilder,
}

impl CatalogEntry {
    pub const fn new(
        template: &'static str,
        destination: &'static str,
        build_context: ContextBuilder,
    ) -> Self {
        Self {
            template,
            destination,
            build_context,
        }
    }

    pub fn destination(&self) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(self.destination)
    }

    pub fn context(&self, inputs: &ContextInputs<'_>) -> RenderContext {
        (self.build_context)(inputs)
    }
}

pub const MAIN: &str = "main";
pub const DB: &str = "db";
pub const CONFIG: &str = "config";
pub const ROUTER: &str = "router";
pub const MODEL_CONFIG: &str = "model_config";
pub const MODEL_ENV: &str = "model_env";

/// Every file `crudy init` writes, in write order.
pub static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry::new(MAIN, "main.go", main_context),
    CatalogEntry::new(DB, "db.go", model_context),
    CatalogEntry::new(CONFIG, "config.go", config_context),
    CatalogEntry::new(ROUTER, "router/router.go", model_context),
    CatalogEntry::new(MODEL_CONFIG, "model/config.go", base_context),
    CatalogEntry::new(MODEL_ENV, "model/env.go", base_context),
];

/// Template names in catalog order.
pub fn template_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.template)
}

/// `copyrightLine` always, `licenseHeader` only when the project carries one.
pub fn base_context(inputs: &ContextInputs<'_>) -> RenderContext {
    RenderContext::new()
        .with("copyrightLine", inputs.config.copyright_line(inputs.year))
        .with_optional("licenseHeader", inputs.project.license().header())
}

fn model_context(inputs: &ContextInputs<'_>) -> RenderContext {
    base_context(inputs).with("modelPackage", inputs.project.package_path("model"))
}

fn main_context(inputs: &ContextInputs<'_>) -> RenderContext {
    model_context(inputs)
        .with("appName", inputs.project.app_name())
        .with("routerPackage", inputs.project.package_path("router"))
        .with("listenAddr", inputs.config.listen_addr.as_str())
}

fn config_context(inputs: &ContextInputs<'_>) -> RenderContext {
    let db = &inputs.config.database;
    model_context(inputs)
        .with("envPrefix", inputs.config.env_prefix.trim())
        .with("defaultSecret", inputs.config.default_secret.as_str())
        .with("dbHost", db.host.as_str())
        .with("dbUser", db.user.as_str())
        .with("dbPassword", db.password.as_str())
        .with("dbName", db.name.as_str())
        .with("dbPort", db.port)
}
