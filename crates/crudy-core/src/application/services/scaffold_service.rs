//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the project identity and attach its license
//! 2. Validate (or create) the project root
//! 3. Render every catalog template and write it below the root
//!
//! There is no rollback: if a write fails halfway through the catalog, the
//! files written so far stay on disk and the error says which file failed.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LicenseProvider, TemplateRenderer, TemplateStore},
    },
    domain::{CATALOG, CatalogEntry, ContextInputs, Project, ProjectResolver, ScaffoldConfig},
    error::CrudyResult,
};

/// What a successful materialization produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Project root.
    pub root: PathBuf,
    /// Whether the root had to be created.
    pub created_root: bool,
    /// Absolute paths of the written files, in write order.
    pub files: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    config: ScaffoldConfig,
    resolver: ProjectResolver,
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    licenses: Box<dyn LicenseProvider>,
    year: i32,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given options and adapters.
    pub fn new(
        config: ScaffoldConfig,
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        licenses: Box<dyn LicenseProvider>,
    ) -> Self {
        Self {
            resolver: ProjectResolver::from_config(&config),
            config,
            store,
            renderer,
            filesystem,
            licenses,
            year: chrono::Local::now().year(),
        }
    }

    /// Pin the year used in copyright lines.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Resolve the project for `working_dir` and `args`, license included.
    ///
    /// Never touches the filesystem.
    #[instrument(skip_all, fields(working_dir = %working_dir.display(), args = args.len()))]
    pub fn resolve<S: AsRef<str>>(&self, working_dir: &Path, args: &[S]) -> CrudyResult<Project> {
        let project = self.resolver.resolve(working_dir, args)?;

        if !self.config.use_license {
            debug!("License disabled by configuration");
            return Ok(project);
        }

        let license = self.licenses.license_for(&project)?;
        debug!(license = %license.name(), present = license.is_present(), "License resolved");
        Ok(project.with_license(license))
    }

    /// Write the whole catalog below `project`'s root.
    #[instrument(skip_all, fields(project = %project.name(), path = %project.abs_path().display()))]
    pub fn materialize(&self, project: &Project) -> CrudyResult<MaterializeReport> {
        self.config.validate()?;

        let root = project.abs_path();
        let created_root = self.prepare_root(root)?;

        let inputs = ContextInputs {
            project,
            config: &self.config,
            year: self.year,
        };

        let mut files = Vec::with_capacity(CATALOG.len());
        for entry in &CATALOG {
            files.push(self.write_entry(entry, &inputs, root)?);
        }

        info!(files = files.len(), "Scaffold completed successfully");
        Ok(MaterializeReport {
            root: root.to_path_buf(),
            created_root,
            files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create a missing root, accept an empty one, refuse anything else.
    ///
    /// Returns whether the root was created.
    fn prepare_root(&self, root: &Path) -> CrudyResult<bool> {
        if !self.filesystem.exists(root) {
            self.filesystem.create_dir_all(root)?;
            info!(path = %root.display(), "Created project directory");
            return Ok(true);
        }

        if !self.filesystem.is_empty_dir(root)? {
            return Err(ApplicationError::TargetNotEmpty {
                path: root.to_path_buf(),
            }
            .into());
        }

        debug!(path = %root.display(), "Reusing empty project directory");
        Ok(false)
    }

    /// Render one catalog entry and write it. Returns the written path.
    fn write_entry(
        &self,
        entry: &CatalogEntry,
        inputs: &ContextInputs<'_>,
        root: &Path,
    ) -> CrudyResult<PathBuf> {
        let destination = entry.destination()?;
        let context = entry.context(inputs);
        let source = self.store.source(entry.template)?;
        let content = self.renderer.render(entry.template, &source, &context)?;

        let path = destination.under(root);
        if let Some(parent) = path.parent() {
            if parent != root && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(&path, &content)?;
        debug!(template = entry.template, path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(path)
    }
}
