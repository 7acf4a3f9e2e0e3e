//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crudy_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::{CrudyError, CrudyResult},
};

use crate::builtin_templates;

/// File extension of override templates.
pub const OVERRIDE_EXTENSION: &str = "tmpl";

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> CrudyResult<Self> {
        let store = Self::new();
        for (name, source) in builtin_templates::all() {
            store.insert(name, source)?;
        }
        Ok(store)
    }

    /// Register (or replace) the template called `name`.
    pub fn insert(&self, name: impl Into<String>, source: impl Into<String>) -> CrudyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), source.into());
        Ok(())
    }

    /// Replace built-in templates with `<name>.tmpl` files found in `dir`.
    ///
    /// Only the top level of `dir` is scanned. Files whose stem is not an
    /// already registered template are skipped with a warning. Returns the
    /// names that were overridden.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn load_overrides(&self, dir: &Path) -> CrudyResult<Vec<String>> {
        if !dir.is_dir() {
            return Err(CrudyError::configuration(format!(
                "templates directory not found: {}",
                dir.display()
            )));
        }

        let known = self.names();
        let mut overridden = Vec::new();

        for walk_entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;
            let path = walk_entry.path();

            if !walk_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(OVERRIDE_EXTENSION)
            {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !known.iter().any(|k| k == name) {
                warn!(file = %path.display(), "ignoring override for unknown template");
                continue;
            }

            let source = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read template: {e}"),
            })?;
            self.insert(name, source)?;
            debug!(template = name, "template overridden");
            overridden.push(name.to_string());
        }

        info!(count = overridden.len(), "template overrides loaded");
        Ok(overridden)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn source(&self, name: &str) -> CrudyResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(name)
            .cloned()
            .ok_or_else(|| ApplicationError::render_failed(name, "unknown template").into())
    }

    fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.keys().cloned().collect())
            .unwrap_or_default()
    }
}
