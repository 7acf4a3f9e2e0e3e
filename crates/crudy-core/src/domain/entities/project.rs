use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// License attached to a project.
///
/// Opaque to the core: the header text, when present, is copied into the
/// generated files as a comment block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct License {
    name: String,
    header: Option<String>,
}

impl License {
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: Some(header.into()),
        }
    }

    /// No license block in generated files.
    pub fn none() -> Self {
        Self {
            name: "none".into(),
            header: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn is_present(&self) -> bool {
        self.header().is_some()
    }
}

/// The resolved identity of one scaffolding invocation.
///
/// Immutable: the only way to change a field is to build a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    abs_path: PathBuf,
    license: License,
}

impl Project {
    pub fn new(name: impl Into<String>, abs_path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let name = name.into();
        let abs_path = abs_path.into();

        if name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if !abs_path.is_absolute() {
            return Err(DomainError::invalid_argument(format!(
                "project path '{}' is not absolute",
                abs_path.display()
            )));
        }

        Ok(Self {
            name,
            abs_path,
            license: License::none(),
        })
    }

    /// Same project with a different license.
    pub fn with_license(self, license: License) -> Self {
        Self { license, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    pub fn license(&self) -> &License {
        &self.license
    }

    /// Final segment of the logical name, used as the application name.
    pub fn app_name(&self) -> &str {
        self.name
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.name)
    }

    /// Import path of a sub-package, e.g. `github.com/u/app/model`.
    pub fn package_path(&self, package: &str) -> String {
        format!("{}/{}", self.name.trim_end_matches('/'), package)
    }
}
