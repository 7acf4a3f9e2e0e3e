//! Project identity resolution.
//!
//! Turns a working directory plus the positional arguments of `crudy init`
//! into a [`Project`]. Pure: no existence checks, no symlink resolution.
//!
//! | Argument               | Root                         | Name              |
//! |------------------------|------------------------------|-------------------|
//! | (none)                 | working directory            | last segment      |
//! | `.` / `./app` / `.app` | working directory + argument | last segment      |
//! | `/abs/app`             | the argument                 | last segment      |
//! | `github.com/u/app`     | source root + argument       | argument verbatim |

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{
    config::ScaffoldConfig,
    entities::common::{last_segment, normalize},
    entities::Project,
    error::DomainError,
};

/// Resolves project identities against a configured source root.
#[derive(Debug, Clone)]
pub struct ProjectResolver {
    source_root: PathBuf,
}

impl ProjectResolver {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(config.source_root.clone())
    }

    /// Resolve `args` (zero or one positional argument) against `working_dir`.
    pub fn resolve<S: AsRef<str>>(
        &self,
        working_dir: &Path,
        args: &[S],
    ) -> Result<Project, DomainError> {
        let arg = match args {
            [] => None,
            [one] => Some(one.as_ref()),
            _ => {
                return Err(DomainError::invalid_argument(format!(
                    "please provide only one argument (got {})",
                    args.len()
                )));
            }
        };

        let project = match arg {
            None => from_path(&normalize(absolute(working_dir)?))?,
            Some("") => return Err(DomainError::invalid_argument("argument cannot be empty")),
            Some(arg) if arg.starts_with('.') => {
                from_path(&normalize(&absolute(working_dir)?.join(arg)))?
            }
            Some(arg) if Path::new(arg).is_absolute() => from_path(&normalize(Path::new(arg)))?,
            Some(arg) => self.from_package(arg)?,
        };

        debug!(
            name = %project.name(),
            path = %project.abs_path().display(),
            "Project resolved"
        );
        Ok(project)
    }

    /// A bare package name lives below the source root and keeps its name verbatim.
    fn from_package(&self, package: &str) -> Result<Project, DomainError> {
        if !self.source_root.is_absolute() {
            return Err(DomainError::invalid_argument(format!(
                "cannot place package '{package}': no absolute source root configured"
            )));
        }
        let abs_path = normalize(&self.source_root.join(package));
        if !abs_path.starts_with(&self.source_root) {
            return Err(DomainError::invalid_argument(format!(
                "package '{package}' points outside of {}",
                self.source_root.display()
            )));
        }
        Project::new(package, abs_path)
    }
}

/// Only rules that build on the working directory require it to be absolute.
fn absolute(working_dir: &Path) -> Result<&Path, DomainError> {
    if working_dir.is_absolute() {
        Ok(working_dir)
    } else {
        Err(DomainError::invalid_argument(format!(
            "working directory '{}' is not absolute",
            working_dir.display()
        )))
    }
}

fn from_path(abs_path: &Path) -> Result<Project, DomainError> {
    let name = last_segment(abs_path).ok_or_else(|| {
        DomainError::invalid_argument(format!(
            "cannot derive a project name from '{}'",
            abs_path.display()
        ))
    })?;
    Project::new(name, abs_path)
}
