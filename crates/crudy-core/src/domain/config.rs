//! Scaffold options.
//!
//! Everything the resolver and the materializer need to know about the
//! environment is carried here and passed in at construction time. The core
//! never reads environment variables or configuration files itself; the CLI
//! builds this struct and hands it over.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CrudyError, CrudyResult};

/// Default author placed in the copyright line.
pub const DEFAULT_AUTHOR: &str = "NAME HERE <EMAIL ADDRESS>";

/// Options that shape one scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Name in the copyright line.
    pub author: String,
    /// When false, no license block is emitted regardless of `license`.
    pub use_license: bool,
    /// License identifier handed to the license provider.
    pub license: String,
    /// Fallback value of `PREFIX_SECRET` in the generated config loader.
    pub default_secret: String,
    /// Prefix for environment variables read by the generated application.
    pub env_prefix: String,
    /// Address the generated router listens on.
    pub listen_addr: String,
    /// Root under which bare package names are placed (`$GOPATH/src`).
    pub source_root: PathBuf,
    /// Connection defaults baked into the generated config loader.
    pub database: DatabaseDefaults,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.into(),
            use_license: true,
            license: "apache-2.0".into(),
            default_secret: "generatecode".into(),
            env_prefix: "prefix".into(),
            listen_addr: ":2323".into(),
            source_root: PathBuf::new(),
            database: DatabaseDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseDefaults {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
}

impl Default for DatabaseDefaults {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            user: "user".into(),
            password: "password".into(),
            name: "sample".into(),
            port: 5432,
        }
    }
}

impl ScaffoldConfig {
    /// Copyright line for files generated in `year`.
    pub fn copyright_line(&self, year: i32) -> String {
        let author = self.author.trim();
        let author = if author.is_empty() { DEFAULT_AUTHOR } else { author };
        format!("Copyright © {year} {author}")
    }

    /// Reject values that would produce a broken Go project.
    ///
    /// `env_prefix` becomes the head of every generated environment variable
    /// name, so it must be a non-empty identifier.
    pub fn validate(&self) -> CrudyResult<()> {
        let prefix = self.env_prefix.trim();
        if prefix.is_empty() {
            return Err(CrudyError::configuration("scaffold.env_prefix must not be empty"));
        }
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CrudyError::configuration(format!(
                "scaffold.env_prefix '{prefix}' may only contain letters, digits and '_'"
            )));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(CrudyError::configuration("scaffold.listen_addr must not be empty"));
        }
        Ok(())
    }
}
