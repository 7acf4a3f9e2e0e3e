//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ScaffoldConfig`]
//! section, handed to it at construction time.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command handlers, not here)
//! 2. `CRUDY_*` environment variables, `__` between nesting levels
//!    (e.g. `CRUDY_SCAFFOLD__AUTHOR`, `CRUDY_TEMPLATES__LOCAL_PATH`)
//! 3. Config file (`--config FILE` or the platform config directory)
//! 4. Built-in defaults (always present)
//!
//! An empty `scaffold.source_root` is filled in from `$GOPATH/src` (first
//! entry) or `$HOME/go/src`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crudy_core::domain::ScaffoldConfig;

/// Prefix of the environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "CRUDY";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values baked into generated projects.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory with `<template>.tmpl` overrides.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file.map(PathBuf::as_path), env_source())
    }

    fn load_with(config_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let mut loaded: AppConfig = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration")?;

        if loaded.scaffold.source_root.as_os_str().is_empty() {
            if let Some(root) = default_source_root() {
                loaded.scaffold.source_root = root;
            }
        }

        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudy.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudy", "crudy")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudy.toml"))
    }

    /// Look up a dotted key such as `scaffold.database.port`.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, segment| node.get(segment))?;
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// `$GOPATH/src` for the first `GOPATH` entry, else `$HOME/go/src`.
pub fn default_source_root() -> Option<PathBuf> {
    let from_gopath = std::env::var_os("GOPATH").and_then(|gopath| {
        std::env::split_paths(&gopath).find(|p| !p.as_os_str().is_empty())
    });
    from_gopath
        .or_else(|| dirs::home_dir().map(|home| home.join("go")))
        .map(|root| root.join("src"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn defaults_match_generated_project_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scaffold.license, "apache-2.0");
        assert!(cfg.scaffold.use_license);
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(AppConfig::load_with(Some(&missing), env_with(&[])).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("crudy.toml");
        std::fs::write(
            &file,
            "[scaffold]\nauthor = \"Jane\"\nsource_root = \"/opt/go/src\"\n\n[scaffold.database]\nport = 5433\n",
        )
        .unwrap();

        let cfg = AppConfig::load_with(Some(&file), env_with(&[])).unwrap();
        assert_eq!(cfg.scaffold.author, "Jane");
        assert_eq!(cfg.scaffold.database.port, 5433);
        assert_eq!(cfg.scaffold.database.host, "localhost");
        assert_eq!(cfg.scaffold.source_root, PathBuf::from("/opt/go/src"));
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("crudy.toml");
        std::fs::write(&file, "[scaffold]\nauthor = \"Jane\"\n").unwrap();

        let env = env_with(&[
            ("CRUDY_SCAFFOLD__AUTHOR", "Env Author"),
            ("CRUDY_SCAFFOLD__USE_LICENSE", "false"),
            ("CRUDY_TEMPLATES__LOCAL_PATH", "/tmp/tpl"),
        ]);
        let cfg = AppConfig::load_with(Some(&file), env).unwrap();
        assert_eq!(cfg.scaffold.author, "Env Author");
        assert!(!cfg.scaffold.use_license);
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/tmp/tpl")));
    }

    #[test]
    fn get_reads_nested_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("scaffold.license").as_deref(), Some("apache-2.0"));
        assert_eq!(cfg.get("scaffold.database.port").as_deref(), Some("5432"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn default_toml_round_trips() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
