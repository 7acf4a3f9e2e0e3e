//! `crudy init` — scaffold a Go CRUD application.

use serde_json::json;
use tracing::{debug, info, instrument};

use crudy_adapters::{BuiltinLicenses, InMemoryStore, LocalFilesystem, MiniJinjaRenderer};
use crudy_core::prelude::*;

use crate::{
    cli::{global::OutputFormat, GlobalArgs, InitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Resolve the target project and write the generated sources into it.
#[instrument(skip_all, fields(args = args.paths.len()))]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config = apply_overrides(config, &args);
    let working_dir = std::env::current_dir()?;
    debug!(working_dir = %working_dir.display(), "Working directory");

    let service = build_service(&config)?;
    let project = service.resolve(&working_dir, args.paths.as_slice())?;
    info!(name = %project.name(), path = %project.abs_path().display(), "Project resolved");

    let report = service.materialize(&project)?;

    if output.format() == OutputFormat::Json {
        let files: Vec<String> = report
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect();
        output.json(&json!({
            "name": project.name(),
            "path": report.root.display().to_string(),
            "created": report.created_root,
            "files": files,
        }))?;
        return Ok(());
    }

    for file in &report.files {
        output.info(&format!("created {}", file.display()))?;
    }
    output.print(&ready_message(&project))?;
    Ok(())
}

/// Fold the per-invocation flags into the loaded configuration.
fn apply_overrides(mut config: AppConfig, args: &InitArgs) -> AppConfig {
    if let Some(author) = &args.author {
        config.scaffold.author = author.clone();
    }
    if let Some(license) = &args.license {
        config.scaffold.license = license.clone();
        config.scaffold.use_license = true;
    }
    if args.no_license {
        config.scaffold.use_license = false;
    }
    if let Some(dir) = &args.templates_dir {
        config.templates.local_path = Some(dir.clone());
    }
    config
}

fn build_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let licenses = BuiltinLicenses::new(config.scaffold.license.clone());
    if config.scaffold.use_license {
        licenses.validate()?;
    }

    let store = InMemoryStore::with_builtin()?;
    if let Some(dir) = &config.templates.local_path {
        let replaced = store.load_overrides(dir)?;
        debug!(dir = %dir.display(), replaced = ?replaced, "Template overrides loaded");
    }

    Ok(ScaffoldService::new(
        config.scaffold.clone(),
        Box::new(store),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(licenses),
    ))
}

fn ready_message(project: &Project) -> String {
    format!(
        "Your CRUD application is ready at\n{}\n\
         Give it a try by going there and running `go mod init {}` and then `go run .`.",
        project.abs_path().display(),
        project.name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> InitArgs {
        InitArgs {
            paths: Vec::new(),
            author: None,
            license: None,
            no_license: false,
            templates_dir: None,
        }
    }

    #[test]
    fn no_flags_keep_config() {
        let config = apply_overrides(AppConfig::default(), &args());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn license_flag_enables_license() {
        let mut base = AppConfig::default();
        base.scaffold.use_license = false;

        let config = apply_overrides(
            base,
            &InitArgs {
                license: Some("mit".into()),
                ..args()
            },
        );
        assert!(config.scaffold.use_license);
        assert_eq!(config.scaffold.license, "mit");
    }

    #[test]
    fn no_license_and_author_and_templates() {
        let config = apply_overrides(
            AppConfig::default(),
            &InitArgs {
                author: Some("Jane Doe".into()),
                no_license: true,
                templates_dir: Some(PathBuf::from("/tmp/tpl")),
                ..args()
            },
        );
        assert!(!config.scaffold.use_license);
        assert_eq!(config.scaffold.author, "Jane Doe");
        assert_eq!(config.templates.local_path, Some(PathBuf::from("/tmp/tpl")));
    }

    #[test]
    fn unknown_license_fails_before_anything_is_written() {
        let mut config = AppConfig::default();
        config.scaffold.license = "bogus".into();
        let err = build_service(&config).err().unwrap();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn ready_message_names_follow_up_commands() {
        let project = Project::new("github.com/u/shop", "/home/u/go/src/github.com/u/shop").unwrap();
        let msg = ready_message(&project);
        assert!(msg.starts_with("Your CRUD application is ready at\n/home/u/go/src/github.com/u/shop\n"));
        assert!(msg.contains("go mod init github.com/u/shop"));
        assert!(msg.contains("go run ."));
    }
}
