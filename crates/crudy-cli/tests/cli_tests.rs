//! End-to-end tests for the `crudy` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GENERATED: [&str; 6] = [
    "main.go",
    "db.go",
    "config.go",
    "router/router.go",
    "model/config.go",
    "model/env.go",
];

/// An isolated environment: empty config file, no inherited crudy variables.
struct Sandbox {
    _config_dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let config_dir = TempDir::new().unwrap();
        let config = config_dir.path().join("config.toml");
        fs::write(&config, "").unwrap();
        Self {
            _config_dir: config_dir,
            config,
        }
    }

    fn crudy(&self, cwd: &Path) -> Command {
        let mut cmd = Command::cargo_bin("crudy").unwrap();
        cmd.current_dir(cwd)
            .arg("--config")
            .arg(&self.config)
            .env_remove("RUST_LOG")
            .env_remove("CRUDY_SCAFFOLD__AUTHOR")
            .env_remove("CRUDY_SCAFFOLD__USE_LICENSE")
            .env_remove("CRUDY_SCAFFOLD__LICENSE")
            .env_remove("CRUDY_SCAFFOLD__SOURCE_ROOT")
            .env_remove("CRUDY_SCAFFOLD__ENV_PREFIX")
            .env_remove("CRUDY_OUTPUT__FORMAT")
            .env_remove("CRUDY_TEMPLATES__LOCAL_PATH");
        cmd
    }
}

fn assert_generated(root: &Path) {
    for file in GENERATED {
        assert!(root.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn help_lists_init() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();
    sandbox
        .crudy(cwd.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"));
}

#[test]
fn init_without_argument_fills_working_directory() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your CRUD application is ready at"))
        .stdout(predicate::str::contains("go run ."));

    assert_generated(cwd.path());
    let main = fs::read_to_string(cwd.path().join("main.go")).unwrap();
    assert!(main.contains("package main"));
    assert!(main.contains("Licensed under the Apache License"));
}

#[test]
fn create_alias_with_relative_path() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["create", "./newapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newapp"));

    assert_generated(&cwd.path().join("newapp"));
}

#[test]
fn more_than_one_argument_is_rejected() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["init", "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("only one argument"));

    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn non_empty_directory_is_left_alone() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("README.md"), "keep me").unwrap();

    sandbox
        .crudy(cwd.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-empty directory"));

    assert!(!cwd.path().join("main.go").exists());
    assert_eq!(
        fs::read_to_string(cwd.path().join("README.md")).unwrap(),
        "keep me"
    );
}

#[test]
fn package_path_lands_in_gopath() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();
    let gopath = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .env("GOPATH", gopath.path())
        .args(["init", "github.com/u/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go mod init github.com/u/app"));

    let root = gopath.path().join("src/github.com/u/app");
    assert_generated(&root);
    let main = fs::read_to_string(root.join("main.go")).unwrap();
    assert!(main.contains("\"github.com/u/app/model\""));
    assert!(main.contains("\"github.com/u/app/router\""));
}

#[test]
fn license_flag_selects_header() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["init", "--license", "mit", "--author", "Jane Doe"])
        .assert()
        .success();

    let db = fs::read_to_string(cwd.path().join("db.go")).unwrap();
    assert!(db.contains("Jane Doe"));
    assert!(db.contains("Permission is hereby granted"));
}

#[test]
fn no_license_flag_omits_header() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["init", "--no-license"])
        .assert()
        .success();

    let main = fs::read_to_string(cwd.path().join("main.go")).unwrap();
    assert!(main.starts_with("// Copyright"));
    assert!(!main.contains("Apache License"));
}

#[test]
fn unknown_license_is_a_configuration_error() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["init", "--license", "bogus"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("bogus"));

    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn no_color_env_follows_convention() {
    for value in ["1", "", "true", "0"] {
        let sandbox = Sandbox::new();
        let cwd = TempDir::new().unwrap();

        sandbox
            .crudy(cwd.path())
            .env("NO_COLOR", value)
            .args(["init", "./app"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Your CRUD application is ready at"))
            .stdout(predicate::str::contains("\u{1b}[").not());

        assert_generated(&cwd.path().join("app"));
    }
}

#[test]
fn blank_env_prefix_is_a_configuration_error() {
    let sandbox = Sandbox::new();
    fs::write(&sandbox.config, "[scaffold]\nenv_prefix = \"\"\n").unwrap();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["init", "./app"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("env_prefix"));

    assert!(!cwd.path().join("app").exists());
}

#[test]
fn json_output_lists_files() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    let out = sandbox
        .crudy(cwd.path())
        .args(["--output-format", "json", "init", "./svc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["name"], "svc");
    assert_eq!(doc["files"].as_array().unwrap().len(), 6);
    assert!(doc["path"].as_str().unwrap().ends_with("svc"));
}

#[test]
fn templates_dir_overrides_builtin() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    fs::write(
        templates.path().join("main.tmpl"),
        "// custom entry point for {{ appName }}\npackage main\n",
    )
    .unwrap();

    sandbox
        .crudy(cwd.path())
        .arg("init")
        .arg("./custom")
        .arg("--templates-dir")
        .arg(templates.path())
        .assert()
        .success();

    let main = fs::read_to_string(cwd.path().join("custom/main.go")).unwrap();
    assert!(main.starts_with("// custom entry point for custom"));
    assert!(cwd.path().join("custom/db.go").is_file());
}

#[test]
fn config_get_prints_value() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["config", "get", "scaffold.license"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apache-2.0"));
}

#[test]
fn config_get_unknown_key_fails() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4);
}

#[test]
fn config_path_reports_explicit_file() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn missing_config_file_exits_four() {
    let cwd = TempDir::new().unwrap();
    Command::cargo_bin("crudy")
        .unwrap()
        .current_dir(cwd.path())
        .args(["--config", "/definitely/not/here.toml", "init"])
        .assert()
        .code(4);
}

#[test]
fn completions_bash() {
    let sandbox = Sandbox::new();
    let cwd = TempDir::new().unwrap();

    sandbox
        .crudy(cwd.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudy"));
}
