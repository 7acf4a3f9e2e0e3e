//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudy",
    bin_name = "crudy",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold CRUD web applications",
    long_about = "crudy generates the skeleton of a CRUD web service in Go: entry point, \
                  configuration loader, database bootstrap, router and model stubs.",
    after_help = "EXAMPLES:\n\
        \x20 crudy init\n\
        \x20 crudy init ./inventory\n\
        \x20 crudy init github.com/you/inventory --license mit\n\
        \x20 crudy completions bash > /usr/share/bash-completion/completions/crudy",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a CRUD application.
    #[command(
        visible_aliases = ["initiale", "initialise", "create"],
        about = "Initialize a CRUD application",
        long_about = "Initialize (crudy init) creates a new application with a license \
                      header and the layout of a CRUD service.\n\n\
                      \x20 * If no argument is given, the current directory is used.\n\
                      \x20 * If the argument starts with '.', it is created relative to the current directory.\n\
                      \x20 * If an absolute path is given, it is created there.\n\
                      \x20 * Otherwise the argument is a package path created inside $GOPATH/src\n\
                      \x20   (e.g. github.com/you/inventory).\n\
                      \x20 * An existing empty directory is reused.\n\n\
                      Init never writes into a directory that already has contents.",
        after_help = "EXAMPLES:\n\
            \x20 crudy init\n\
            \x20 crudy init ./inventory\n\
            \x20 crudy init /srv/inventory --no-license\n\
            \x20 crudy init github.com/you/inventory --author \"You <you@example.com>\""
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudy completions bash > ~/.local/share/bash-completion/completions/crudy\n\
            \x20 crudy completions zsh  > ~/.zfunc/_crudy\n\
            \x20 crudy completions fish > ~/.config/fish/completions/crudy.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crudy configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudy config get scaffold.author\n\
            \x20 crudy config list\n\
            \x20 crudy config init"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudy init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory or package path. At most one is accepted.
    #[arg(value_name = "PATH", help = "Directory or package path (default: current directory)")]
    pub paths: Vec<String>,

    /// Name in the copyright line.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "AUTHOR",
        help = "Author name for the copyright line"
    )]
    pub author: Option<String>,

    /// License header to emit.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        conflicts_with = "no_license",
        help = "License header (apache-2.0, mit, gpl-3.0, none)"
    )]
    pub license: Option<String>,

    /// Do not emit a license header.
    #[arg(long = "no-license", help = "Skip the license header")]
    pub no_license: bool,

    /// Directory with `<template>.tmpl` overrides.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory with template overrides"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudy completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudy config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
