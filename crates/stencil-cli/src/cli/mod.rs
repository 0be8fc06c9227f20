//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.
//!
//! There are no subcommands: a bare `stencil` generates the project with the
//! default parameters, and the informational modes are plain flags.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a Go API project skeleton",
    long_about = "Stencil writes a fixed Go API project layout (server, api, \
                  users, validator, tests, Makefile, .envrc) into the current \
                  directory, filling in the repository name, description and \
                  module path.",
    after_help = "EXAMPLES:\n\
        \x20 stencil\n\
        \x20 stencil --repo Widget --desc \"Widgets as a service\" --repo-path github.com/acme/widget\n\
        \x20 stencil --repo Widget -o ./widget --dry-run\n\
        \x20 stencil --list-templates\n\
        \x20 stencil --completions bash > ~/.local/share/bash-completion/completions/stencil",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub mode: ModeArgs,
}

// ── Project parameters ────────────────────────────────────────────────────────

/// Values substituted into every template.
///
/// Each is optional here; unset values fall back to the configuration file,
/// then to the built-in defaults.
#[derive(Debug, Default, Args)]
pub struct ProjectArgs {
    /// Repository name. Also names the `cmd/<name>` directory.
    #[arg(
        long = "repo",
        value_name = "NAME",
        help = "Name of the repository [default: MyProject]"
    )]
    pub repo: Option<String>,

    /// Project description.
    #[arg(
        long = "desc",
        value_name = "TEXT",
        help = "Description of the project [default: A sample project structure created by Go CLI]"
    )]
    pub desc: Option<String>,

    /// Go module path.
    #[arg(
        long = "repo-path",
        value_name = "PATH",
        help = "Path of the repository [default: github.com/yourusername/yourrepo]"
    )]
    pub repo_path: Option<String>,

    /// Directory to generate into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// What to do instead of, or in addition to, a plain generation run.
#[derive(Debug, Default, Args)]
pub struct ModeArgs {
    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Fail the run when any file could not be written.
    #[arg(
        long = "strict",
        conflicts_with = "dry_run",
        help = "Exit with status 1 if any file failed"
    )]
    pub strict: bool,

    /// Print the built-in catalog and exit.
    #[arg(
        long = "list-templates",
        conflicts_with_all = ["dry_run", "strict"],
        help = "List the files and templates that would be generated"
    )]
    pub list_templates: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with_all = ["dry_run", "strict", "list_templates"],
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
