//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged in [`AppConfig::run_parameters`])
//! 2. `STENCIL_*` environment variables, `__` between key segments
//!    (`STENCIL_DEFAULTS__REPO=Widget`)
//! 3. Config file: `--config FILE`, else the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stencil_core::domain::{
    DEFAULT_DESCRIPTION, DEFAULT_REPO_NAME, DEFAULT_REPO_PATH, RunParameters,
};

use crate::cli::ProjectArgs;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback values for the project parameters.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub repo: String,
    pub description: String,
    pub repo_path: String,
    pub output_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO_NAME.into(),
            description: DEFAULT_DESCRIPTION.into(),
            repo_path: DEFAULT_REPO_PATH.into(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path passed via `--config`. An explicit file must
    /// exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file.map(PathBuf::as_path), None)
    }

    /// Like [`Self::load`], reading environment overrides from `env` instead
    /// of the process environment when given.
    fn load_with(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
            )
            .add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Merge CLI flags over the configured defaults.
    pub fn run_parameters(&self, args: &ProjectArgs) -> RunParameters {
        RunParameters::new(
            args.repo.as_deref().unwrap_or(&self.defaults.repo),
            args.desc.as_deref().unwrap_or(&self.defaults.description),
            args.repo_path.as_deref().unwrap_or(&self.defaults.repo_path),
        )
    }

    /// Directory the project is generated into.
    pub fn output_dir(&self, args: &ProjectArgs) -> PathBuf {
        args.output
            .clone()
            .unwrap_or_else(|| self.defaults.output_dir.clone())
    }
}
