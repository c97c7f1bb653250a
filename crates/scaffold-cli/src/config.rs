//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the
//! [`WorkspaceLayout`] part of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SCAFFOLD__<SECTION>__<KEY>`, e.g.
//!    `SCAFFOLD__REGISTRAR__PROGRAM=go1.25`
//! 3. `--config FILE` (must exist when given)
//! 4. User config file (`config.toml` in the platform config dir, optional)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use scaffold_adapters::registrar::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use scaffold_core::domain::WorkspaceLayout;

const ENV_PREFIX: &str = "SCAFFOLD";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace conventions (marker file, template location, tokens...).
    pub layout: WorkspaceLayout,
    /// External workspace-registration command.
    pub registrar: RegistrarConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// `<program> <args...> ./apps/<name>` is run from the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering sources over the built-in defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it is
    /// required to exist, unlike the user config file.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(Self::config_path().as_deref(), config_file)
    }

    fn load_from(user_file: Option<&Path>, config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialize built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = user_file {
            debug!(path = %path.display(), "User config file (optional)");
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = config_file {
            debug!(path = %path.display(), "Config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .list_separator(" ")
                .with_list_parse_key("registrar.args"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "scaffold", "scaffold")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
