//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! `InstallContext` built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HEX_*` environment variables, `__` between sections (`HEX_APP__NAME`)
//! 3. `APP_NAME` from the process environment or the project's `.env`
//! 4. Config file: `--config FILE`, else `<base>/hexagonal.toml` if present
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "hexagonal.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub stubs: StubsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Project name written into the context documents.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Directory of stubs that replaces the bundled set.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project at `base`.
    pub fn load(base: &Path, config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(base, config_file, None)
    }

    /// Like [`Self::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        base: &Path,
        config_file: Option<&PathBuf>,
        env: Option<Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let path = Self::config_path(base, config_file);
        debug!(path = %path.display(), explicit = config_file.is_some(), "Loading configuration");

        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(path.as_path()).required(config_file.is_some()));

        if let Some(name) = laravel_app_name(base, env.as_ref()) {
            builder = builder.add_source(
                Environment::default()
                    .separator("__")
                    .source(Some(Map::from_iter([("APP__NAME".to_owned(), name)]))),
            );
        }

        let mut config: AppConfig = builder
            .add_source(
                Environment::with_prefix("HEX")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")?;

        if config.app.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            config.app.name = None;
        }
        if let Some(stubs) = config.stubs.path.take() {
            config.stubs.path = Some(base.join(stubs));
        }

        Ok(config)
    }

    /// Path of the configuration file that is read.
    pub fn config_path(base: &Path, config_file: Option<&PathBuf>) -> PathBuf {
        config_file
            .cloned()
            .unwrap_or_else(|| base.join(CONFIG_FILE_NAME))
    }
}

/// `APP_NAME` from the environment, else from `<base>/.env`. Blank values
/// count as unset.
fn laravel_app_name(base: &Path, env: Option<&Map<String, String>>) -> Option<String> {
    let from_env = match env {
        Some(vars) => vars.get("APP_NAME").cloned(),
        None => std::env::var("APP_NAME").ok(),
    };

    from_env
        .or_else(|| {
            dotenvy::from_path_iter(base.join(".env"))
                .ok()?
                .filter_map(Result::ok)
                .find(|(key, _)| key == "APP_NAME")
                .map(|(_, value)| value)
        })
        .filter(|name| !name.trim().is_empty())
}
