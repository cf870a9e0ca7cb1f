use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::license::classifier::Classifier;

/// Number of licenses shown before the rest is folded into "other".
pub const DEFAULT_LIMIT: usize = 5;

/// Root configuration structure, deserialized from `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Reference list used to decide which licenses count as open source.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Replaces the built-in list when present.
    pub open_source: Option<Vec<String>>,
    /// Appended to whichever list is in effect.
    #[serde(default)]
    pub extra_open_source: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Build the [`Classifier`] described by this configuration.
    pub fn classifier(&self) -> Classifier {
        let mut classifier = match &self.classifier.open_source {
            Some(list) => Classifier::new(list.iter().cloned()),
            None => Classifier::default(),
        };
        classifier.extend(self.classifier.extra_open_source.iter().cloned());
        classifier
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<config dir>/pacfree/config.toml` (e.g. `~/.config/pacfree/config.toml`)
/// 3. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    if let Some(path) = user_config_path() {
        if path.exists() {
            return read_config(&path);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pacfree").join("config.toml"))
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
