use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_DIR: &str = ".projectbot";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Top-level project configuration loaded from `.projectbot/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
}

impl ProjectConfig {
    /// Load configuration from a working directory.
    ///
    /// A missing config file yields the defaults.
    pub fn load(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.path.as_os_str().is_empty() {
            bail!("storage path must not be empty");
        }
        Ok(())
    }
}

/// Where the task file lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_data_file(),
        }
    }
}

impl StorageConfig {
    /// Path of the task file, with relative paths anchored at `workdir`.
    pub fn resolve(&self, workdir: impl AsRef<Path>) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workdir.as_ref().join(&self.path)
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Start-of-session reminder settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "enabled")]
    pub on_start: bool,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { on_start: true }
    }
}

const fn enabled() -> bool {
    true
}
