// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::consts::{CONFIG_PATH_ENV, TICK_MS_ENV};
use crate::error::{BytesError, Result};
use crate::random::SourceKind;
use crate::scheduler::ContinuationKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub random: RandomConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub default_length: usize,
    pub preferred_source: SourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub tick_ms: u64,
    pub continuation: ContinuationKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            random: default_random(),
            scheduler: default_scheduler(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        default_random()
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        default_scheduler()
    }
}

impl SchedulerConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BytesError::Config(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| BytesError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Apply `HASH_BYTES_TICK_MS` when it holds a valid number
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(TICK_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(tick_ms) => self.scheduler.tick_ms = tick_ms,
                Err(_) => warn!(value = %raw, "ignoring invalid {}", TICK_MS_ENV),
            }
        }
        self
    }

    /// Config file named by `HASH_BYTES_CONFIG`, falling back to defaults
    pub fn from_env() -> Self {
        let conf = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_path(&path).unwrap_or_else(|err| {
                warn!(%path, %err, "falling back to built-in config");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        conf.with_env_overrides()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, read from the environment on first use
pub fn load() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
