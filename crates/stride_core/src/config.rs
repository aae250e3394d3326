//! Process configuration for embedding the tracker core.
//!
//! # Responsibility
//! - Resolve log level, log directory and seeding from environment
//!   variables.
//! - Provide the single construction point for the record store.
//!
//! # Invariants
//! - Missing variables fall back to defaults; malformed ones are errors.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::repo::memory_store::MemoryStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "STRIDE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STRIDE_LOG_DIR";
pub const ENV_SEED: &str = "STRIDE_SEED";

#[derive(Debug)]
pub enum ConfigError {
    LogLevel(LoggingError),
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogLevel(err) => write!(f, "{ENV_LOG_LEVEL}: {err}"),
            Self::InvalidFlag { key, value } => {
                write!(f, "{key}: expected a boolean flag, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LogLevel(err) => Some(err),
            Self::InvalidFlag { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub seed_achievements: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_achievements: true,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = non_empty(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&level).map_err(ConfigError::LogLevel)?;
        }
        config.log_dir = non_empty(lookup(ENV_LOG_DIR)).map(PathBuf::from);
        if let Some(flag) = non_empty(lookup(ENV_SEED)) {
            config.seed_achievements = parse_flag(ENV_SEED, &flag)?;
        }

        Ok(config)
    }

    /// Constructs the record store this config describes.
    pub fn build_store(&self) -> MemoryStore {
        if self.seed_achievements {
            MemoryStore::new()
        } else {
            MemoryStore::empty()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
