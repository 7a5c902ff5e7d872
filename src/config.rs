//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`SHOPTRACK_*`)
//! 2. Config file (`~/.shoptrack/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Persisted-record configuration.
    pub record: RecordConfig,

    /// Session-boundary configuration.
    pub session: SessionConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the shoptrack home directory.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_shoptrack_home(),
        }
    }
}

/// Persisted-record configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Key the record is stored under.
    pub key: String,

    /// Sliding expiration window in days, refreshed on every write.
    pub ttl_days: u32,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            key: "one_shop_analytics".to_string(),
            ttl_days: 30,
        }
    }
}

/// Session-boundary configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a session is considered ended.
    pub idle_gap_minutes: u32,

    /// Gaps longer than this many minutes are rejected as session
    /// durations (clock anomalies, cross-day gaps).
    pub max_duration_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_gap_minutes: 30,
            max_duration_minutes: 720,
        }
    }
}

/// Get the default shoptrack home directory.
fn default_shoptrack_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".shoptrack"), |h| h.join(".shoptrack"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Try to load config file
    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    // Override with environment variables
    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("SHOPTRACK_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("SHOPTRACK_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_shoptrack_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    // Storage path
    if let Ok(path) = env::var("SHOPTRACK_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("SHOPTRACK_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    // Record key and expiration
    if let Ok(key) = env::var("SHOPTRACK_RECORD_KEY") {
        config.record.key = key;
    }

    if let Ok(val) = env::var("SHOPTRACK_TTL_DAYS") {
        if let Ok(days) = val.parse() {
            config.record.ttl_days = days;
        }
    }

    // Session boundaries
    if let Ok(val) = env::var("SHOPTRACK_IDLE_GAP_MINUTES") {
        if let Ok(minutes) = val.parse() {
            config.session.idle_gap_minutes = minutes;
        }
    }

    if let Ok(val) = env::var("SHOPTRACK_MAX_DURATION_MINUTES") {
        if let Ok(minutes) = val.parse() {
            config.session.max_duration_minutes = minutes;
        }
    }
}
