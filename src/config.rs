use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::models::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable pointing at an alternate config file
pub const CONFIG_ENV: &str = "SAMPLEDECK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default = "default_cache_ttl_secs")]
    pub detail_cache_ttl_secs: u64,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: SortKey::default(),
            detail_cache_ttl_secs: default_cache_ttl_secs(),
            submission: SubmissionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_success_rate() -> f64 {
    0.8
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads the config from `$SAMPLEDECK_CONFIG` or the default location.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::config_path);

        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// `<config_dir>/sampledeck/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sampledeck").join("config.toml"))
    }

    /// Forces values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.submission.success_rate = if self.submission.success_rate.is_nan() {
            default_success_rate()
        } else {
            self.submission.success_rate.clamp(0.0, 1.0)
        };
        self
    }

    pub fn detail_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.detail_cache_ttl_secs)
    }
}

impl SubmissionConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
