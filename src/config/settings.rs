use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use super::paths::Paths;
use crate::error::{DrNuError, Result};

/// Base URL of the DR NU catalog API
pub const DEFAULT_BASE_URL: &str = "http://www.dr.dk/NU/api/";

/// Default freshness window in minutes
const DEFAULT_CACHE_MINUTES: u64 = 60;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Response cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// API-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Catalog API base URL, must end with '/'
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache directory (defaults to ~/.drnu/cache)
    pub dir: Option<PathBuf>,
    /// Minutes a cached response is trusted before refetching
    #[serde(default = "default_cache_minutes")]
    pub minutes: u64,
}

fn default_cache_minutes() -> u64 {
    DEFAULT_CACHE_MINUTES
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            minutes: default_cache_minutes(),
        }
    }
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, contents)?;
        Ok(())
    }

    /// Parsed API base URL
    pub fn base_url(&self) -> Result<Url> {
        parse_base_url(&self.api.base_url)
    }

    /// Effective cache directory
    pub fn cache_dir(&self, paths: &Paths) -> PathBuf {
        self.cache
            .dir
            .clone()
            .unwrap_or_else(|| paths.cache_dir.clone())
    }

    /// Set a value by its dotted key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                parse_base_url(value)?;
                self.api.base_url = value.to_string();
            }
            "cache.dir" => {
                if value.trim().is_empty() {
                    return Err(DrNuError::invalid("cache.dir cannot be empty"));
                }
                self.cache.dir = Some(PathBuf::from(value));
            }
            "cache.minutes" => {
                self.cache.minutes = value.parse().map_err(|_| {
                    DrNuError::invalid(format!(
                        "cache.minutes must be a non-negative integer, got '{value}'"
                    ))
                })?;
            }
            "output.format" => {
                if value != "pretty" && value != "json" {
                    return Err(DrNuError::invalid(
                        "output.format must be 'pretty' or 'json'",
                    ));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(DrNuError::invalid(format!(
                    "Unknown config key: {key}. Valid keys: api.base_url, cache.dir, cache.minutes, output.format"
                )));
            }
        }
        Ok(())
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| DrNuError::Config(format!("invalid api.base_url '{value}': {e}")))?;
    if !url.path().ends_with('/') {
        return Err(DrNuError::Config(format!(
            "api.base_url must end with '/': {value}"
        )));
    }
    Ok(url)
}
