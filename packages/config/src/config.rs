use crate::constants::*;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default origin of the analytics service
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
/// Default seed term for golden keyword discovery
pub const DEFAULT_GOLD_SEED: &str = "인기아이템";
/// Default shopping category id
pub const DEFAULT_SHOPPING_CATEGORY: &str = "50000000";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid number for {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Origin of the analytics service; the `/api` base path is appended by the client
    pub api_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub data_dir: PathBuf,
    pub gold_seed: String,
    pub shopping_category: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_HTTP_CONNECT_TIMEOUT_SECS),
            data_dir: data_dir(),
            gold_seed: DEFAULT_GOLD_SEED.to_string(),
            shopping_category: DEFAULT_SHOPPING_CATEGORY.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = normalize_api_url(
            &env::var(KEYSCOPE_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )?;

        let request_timeout = duration_from_env(KEYSCOPE_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS)?;
        let connect_timeout = duration_from_env(
            KEYSCOPE_HTTP_CONNECT_TIMEOUT_SECS,
            DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        )?;

        let gold_seed = env::var(KEYSCOPE_GOLD_SEED)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_GOLD_SEED.to_string());

        let shopping_category = env::var(KEYSCOPE_SHOPPING_CATEGORY)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SHOPPING_CATEGORY.to_string());

        let config = DashboardConfig {
            api_url,
            request_timeout,
            connect_timeout,
            data_dir: data_dir(),
            gold_seed,
            shopping_category,
        };
        debug!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "Loaded dashboard configuration");
        Ok(config)
    }

    /// Override the service origin, e.g. from a command-line flag
    pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(url)?;
        Ok(self)
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    /// Location of the persisted UI preferences
    pub fn preferences_file(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }

    /// Default location of the log file
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("keyscope.log")
    }
}

/// Get the path to the Keyscope directory (`$KEYSCOPE_DATA_DIR` or `~/.keyscope`)
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var(KEYSCOPE_DATA_DIR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    // HOME first so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        return PathBuf::from(home).join(".keyscope");
    }
    dirs::home_dir()
        .map(|home| home.join(".keyscope"))
        .unwrap_or_else(|| PathBuf::from(".keyscope"))
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw.to_string()));
    }
    Ok(url.to_string())
}

fn duration_from_env(name: &'static str, default_secs: u64) -> Result<Duration, ConfigError> {
    let secs = match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidNumber { name, source })?,
        Err(_) => default_secs,
    };
    if secs == 0 {
        return Err(ConfigError::ZeroDuration(name));
    }
    Ok(Duration::from_secs(secs))
}
