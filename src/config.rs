//! Configuration loading for the serp-carousel CLI.
//!
//! Loads settings from `serp-carousel.toml` with an environment variable
//! override for the User-Agent. A missing file means defaults.

use crate::http::{FetchError, ReqwestClient, REQUEST_TIMEOUT, USER_AGENT};
use crate::selectors::{CarouselSelectors, SelectorConfig, SelectorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "serp-carousel.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    InvalidSelector(#[from] SelectorError),
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Google serves the basic HTML layout to non-browser agents
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout_secs: REQUEST_TIMEOUT.as_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from the default location (cwd, then home)
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default().with_env_overrides())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(agent) = std::env::var("SERP_CAROUSEL_USER_AGENT") {
            self.http.user_agent = agent;
        }
        self
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::home_dir()
            .map(|home| home.join(".config").join("serp-carousel").join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    pub fn client(&self) -> Result<ReqwestClient, FetchError> {
        ReqwestClient::with_options(&self.http.user_agent, self.timeout())
    }

    pub fn carousel_selectors(&self) -> Result<CarouselSelectors, ConfigError> {
        Ok(CarouselSelectors::from_config(&self.selectors)?)
    }
}
