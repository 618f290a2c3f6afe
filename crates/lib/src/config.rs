use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    constant::{
        CONFIG_PATH_ENV, DEFAULT_DEVNET_URL, DEFAULT_FIXTURE_DIR, DEFAULT_REQUEST_TIMEOUT_SECS,
        DEVNET_URL_ENV, ENVIRONMENT_ENV, FIXTURE_DIR_ENV, MAINNET_URL_ENV, REQUEST_TIMEOUT_ENV,
    },
    environment::Environment,
    error::StarkTraceError,
    log::LoggingFormat,
    sanitize_error,
};

/// Client configuration, optionally read from TOML.
///
/// Every value can be overridden by its environment variable, which always
/// takes priority over the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_devnet_url")]
    pub devnet_url: String,
    #[serde(default)]
    pub mainnet_url: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            devnet_url: default_devnet_url(),
            mainnet_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixturesConfig {
    #[serde(default = "default_fixture_dir")]
    pub dir: PathBuf,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self { dir: default_fixture_dir() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LoggingFormat,
}

fn default_devnet_url() -> String {
    DEFAULT_DEVNET_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_fixture_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_DIR)
}

fn get_value_by_priority(env_var: &str, config_value: Option<String>) -> Option<String> {
    std::env::var(env_var).ok().or(config_value)
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, StarkTraceError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            StarkTraceError::ConfigError(format!(
                "Failed to read config file: {}",
                sanitize_error!(e)
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            StarkTraceError::ConfigError(format!(
                "Failed to parse config file: {}",
                sanitize_error!(e)
            ))
        })
    }

    /// Load `.env`, then the file named by `STARK_TRACE_CONFIG` if set, else defaults.
    pub fn load() -> Result<Config, StarkTraceError> {
        dotenv::dotenv().ok();

        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                log::info!("Loading config from {path}");
                Self::load_config(path)
            }
            Err(_) => Ok(Config::default()),
        }
    }

    pub fn environment(&self) -> Result<Environment, StarkTraceError> {
        self.configured_environment()?.ok_or_else(|| {
            StarkTraceError::ConfigError(format!("No environment configured, set {ENVIRONMENT_ENV}"))
        })
    }

    /// Like [`Config::environment`], but `default` applies when neither the
    /// variable nor the file names one.
    pub fn environment_or(&self, default: Environment) -> Result<Environment, StarkTraceError> {
        Ok(self.configured_environment()?.unwrap_or(default))
    }

    fn configured_environment(&self) -> Result<Option<Environment>, StarkTraceError> {
        get_value_by_priority(ENVIRONMENT_ENV, self.environment.map(|e| e.to_string()))
            .map(|value| value.parse())
            .transpose()
    }

    pub fn devnet_url(&self) -> String {
        get_value_by_priority(DEVNET_URL_ENV, Some(self.endpoints.devnet_url.clone()))
            .unwrap_or_else(|| DEFAULT_DEVNET_URL.to_string())
    }

    pub fn mainnet_url(&self) -> Result<String, StarkTraceError> {
        get_value_by_priority(MAINNET_URL_ENV, self.endpoints.mainnet_url.clone()).ok_or_else(
            || StarkTraceError::ConfigError(format!("Mainnet requires {MAINNET_URL_ENV}")),
        )
    }

    /// Endpoint of a live environment; `None` for the fixture transport.
    pub fn endpoint_for(&self, environment: Environment) -> Result<Option<String>, StarkTraceError> {
        match environment {
            Environment::Mock => Ok(None),
            Environment::Devnet => Ok(Some(self.devnet_url())),
            Environment::Mainnet => self.mainnet_url().map(Some),
        }
    }

    pub fn fixture_dir(&self) -> PathBuf {
        std::env::var(FIXTURE_DIR_ENV).map(PathBuf::from).unwrap_or_else(|_| self.fixtures.dir.clone())
    }

    pub fn request_timeout(&self) -> Result<Duration, StarkTraceError> {
        let secs = match std::env::var(REQUEST_TIMEOUT_ENV) {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                StarkTraceError::ConfigError(format!("Invalid {REQUEST_TIMEOUT_ENV}: {e}"))
            })?,
            Err(_) => self.endpoints.request_timeout_secs,
        };
        Ok(Duration::from_secs(secs))
    }
}
