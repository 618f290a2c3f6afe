use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{constant::DEFAULT_LOG_FILTER, error::StarkTraceError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFormat {
    #[default]
    Standard,
    Json,
}

impl FromStr for LoggingFormat {
    type Err = StarkTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(LoggingFormat::Standard),
            "json" => Ok(LoggingFormat::Json),
            other => Err(StarkTraceError::ConfigError(format!("Unknown logging format '{other}'"))),
        }
    }
}

/// Install a global subscriber that also receives `log` records.
///
/// `RUST_LOG` replaces the default filter. Fails if a subscriber is already installed.
pub fn init_logging(format: LoggingFormat) -> Result<(), StarkTraceError> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    let result = match format {
        LoggingFormat::Standard => subscriber.try_init(),
        LoggingFormat::Json => subscriber.json().try_init(),
    };

    result.map_err(|e| {
        StarkTraceError::ConfigError(format!("Failed to initialize logging: {e}"))
    })
}
