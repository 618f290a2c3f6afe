use crate::{rpc_error::RpcError, sanitize_error};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum StarkTraceError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Node rejected request: {0}")]
    RemoteRejected(RpcError),

    #[error("Call cancelled")]
    Cancelled,

    #[error("Call deadline exceeded")]
    DeadlineExceeded,

    #[error("Method {method} is not supported in the {environment} environment")]
    UnsupportedMethod { method: String, environment: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Fixture setup failed: {0}")]
    Fixture(String),
}

impl StarkTraceError {
    /// The node's error if the request reached it and was rejected.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            StarkTraceError::RemoteRejected(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_rpc_error(self) -> Result<RpcError, StarkTraceError> {
        match self {
            StarkTraceError::RemoteRejected(error) => Ok(error),
            other => Err(other),
        }
    }
}

impl From<RpcError> for StarkTraceError {
    fn from(error: RpcError) -> Self {
        StarkTraceError::RemoteRejected(error)
    }
}

impl From<reqwest::Error> for StarkTraceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StarkTraceError::MalformedResponse(sanitize_error!(e))
        } else {
            StarkTraceError::TransportFailure(sanitize_error!(e))
        }
    }
}

impl From<serde_json::Error> for StarkTraceError {
    fn from(e: serde_json::Error) -> Self {
        StarkTraceError::MalformedResponse(sanitize_error!(e))
    }
}

impl From<std::io::Error> for StarkTraceError {
    fn from(e: std::io::Error) -> Self {
        StarkTraceError::Fixture(sanitize_error!(e))
    }
}

impl From<toml::de::Error> for StarkTraceError {
    fn from(e: toml::de::Error) -> Self {
        StarkTraceError::ConfigError(sanitize_error!(e))
    }
}
