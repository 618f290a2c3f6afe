use reqwest::Client;
use std::time::Duration;

use super::JsonRpcTransport;
use crate::{
    codec::JsonRpcRequest, error::StarkTraceError, sanitize::sanitize_message, sanitize_error,
};

/// JSON-RPC over HTTP POST to a live node.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, StarkTraceError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            StarkTraceError::ConfigError(format!(
                "Failed to build HTTP client: {}",
                sanitize_error!(e)
            ))
        })?;

        Ok(Self { client, url: url.to_string() })
    }

    /// Endpoint with any credentials redacted, safe for logs.
    pub fn endpoint(&self) -> String {
        sanitize_message(&self.url)
    }
}

#[async_trait::async_trait]
impl JsonRpcTransport for HttpTransport {
    async fn send(&self, request: &JsonRpcRequest) -> Result<Vec<u8>, StarkTraceError> {
        log::debug!("POST {} {}", self.endpoint(), request.method);

        let response = self.client.post(&self.url).json(request).send().await.map_err(|e| {
            StarkTraceError::TransportFailure(format!(
                "Request to node failed: {}",
                sanitize_error!(e)
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Node answered {} with HTTP {status}", request.method);
            return Err(StarkTraceError::TransportFailure(format!("Node returned HTTP {status}")));
        }

        let body = response.bytes().await.map_err(|e| {
            StarkTraceError::TransportFailure(format!(
                "Failed to read node response: {}",
                sanitize_error!(e)
            ))
        })?;

        Ok(body.to_vec())
    }
}
