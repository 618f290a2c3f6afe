pub mod fixture;
pub mod http;

use mockall::automock;
use std::sync::Arc;

use crate::{
    codec::JsonRpcRequest, config::Config, environment::Environment, error::StarkTraceError,
    fixture::{mock_transport, FixtureLoader},
};

pub use fixture::FixtureTransport;
pub use http::HttpTransport;

/// Carries one JSON-RPC request to a node and returns the raw response body.
#[automock]
#[async_trait::async_trait]
pub trait JsonRpcTransport {
    async fn send(&self, request: &JsonRpcRequest) -> Result<Vec<u8>, StarkTraceError>;
}

/// Build the single transport for `environment`.
pub fn get_transport(
    environment: Environment,
    config: &Config,
) -> Result<Arc<dyn JsonRpcTransport + Send + Sync>, StarkTraceError> {
    match config.endpoint_for(environment)? {
        None => {
            let loader = FixtureLoader::new(config.fixture_dir());
            log::info!("Using fixture transport from {}", loader.dir().display());
            Ok(Arc::new(mock_transport(&loader)?))
        }
        Some(url) => {
            let transport = HttpTransport::new(&url, config.request_timeout()?)?;
            log::info!("Using {environment} transport at {}", transport.endpoint());
            Ok(Arc::new(transport))
        }
    }
}
