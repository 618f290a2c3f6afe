use serde_json::{json, Map, Value};
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use super::JsonRpcTransport;
use crate::{
    codec::{encode, JsonRpcRequest, ResponseBody},
    constant::JSONRPC_VERSION,
    error::StarkTraceError,
    rpc_error::{KnownRpcError, RpcError},
};

/// Deterministic in-memory node answering from seeded replies.
///
/// Replies are keyed by method and params. A request with no exact reply
/// gets the method's fallback error if one is set, `InvalidParams` if the
/// method is known, and `MethodNotFound` otherwise.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    replies: HashMap<(String, String), ResponseBody>,
    fallbacks: HashMap<String, RpcError>,
    latency: Option<Duration>,
    calls: AtomicUsize,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, method: &str, params: Value, result: Value) -> Self {
        self.replies.insert(reply_key(method, &params), ResponseBody::Result(result));
        self
    }

    pub fn with_error(mut self, method: &str, params: Value, error: RpcError) -> Self {
        self.replies.insert(reply_key(method, &params), ResponseBody::Error(error));
        self
    }

    pub fn with_fallback(mut self, method: &str, error: RpcError) -> Self {
        self.fallbacks.insert(method.to_string(), error);
        self
    }

    /// Delay every reply, so callers can cancel while a call is in flight.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of requests that reached this transport.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reply(&self, request: &JsonRpcRequest) -> ResponseBody {
        if let Some(reply) = self.replies.get(&reply_key(&request.method, &request.params)) {
            return reply.clone();
        }

        if let Some(error) = self.fallbacks.get(&request.method) {
            return ResponseBody::Error(error.clone());
        }

        let known_method = self.replies.keys().any(|(method, _)| *method == request.method);
        if known_method {
            ResponseBody::Error(KnownRpcError::InvalidParams.rpc_error())
        } else {
            ResponseBody::Error(KnownRpcError::MethodNotFound.rpc_error())
        }
    }
}

fn reply_key(method: &str, params: &Value) -> (String, String) {
    (method.to_string(), canonical(params).to_string())
}

// Object keys sorted at every level, whatever order the map keeps them in
fn canonical(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> =
                entries.into_iter().map(|(key, value)| (key.clone(), canonical(value))).collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
        other => other.clone(),
    }
}

#[async_trait::async_trait]
impl JsonRpcTransport for FixtureTransport {
    async fn send(&self, request: &JsonRpcRequest) -> Result<Vec<u8>, StarkTraceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let envelope = match self.reply(request) {
            ResponseBody::Result(result) => {
                json!({ "jsonrpc": JSONRPC_VERSION, "id": request.id, "result": result })
            }
            ResponseBody::Error(error) => {
                json!({ "jsonrpc": JSONRPC_VERSION, "id": request.id, "error": error })
            }
        };

        log::debug!("Fixture reply for {}: {envelope}", request.method);
        encode(&envelope)
    }
}
