use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    constant::JSONRPC_VERSION,
    error::StarkTraceError,
    rpc_error::{normalize, RawRpcError, RpcError},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &str, params: Value) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), id, method: method.to_string(), params }
    }
}

/// Payload of a JSON-RPC response: exactly one of result or error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Result(Value),
    Error(RpcError),
}

#[derive(Deserialize)]
struct RawResponse {
    jsonrpc: Option<String>,
    #[serde(default)]
    id: Value,
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RawRpcError>,
}

// `"result": null` is still a result; only an absent key is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Document layout of on-disk fixtures: a captured response's `result` member.
#[derive(Debug, Deserialize)]
struct FixtureDocument<T> {
    result: T,
}

/// Decode bytes into the statically known shape `T`.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T, StarkTraceError> {
    serde_json::from_slice(raw).map_err(|e| {
        StarkTraceError::MalformedResponse(format!(
            "Failed to decode {}: {e}",
            std::any::type_name::<T>()
        ))
    })
}

pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, StarkTraceError> {
    serde_json::from_value(value).map_err(|e| {
        StarkTraceError::MalformedResponse(format!(
            "Failed to decode {}: {e}",
            std::any::type_name::<T>()
        ))
    })
}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StarkTraceError> {
    serde_json::to_vec(value).map_err(|e| {
        StarkTraceError::MalformedResponse(format!(
            "Failed to encode {}: {e}",
            std::any::type_name::<T>()
        ))
    })
}

/// Render typed call parameters as the JSON `params` member.
pub fn encode_value<T: Serialize>(value: &T) -> Result<Value, StarkTraceError> {
    serde_json::to_value(value).map_err(|e| {
        StarkTraceError::MalformedResponse(format!(
            "Failed to encode {}: {e}",
            std::any::type_name::<T>()
        ))
    })
}

/// Encode then decode again; used to check that fixtures survive the codec unchanged.
pub fn roundtrip<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, StarkTraceError> {
    decode(&encode(value)?)
}

/// Decode a fixture document of the form `{"result": ...}`.
pub fn decode_fixture<T: DeserializeOwned>(raw: &[u8]) -> Result<T, StarkTraceError> {
    decode::<FixtureDocument<T>>(raw).map(|document| document.result)
}

/// Split a raw JSON-RPC response into its result or normalized error.
pub fn decode_response(raw: &[u8], expected_id: u64) -> Result<ResponseBody, StarkTraceError> {
    let response: RawResponse = decode(raw)?;

    if response.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
        return Err(StarkTraceError::MalformedResponse(format!(
            "Unsupported jsonrpc version: {:?}",
            response.jsonrpc
        )));
    }

    // Servers answer unparseable requests with a null id
    let id_matches = response.id.as_u64() == Some(expected_id)
        || (response.id.is_null() && response.error.is_some());
    if !id_matches {
        return Err(StarkTraceError::MalformedResponse(format!(
            "Response id {} does not match request id {expected_id}",
            response.id
        )));
    }

    match (response.result, response.error) {
        (Some(result), None) => Ok(ResponseBody::Result(result)),
        (None, Some(error)) => Ok(ResponseBody::Error(normalize(error))),
        (Some(_), Some(_)) => Err(StarkTraceError::MalformedResponse(
            "Response carries both result and error".to_string(),
        )),
        (None, None) => Err(StarkTraceError::MalformedResponse(
            "Response carries neither result nor error".to_string(),
        )),
    }
}
