use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical JSON-RPC error returned by the node.
///
/// Equality is structural over all three fields, so `data` payloads are
/// compared by value rather than by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = normalize_data(Some(data.into()));
        self
    }

    /// The well-known error this value represents, matched on code and message.
    pub fn known(&self) -> Option<KnownRpcError> {
        KnownRpcError::ALL
            .iter()
            .copied()
            .find(|known| known.code() == self.code && known.message() == self.message)
    }

    pub fn is(&self, known: KnownRpcError) -> bool {
        self.known() == Some(known)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} ({}): {}", self.message, self.code, data),
            None => write!(f, "{} ({})", self.message, self.code),
        }
    }
}

/// Raw error object exactly as it appears in a JSON-RPC error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Turn a raw error object into its canonical form.
///
/// Unrecognized codes pass through unchanged; only an explicit `null` data
/// payload is folded into `None` so it compares equal to an absent one.
pub fn normalize(raw: RawRpcError) -> RpcError {
    let error = RpcError { code: raw.code, message: raw.message, data: normalize_data(raw.data) };

    match error.known() {
        Some(known) => log::debug!("Node returned {known:?}: {error}"),
        None => log::debug!("Node returned unrecognized error: {error}"),
    }

    error
}

fn normalize_data(data: Option<Value>) -> Option<Value> {
    match data {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Errors with a fixed code and message defined by the Starknet RPC API
/// and by JSON-RPC 2.0 itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownRpcError {
    FailedToReceiveTransaction,
    NoTraceAvailable,
    ContractNotFound,
    BlockNotFound,
    InvalidTransactionIndex,
    ClassHashNotFound,
    HashNotFound,
    ContractError,
    TransactionExecutionError,
    UnexpectedError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl KnownRpcError {
    pub const ALL: [KnownRpcError; 14] = [
        KnownRpcError::FailedToReceiveTransaction,
        KnownRpcError::NoTraceAvailable,
        KnownRpcError::ContractNotFound,
        KnownRpcError::BlockNotFound,
        KnownRpcError::InvalidTransactionIndex,
        KnownRpcError::ClassHashNotFound,
        KnownRpcError::HashNotFound,
        KnownRpcError::ContractError,
        KnownRpcError::TransactionExecutionError,
        KnownRpcError::UnexpectedError,
        KnownRpcError::InvalidRequest,
        KnownRpcError::MethodNotFound,
        KnownRpcError::InvalidParams,
        KnownRpcError::InternalError,
    ];

    pub fn code(self) -> i64 {
        match self {
            KnownRpcError::FailedToReceiveTransaction => 1,
            KnownRpcError::NoTraceAvailable => 10,
            KnownRpcError::ContractNotFound => 20,
            KnownRpcError::BlockNotFound => 24,
            KnownRpcError::InvalidTransactionIndex => 27,
            KnownRpcError::ClassHashNotFound => 28,
            KnownRpcError::HashNotFound => 29,
            KnownRpcError::ContractError => 40,
            KnownRpcError::TransactionExecutionError => 41,
            KnownRpcError::UnexpectedError => 63,
            KnownRpcError::InvalidRequest => -32600,
            KnownRpcError::MethodNotFound => -32601,
            KnownRpcError::InvalidParams => -32602,
            KnownRpcError::InternalError => -32603,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            KnownRpcError::FailedToReceiveTransaction => "Failed to write transaction",
            KnownRpcError::NoTraceAvailable => "No trace available for transaction",
            KnownRpcError::ContractNotFound => "Contract not found",
            KnownRpcError::BlockNotFound => "Block not found",
            KnownRpcError::InvalidTransactionIndex => "Invalid transaction index in a block",
            KnownRpcError::ClassHashNotFound => "Class hash not found",
            KnownRpcError::HashNotFound => "Transaction hash not found",
            KnownRpcError::ContractError => "Contract error",
            KnownRpcError::TransactionExecutionError => "Transaction execution error",
            KnownRpcError::UnexpectedError => "An unexpected error occurred",
            KnownRpcError::InvalidRequest => "Invalid Request",
            KnownRpcError::MethodNotFound => "Method not found",
            KnownRpcError::InvalidParams => "Invalid params",
            KnownRpcError::InternalError => "Internal error",
        }
    }

    pub fn rpc_error(self) -> RpcError {
        RpcError::new(self.code(), self.message())
    }
}

impl From<KnownRpcError> for RpcError {
    fn from(known: KnownRpcError) -> Self {
        known.rpc_error()
    }
}
