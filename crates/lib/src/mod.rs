pub mod codec;
pub mod config;
pub mod constant;
pub mod dispatcher;
pub mod environment;
pub mod error;
pub mod fixture;
pub mod log;
pub mod provider;
pub mod rpc_error;
pub mod runner;
pub mod sanitize;
pub mod transport;
pub mod types;
pub use config::Config;
pub use dispatcher::{CallContext, Dispatcher};
pub use environment::{Environment, TraceOperation};
pub use error::StarkTraceError;
pub use provider::TraceRpc;
pub use rpc_error::{KnownRpcError, RpcError};
