use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{
    codec::{decode_response, decode_value, JsonRpcRequest, ResponseBody},
    environment::Environment,
    error::StarkTraceError,
    transport::JsonRpcTransport,
};

// One request in flight per call, so the id never needs to vary
const REQUEST_ID: u64 = 1;

/// Cancellation scope for dispatcher calls.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: CancellationToken) -> Self {
        Self { token, deadline: None }
    }

    /// A timeout too large to represent as an instant leaves the context without a deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// A context cancelled along with this one, but cancellable on its own.
    pub fn child(&self) -> Self {
        Self { token: self.token.child_token(), deadline: self.deadline }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    fn check(&self) -> Result<(), StarkTraceError> {
        if self.is_cancelled() {
            return Err(StarkTraceError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(StarkTraceError::DeadlineExceeded);
        }
        Ok(())
    }

    async fn deadline_elapsed(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

/// Sends JSON-RPC calls over the single transport of one environment.
///
/// Holds no mutable state, so one dispatcher can serve concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn JsonRpcTransport + Send + Sync>,
    environment: Environment,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn JsonRpcTransport + Send + Sync>, environment: Environment) -> Self {
        Self { transport, environment }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Issue `method` and return its raw result.
    ///
    /// A node error comes back as `RemoteRejected`. Nothing is sent if the
    /// context is already done or the environment lacks the method.
    pub async fn call(
        &self,
        ctx: &CallContext,
        method: &str,
        params: Value,
    ) -> Result<Value, StarkTraceError> {
        ctx.check()?;

        if !self.environment.supports(method) {
            return Err(StarkTraceError::UnsupportedMethod {
                method: method.to_string(),
                environment: self.environment.to_string(),
            });
        }

        let request = JsonRpcRequest::new(REQUEST_ID, method, params);

        let raw = tokio::select! {
            biased;
            _ = ctx.token.cancelled() => {
                log::debug!("{method} cancelled in flight");
                return Err(StarkTraceError::Cancelled);
            }
            _ = ctx.deadline_elapsed() => {
                log::debug!("{method} exceeded its deadline");
                return Err(StarkTraceError::DeadlineExceeded);
            }
            raw = self.transport.send(&request) => raw?,
        };

        match decode_response(&raw, REQUEST_ID)? {
            ResponseBody::Result(result) => Ok(result),
            ResponseBody::Error(error) => Err(StarkTraceError::RemoteRejected(error)),
        }
    }

    /// `call`, decoding the result into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        method: &str,
        params: Value,
    ) -> Result<T, StarkTraceError> {
        let result = self.call(ctx, method, params).await?;
        decode_value(result)
    }
}
