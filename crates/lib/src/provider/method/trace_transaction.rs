use serde::{Deserialize, Serialize};

use crate::{
    codec::encode_value,
    constant::METHOD_TRACE_TRANSACTION,
    dispatcher::{CallContext, Dispatcher},
    error::StarkTraceError,
    types::{Felt, TransactionTrace},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceTransactionRequest {
    pub transaction_hash: Felt,
}

pub async fn trace_transaction(
    dispatcher: &Dispatcher,
    ctx: &CallContext,
    request: TraceTransactionRequest,
) -> Result<TransactionTrace, StarkTraceError> {
    let params = encode_value(&request)?;
    dispatcher.request(ctx, METHOD_TRACE_TRANSACTION, params).await
}
