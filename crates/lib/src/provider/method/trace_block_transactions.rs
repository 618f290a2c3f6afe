use serde::{Deserialize, Serialize};

use crate::{
    codec::encode_value,
    constant::METHOD_TRACE_BLOCK_TRANSACTIONS,
    dispatcher::{CallContext, Dispatcher},
    error::StarkTraceError,
    types::{BlockId, TraceWithHash},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceBlockTransactionsRequest {
    pub block_id: BlockId,
}

pub async fn trace_block_transactions(
    dispatcher: &Dispatcher,
    ctx: &CallContext,
    request: TraceBlockTransactionsRequest,
) -> Result<Vec<TraceWithHash>, StarkTraceError> {
    let params = encode_value(&request)?;
    dispatcher.request(ctx, METHOD_TRACE_BLOCK_TRANSACTIONS, params).await
}
