use serde::{Deserialize, Serialize};

use crate::{
    codec::encode_value,
    constant::METHOD_SIMULATE_TRANSACTIONS,
    dispatcher::{CallContext, Dispatcher},
    error::StarkTraceError,
    types::{
        BlockId, BroadcastedTxn, SimulateTransactionInput, SimulatedTransaction, SimulationFlag,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateTransactionsRequest {
    pub block_id: BlockId,
    pub transactions: Vec<BroadcastedTxn>,
    pub simulation_flags: Vec<SimulationFlag>,
}

impl From<SimulateTransactionInput> for SimulateTransactionsRequest {
    fn from(input: SimulateTransactionInput) -> Self {
        Self {
            block_id: input.block_id,
            transactions: input.txns,
            simulation_flags: input.simulation_flags,
        }
    }
}

/// Simulate `transactions` on top of `block_id`, one result per transaction in order.
pub async fn simulate_transactions(
    dispatcher: &Dispatcher,
    ctx: &CallContext,
    request: SimulateTransactionsRequest,
) -> Result<Vec<SimulatedTransaction>, StarkTraceError> {
    let expected = request.transactions.len();
    let params = encode_value(&request)?;
    let simulated: Vec<SimulatedTransaction> =
        dispatcher.request(ctx, METHOD_SIMULATE_TRANSACTIONS, params).await?;

    if simulated.len() != expected {
        return Err(StarkTraceError::MalformedResponse(format!(
            "Simulated {} transactions, node returned {}",
            expected,
            simulated.len()
        )));
    }

    Ok(simulated)
}
