pub mod method;

use log::info;

use crate::{
    config::Config,
    dispatcher::{CallContext, Dispatcher},
    environment::Environment,
    error::StarkTraceError,
    provider::method::{
        simulate_transactions::{simulate_transactions, SimulateTransactionsRequest},
        trace_block_transactions::{trace_block_transactions, TraceBlockTransactionsRequest},
        trace_transaction::{trace_transaction, TraceTransactionRequest},
    },
    transport::get_transport,
    types::{
        BlockId, BroadcastedTxn, Felt, SimulatedTransaction, SimulationFlag, TraceWithHash,
        TransactionTrace,
    },
};

/// Typed client for the node's trace API.
#[derive(Clone)]
pub struct TraceRpc {
    dispatcher: Dispatcher,
}

impl TraceRpc {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build a client for `environment` with the transport `config` selects.
    pub fn from_config(environment: Environment, config: &Config) -> Result<Self, StarkTraceError> {
        let transport = get_transport(environment, config)?;
        Ok(Self::new(Dispatcher::new(transport, environment)))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn environment(&self) -> Environment {
        self.dispatcher.environment()
    }

    pub async fn trace_transaction(
        &self,
        ctx: &CallContext,
        transaction_hash: Felt,
    ) -> Result<TransactionTrace, StarkTraceError> {
        info!("Trace transaction request: {transaction_hash}");
        let request = TraceTransactionRequest { transaction_hash };
        let result = trace_transaction(&self.dispatcher, ctx, request).await;
        info!("Trace transaction response: {:?}", result.as_ref().map(|_| "trace"));
        result
    }

    pub async fn simulate_transactions(
        &self,
        ctx: &CallContext,
        block_id: BlockId,
        transactions: Vec<BroadcastedTxn>,
        simulation_flags: Vec<SimulationFlag>,
    ) -> Result<Vec<SimulatedTransaction>, StarkTraceError> {
        info!(
            "Simulate transactions request: {} transactions at {block_id:?}, flags {simulation_flags:?}",
            transactions.len()
        );
        let request = SimulateTransactionsRequest { block_id, transactions, simulation_flags };
        let result = simulate_transactions(&self.dispatcher, ctx, request).await;
        info!("Simulate transactions response: {:?}", result.as_ref().map(Vec::len));
        result
    }

    pub async fn trace_block_transactions(
        &self,
        ctx: &CallContext,
        block_id: BlockId,
    ) -> Result<Vec<TraceWithHash>, StarkTraceError> {
        info!("Trace block transactions request: {block_id:?}");
        let request = TraceBlockTransactionsRequest { block_id };
        let result = trace_block_transactions(&self.dispatcher, ctx, request).await;
        info!("Trace block transactions response: {:?}", result.as_ref().map(Vec::len));
        result
    }
}
