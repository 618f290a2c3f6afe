use stark_trace_lib::{
    constant::fixtures::{SEPOLIA_TRACE_BLOCK_HASH, UNKNOWN_BLOCK_HASH},
    fixture::{fixtures_for, mock_transport},
    runner::run_cases,
    types::{BlockId, Felt},
    Dispatcher, Environment, KnownRpcError, StarkTraceError, TraceOperation, TraceRpc,
};
use std::sync::Arc;
use tests::common::*;

fn block(hex: &str) -> BlockId {
    BlockId::hash(hex.parse::<Felt>().expect("Invalid felt"))
}

/// Run the traceBlockTransactions cases of the selected environment
#[tokio::test]
async fn test_trace_block_transactions_cases() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let cases =
        ctx.cases(TraceOperation::TraceBlockTransactions).expect("Failed to load fixtures");

    let report = run_cases(&ctx.rpc, &ctx.call_context(), &cases).await;

    report.assert_all_passed("traceBlockTransactions");
    assert_eq!(report.executed, cases.len());
}

#[tokio::test]
async fn test_trace_block_transactions_known_block() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let traces = ctx
        .rpc
        .trace_block_transactions(&ctx.call_context(), block(SEPOLIA_TRACE_BLOCK_HASH))
        .await
        .expect("Block traces should be found");

    assert_eq!(traces.len(), 3);
    assert!(traces.iter().any(|t| t.trace_root.is_reverted()));
}

/// Unknown block: BlockNotFound
#[tokio::test]
async fn test_trace_block_transactions_unknown_block() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let result =
        ctx.rpc.trace_block_transactions(&ctx.call_context(), block(UNKNOWN_BLOCK_HASH)).await;

    assert_rejected_with(result, &KnownRpcError::BlockNotFound.rpc_error());
}

/// Devnet defines no block trace cases and never reaches the transport
#[tokio::test]
async fn test_devnet_block_traces_make_no_calls() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");
    let transport = Arc::new(mock_transport(&ctx.loader).expect("Failed to seed fixture transport"));
    let rpc = TraceRpc::new(Dispatcher::new(transport.clone(), Environment::Devnet));

    let cases = fixtures_for(Environment::Devnet, TraceOperation::TraceBlockTransactions, &ctx.loader)
        .expect("Failed to load fixtures");
    let report = run_cases(&rpc, &ctx.call_context(), &cases).await;
    report.assert_nothing_ran();

    let result = rpc.trace_block_transactions(&ctx.call_context(), BlockId::latest()).await;
    assert!(matches!(result, Err(StarkTraceError::UnsupportedMethod { .. })));
    assert_eq!(transport.calls(), 0);
}
