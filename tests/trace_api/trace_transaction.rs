use stark_trace_lib::{
    constant::fixtures::{
        invoke_trace_file, REJECTED_TRANSACTION_HASH, SEPOLIA_INVOKE_TRACE_HASH,
        UNKNOWN_TRANSACTION_HASH,
    },
    fixture::mock_transport,
    runner::run_cases,
    types::{ExecuteInvocation, Felt, TransactionTrace},
    CallContext, Dispatcher, Environment, KnownRpcError, RpcError, StarkTraceError,
    TraceOperation, TraceRpc,
};
use std::{sync::Arc, time::Duration};
use tests::common::*;

fn felt(hex: &str) -> Felt {
    hex.parse().expect("Invalid felt")
}

/// Run the traceTransaction cases of the selected environment
#[tokio::test]
async fn test_trace_transaction_cases() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let cases = ctx.cases(TraceOperation::TraceTransaction).expect("Failed to load fixtures");

    let report = run_cases(&ctx.rpc, &ctx.call_context(), &cases).await;

    report.assert_all_passed("traceTransaction");
    assert_eq!(report.executed, cases.len());
}

/// Known hash: the fixture trace comes back decoded
#[tokio::test]
async fn test_trace_transaction_known_hash() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let trace = ctx
        .rpc
        .trace_transaction(&ctx.call_context(), felt(SEPOLIA_INVOKE_TRACE_HASH))
        .await
        .expect("Trace should be found");

    let expected: TransactionTrace = ctx
        .loader
        .load_result(&invoke_trace_file(SEPOLIA_INVOKE_TRACE_HASH))
        .expect("Failed to load expected trace");
    assert_eq!(trace, expected);

    let invoke = trace.as_invoke().expect("Expected an invoke trace");
    assert!(matches!(invoke.execute_invocation, ExecuteInvocation::Success(_)));
    assert!(invoke.validate_invocation.is_some());
}

/// Unknown hash: HashNotFound, no result
#[tokio::test]
async fn test_trace_transaction_unknown_hash() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let result =
        ctx.rpc.trace_transaction(&ctx.call_context(), felt(UNKNOWN_TRANSACTION_HASH)).await;

    assert_rejected_with(result, &KnownRpcError::HashNotFound.rpc_error());
}

/// Rejected transaction: no trace, with the node's data payload
#[tokio::test]
async fn test_trace_transaction_rejected() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let result =
        ctx.rpc.trace_transaction(&ctx.call_context(), felt(REJECTED_TRANSACTION_HASH)).await;

    let expected = RpcError::new(10, "No trace available for transaction").with_data("REJECTED");
    assert_rejected_with(result, &expected);
}

/// Cancelling while the fixture node is still answering yields Cancelled
#[tokio::test]
async fn test_trace_transaction_cancelled_in_flight() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");
    let transport = mock_transport(&ctx.loader)
        .expect("Failed to seed fixture transport")
        .with_latency(Duration::from_secs(30));
    let rpc = TraceRpc::new(Dispatcher::new(Arc::new(transport), Environment::Mock));

    let call_ctx = CallContext::new();
    let canceller = call_ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let result = rpc.trace_transaction(&call_ctx, felt(SEPOLIA_INVOKE_TRACE_HASH)).await;
    assert_eq!(result, Err(StarkTraceError::Cancelled));
}
