use stark_trace_lib::{
    codec::encode_value,
    constant::METHOD_SIMULATE_TRANSACTIONS,
    fixture::{simulate_transactions_cases, Expected},
    runner::{run_cases, run_simulate_transactions_cases},
    transport::FixtureTransport,
    types::{BlockId, SimulationFlag},
    Dispatcher, Environment, TraceOperation, TraceRpc,
};
use std::sync::Arc;
use tests::common::*;

/// Run the simulateTransactions cases of the selected environment
#[tokio::test]
async fn test_simulate_transactions_cases() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let cases = ctx.cases(TraceOperation::SimulateTransactions).expect("Failed to load fixtures");

    let report = run_cases(&ctx.rpc, &ctx.call_context(), &cases).await;

    report.assert_all_passed("simulateTransactions");
    assert_eq!(report.executed, cases.len());
}

#[test]
fn test_mainnet_simulation_case_loads() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");

    let cases = simulate_transactions_cases(Environment::Mainnet, &ctx.loader)
        .expect("Failed to load simulation fixtures");

    assert_eq!(cases.len(), 1);
    let case = &cases.cases()[0];
    assert_eq!(case.input.block_id, BlockId::number(SIMULATION_BLOCK_NUMBER));
    assert_eq!(case.input.simulation_flags, vec![SimulationFlag::SkipValidate]);
    assert_eq!(case.input.transactions.len(), 1);
    match &case.expected {
        Expected::Output(txns) => {
            assert_eq!(txns.len(), 1);
            assert!(txns[0].transaction_trace.as_invoke().is_some());
        }
        Expected::Error(e) => panic!("Expected simulated transactions, got error {e}"),
    }
}

/// The mainnet case passes against a node replaying the captured response
#[tokio::test]
async fn test_mainnet_simulation_case_against_replay() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");
    let cases = simulate_transactions_cases(Environment::Mainnet, &ctx.loader)
        .expect("Failed to load simulation fixtures");

    let mut transport = FixtureTransport::new();
    for case in cases.cases() {
        if let Expected::Output(txns) = &case.expected {
            transport = transport.with_result(
                METHOD_SIMULATE_TRANSACTIONS,
                encode_value(&case.input).expect("Failed to encode params"),
                encode_value(txns).expect("Failed to encode result"),
            );
        }
    }
    let transport = Arc::new(transport);
    let rpc = TraceRpc::new(Dispatcher::new(transport.clone(), Environment::Mainnet));

    let report = run_simulate_transactions_cases(&rpc, &ctx.call_context(), &cases).await;

    report.assert_all_passed("simulateTransactions replay");
    assert_eq!(report.executed, 1);
    assert_eq!(transport.calls(), 1);
}

/// The mock environment defines no simulation cases
#[tokio::test]
async fn test_mock_simulation_makes_no_calls() {
    let ctx = TestContext::with_environment(Environment::Mock).expect("Failed to create test context");
    let cases = simulate_transactions_cases(Environment::Mock, &ctx.loader)
        .expect("Failed to load fixtures");

    assert!(!cases.is_defined());
    let report = run_simulate_transactions_cases(&ctx.rpc, &ctx.call_context(), &cases).await;
    report.assert_nothing_ran();
}
