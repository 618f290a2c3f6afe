use std::fmt::Debug;

use crate::{
    dispatcher::CallContext,
    error::StarkTraceError,
    fixture::{
        Expected, FixtureCase, OperationCases, SimulateTransactionsCases,
        TraceBlockTransactionsCases, TraceTransactionCases,
    },
    provider::TraceRpc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub case: String,
    pub reason: String,
}

/// Outcome of running one case set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseReport {
    pub executed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseReport {
    pub fn passed(&self) -> usize {
        self.executed - self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record<I, T: PartialEq + Debug>(
        &mut self,
        case: &FixtureCase<I, T>,
        result: Result<T, StarkTraceError>,
    ) {
        self.executed += 1;

        if let Some(reason) = mismatch(&case.expected, result) {
            log::warn!("Case '{}' failed: {reason}", case.name);
            self.failures.push(CaseFailure { case: case.name.clone(), reason });
        } else {
            log::debug!("Case '{}' passed", case.name);
        }
    }
}

fn mismatch<T: PartialEq + Debug>(
    expected: &Expected<T>,
    result: Result<T, StarkTraceError>,
) -> Option<String> {
    match (expected, result) {
        (Expected::Output(expected), Ok(actual)) if *expected == actual => None,
        (Expected::Output(_), Ok(actual)) => Some(format!("unexpected output {actual:?}")),
        (Expected::Error(expected), Err(StarkTraceError::RemoteRejected(actual)))
            if *expected == actual =>
        {
            None
        }
        (Expected::Error(expected), Err(StarkTraceError::RemoteRejected(actual))) => {
            Some(format!("expected error {expected}, node returned {actual}"))
        }
        (Expected::Error(expected), Ok(_)) => {
            Some(format!("expected error {expected}, node returned a result"))
        }
        (_, Err(e)) => Some(format!("call failed: {e}")),
    }
}

pub async fn run_trace_transaction_cases(
    rpc: &TraceRpc,
    ctx: &CallContext,
    cases: &TraceTransactionCases,
) -> CaseReport {
    let mut report = CaseReport::default();
    for case in cases.cases() {
        let result = rpc.trace_transaction(ctx, case.input).await;
        report.record(case, result);
    }
    report
}

pub async fn run_simulate_transactions_cases(
    rpc: &TraceRpc,
    ctx: &CallContext,
    cases: &SimulateTransactionsCases,
) -> CaseReport {
    let mut report = CaseReport::default();
    for case in cases.cases() {
        let request = case.input.clone();
        let result = rpc
            .simulate_transactions(ctx, request.block_id, request.transactions, request.simulation_flags)
            .await;
        report.record(case, result);
    }
    report
}

pub async fn run_trace_block_transactions_cases(
    rpc: &TraceRpc,
    ctx: &CallContext,
    cases: &TraceBlockTransactionsCases,
) -> CaseReport {
    let mut report = CaseReport::default();
    for case in cases.cases() {
        let result = rpc.trace_block_transactions(ctx, case.input).await;
        report.record(case, result);
    }
    report
}

/// Run every case in order. An undefined set makes no calls.
pub async fn run_cases(rpc: &TraceRpc, ctx: &CallContext, cases: &OperationCases) -> CaseReport {
    if !cases.is_defined() {
        log::info!("No {} cases defined for {}, skipping", cases.operation(), rpc.environment());
        return CaseReport::default();
    }

    log::info!("Running {} {} cases against {}", cases.len(), cases.operation(), rpc.environment());
    let report = match cases {
        OperationCases::TraceTransaction(cases) => run_trace_transaction_cases(rpc, ctx, cases).await,
        OperationCases::SimulateTransactions(cases) => {
            run_simulate_transactions_cases(rpc, ctx, cases).await
        }
        OperationCases::TraceBlockTransactions(cases) => {
            run_trace_block_transactions_cases(rpc, ctx, cases).await
        }
    };

    log::info!(
        "{}: {} passed, {} failed",
        cases.operation(),
        report.passed(),
        report.failures.len()
    );
    report
}
