use stark_trace_lib::{runner::CaseReport, RpcError, StarkTraceError};
use std::fmt::Debug;

/// Assertions over the outcome of a case run
pub trait ReportAssertions {
    /// Assert every executed case passed
    fn assert_all_passed(&self, label: &str);

    /// Assert the run made no calls at all
    fn assert_nothing_ran(&self);
}

impl ReportAssertions for CaseReport {
    fn assert_all_passed(&self, label: &str) {
        if !self.is_success() {
            let details: Vec<String> =
                self.failures.iter().map(|f| format!("  {}: {}", f.case, f.reason)).collect();
            panic!(
                "{label}: {} of {} cases failed\n{}",
                self.failures.len(),
                self.executed,
                details.join("\n")
            );
        }
    }

    fn assert_nothing_ran(&self) {
        assert_eq!(self.executed, 0, "Expected no cases to run");
        assert!(self.failures.is_empty(), "Expected no failures");
    }
}

/// Assert a call was rejected by the node with exactly `expected`
pub fn assert_rejected_with<T: Debug>(result: Result<T, StarkTraceError>, expected: &RpcError) {
    match result {
        Err(StarkTraceError::RemoteRejected(actual)) => assert_eq!(&actual, expected),
        other => panic!("Expected node rejection {expected}, got {other:?}"),
    }
}
