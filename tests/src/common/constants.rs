// ============================================================================
// Environment
// ============================================================================

/// Environment the suites run against when `STARK_TRACE_ENV` is unset
pub const DEFAULT_TEST_ENVIRONMENT: &str = "mock";

/// Upper bound for any single call made by the suites
pub const TEST_CALL_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Fixtures
// ============================================================================

/// Fixture documents shipped with this crate
pub const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/trace");

/// Block number the simulation input document targets
pub const SIMULATION_BLOCK_NUMBER: u64 = 67000;
