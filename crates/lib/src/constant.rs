pub const JSONRPC_VERSION: &str = "2.0";

// Trace API methods
pub const METHOD_TRACE_TRANSACTION: &str = "starknet_traceTransaction";
pub const METHOD_SIMULATE_TRANSACTIONS: &str = "starknet_simulateTransactions";
pub const METHOD_TRACE_BLOCK_TRANSACTIONS: &str = "starknet_traceBlockTransactions";

// Environment variables
pub const ENVIRONMENT_ENV: &str = "STARK_TRACE_ENV";
pub const DEVNET_URL_ENV: &str = "STARK_TRACE_DEVNET_URL";
pub const MAINNET_URL_ENV: &str = "STARK_TRACE_MAINNET_URL";
pub const FIXTURE_DIR_ENV: &str = "STARK_TRACE_FIXTURE_DIR";
pub const REQUEST_TIMEOUT_ENV: &str = "STARK_TRACE_REQUEST_TIMEOUT_SECS";
pub const CONFIG_PATH_ENV: &str = "STARK_TRACE_CONFIG";

// Endpoints
pub const DEFAULT_DEVNET_URL: &str = "http://127.0.0.1:5050/rpc";
pub const DEFAULT_FIXTURE_DIR: &str = "tests/trace";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

// Fixture documents
pub mod fixtures {
    pub const SEPOLIA_INVOKE_TRACE_HASH: &str =
        "0x6a4a9c4f1a530f7d6dd7bba9b71f090a70d1e3bbde80998fde11a08aab8b282";
    pub const SEPOLIA_TRACE_BLOCK_HASH: &str =
        "0x42a4c6a4c3dffee2cce78f04259b499437049b0084c3296da9fbbec7eda79b2";

    /// Hash the fixture node reports as unknown.
    pub const UNKNOWN_TRANSACTION_HASH: &str = "0xc0ffee";
    /// Hash the fixture node reports as rejected, with no trace.
    pub const REJECTED_TRANSACTION_HASH: &str = "0xf00d";
    pub const UNKNOWN_BLOCK_HASH: &str = "0x0";

    pub const REJECTED_TRACE_CODE: i64 = 10;
    pub const REJECTED_TRACE_MESSAGE: &str = "No trace available for transaction";
    pub const REJECTED_TRACE_DATA: &str = "REJECTED";

    pub const SIMULATE_INVOKE_INPUT_FILE: &str = "simulateInvokeTx.json";
    pub const SIMULATE_INVOKE_OUTPUT_FILE: &str = "simulateInvokeTxResp.json";

    pub fn invoke_trace_file(hash: &str) -> String {
        format!("sepoliaInvokeTrace_{hash}.json")
    }

    pub fn block_trace_file(hash: &str) -> String {
        format!("sepoliaBlockTrace_{hash}.json")
    }
}
