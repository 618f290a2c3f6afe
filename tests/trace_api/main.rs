// Trace API Integration Tests
//
// ENV:   STARK_TRACE_ENV selects the environment (mock when unset; devnet and
//        mainnet need a reachable node, see STARK_TRACE_DEVNET_URL and
//        STARK_TRACE_MAINNET_URL)
// TESTS: Environment-selected case sets for every trace operation
//        - traceTransaction, simulateTransactions, traceBlockTransactions
//        - Fixture transport scenarios (known/unknown/rejected hashes, unknown block, cancellation)
//        - Fixture document round trips through the codec

mod fixtures;
mod simulate_transactions;
mod trace_block_transactions;
mod trace_transaction;
