pub mod simulate_transactions;
pub mod trace_block_transactions;
pub mod trace_transaction;
