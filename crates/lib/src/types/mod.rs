pub mod block_id;
pub mod felt;
pub mod simulation;
pub mod trace;

pub use block_id::{BlockId, BlockTag};
pub use felt::Felt;
pub use simulation::{
    BroadcastedDeclareTxn, BroadcastedDeployAccountTxn, BroadcastedInvokeTxn, BroadcastedTxn,
    FeeEstimate, SimulateTransactionInput, SimulateTransactionOutput, SimulatedTransaction,
    SimulationFlag,
};
pub use trace::{
    ExecuteInvocation, FunctionInvocation, InvokeTxnTrace, StateDiff, TraceWithHash,
    TransactionTrace,
};
