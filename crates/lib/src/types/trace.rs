use serde::{Deserialize, Serialize};

use crate::types::Felt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPointType {
    External,
    L1Handler,
    Constructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallType {
    LibraryCall,
    Call,
    Delegate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedEvent {
    pub order: u64,
    pub keys: Vec<Felt>,
    pub data: Vec<Felt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedMessage {
    pub order: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Felt>,
    pub to_address: Felt,
    pub payload: Vec<Felt>,
}

/// Cairo VM resources consumed by a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResources {
    pub steps: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_holes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_check_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pedersen_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poseidon_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec_op_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecdsa_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitwise_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keccak_builtin_applications: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_arena_builtin: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAvailability {
    pub l1_gas: u64,
    pub l1_data_gas: u64,
}

/// Resources of a whole transaction: computation plus data availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResources {
    #[serde(flatten)]
    pub computation: ComputationResources,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_availability: Option<DataAvailability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInvocation {
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub calldata: Vec<Felt>,
    pub caller_address: Felt,
    pub class_hash: Felt,
    pub entry_point_type: EntryPointType,
    pub call_type: CallType,
    pub result: Vec<Felt>,
    pub calls: Vec<FunctionInvocation>,
    pub events: Vec<OrderedEvent>,
    pub messages: Vec<OrderedMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_resources: Option<ComputationResources>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevertedInvocation {
    pub revert_reason: String,
}

/// Outcome of the `__execute__` phase of an invoke transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecuteInvocation {
    Reverted(RevertedInvocation),
    Success(FunctionInvocation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    pub key: Felt,
    pub value: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStorageDiff {
    pub address: Felt,
    pub storage_entries: Vec<StorageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredClass {
    pub class_hash: Felt,
    pub compiled_class_hash: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    pub address: Felt,
    pub class_hash: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacedClass {
    pub contract_address: Felt,
    pub class_hash: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceUpdate {
    pub contract_address: Felt,
    pub nonce: Felt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff {
    pub storage_diffs: Vec<ContractStorageDiff>,
    pub deprecated_declared_classes: Vec<Felt>,
    pub declared_classes: Vec<DeclaredClass>,
    pub deployed_contracts: Vec<DeployedContract>,
    pub replaced_classes: Vec<ReplacedClass>,
    pub nonces: Vec<NonceUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeTxnTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_invocation: Option<FunctionInvocation>,
    pub execute_invocation: ExecuteInvocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_transfer_invocation: Option<FunctionInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<StateDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_resources: Option<ExecutionResources>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareTxnTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_invocation: Option<FunctionInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_transfer_invocation: Option<FunctionInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<StateDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_resources: Option<ExecutionResources>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployAccountTxnTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_invocation: Option<FunctionInvocation>,
    pub constructor_invocation: FunctionInvocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_transfer_invocation: Option<FunctionInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<StateDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_resources: Option<ExecutionResources>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1HandlerTxnTrace {
    pub function_invocation: FunctionInvocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<StateDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_resources: Option<ExecutionResources>,
}

/// Execution trace of one transaction, discriminated by the node's `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionTrace {
    #[serde(rename = "INVOKE")]
    Invoke(InvokeTxnTrace),
    #[serde(rename = "DECLARE")]
    Declare(DeclareTxnTrace),
    #[serde(rename = "DEPLOY_ACCOUNT")]
    DeployAccount(DeployAccountTxnTrace),
    #[serde(rename = "L1_HANDLER")]
    L1Handler(L1HandlerTxnTrace),
}

impl TransactionTrace {
    pub fn as_invoke(&self) -> Option<&InvokeTxnTrace> {
        match self {
            TransactionTrace::Invoke(trace) => Some(trace),
            _ => None,
        }
    }

    pub fn state_diff(&self) -> Option<&StateDiff> {
        match self {
            TransactionTrace::Invoke(trace) => trace.state_diff.as_ref(),
            TransactionTrace::Declare(trace) => trace.state_diff.as_ref(),
            TransactionTrace::DeployAccount(trace) => trace.state_diff.as_ref(),
            TransactionTrace::L1Handler(trace) => trace.state_diff.as_ref(),
        }
    }

    pub fn is_reverted(&self) -> bool {
        matches!(
            self,
            TransactionTrace::Invoke(InvokeTxnTrace {
                execute_invocation: ExecuteInvocation::Reverted(_),
                ..
            })
        )
    }
}

/// Element of a `starknet_traceBlockTransactions` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceWithHash {
    pub transaction_hash: Felt,
    pub trace_root: TransactionTrace,
}
