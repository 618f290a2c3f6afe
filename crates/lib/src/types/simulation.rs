use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{BlockId, Felt, TransactionTrace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimulationFlag {
    SkipValidate,
    SkipFeeCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataAvailabilityMode {
    L1,
    L2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBounds {
    pub max_amount: Felt,
    pub max_price_per_unit: Felt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBoundsMapping {
    pub l1_gas: ResourceBounds,
    pub l2_gas: ResourceBounds,
}

/// Fields shared by v3 broadcast transactions. All optional so v1 payloads
/// (which carry `max_fee` instead) decode through the same structs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V3TransactionFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_bounds: Option<ResourceBoundsMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_data: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce_data_availability_mode: Option<DataAvailabilityMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_data_availability_mode: Option<DataAvailabilityMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastedInvokeTxn {
    pub sender_address: Felt,
    pub calldata: Vec<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Felt>,
    pub version: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_deployment_data: Option<Vec<Felt>>,
    #[serde(flatten)]
    pub v3: V3TransactionFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastedDeclareTxn {
    pub sender_address: Felt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiled_class_hash: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Felt>,
    pub version: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    /// Class definitions are passed through untouched.
    pub contract_class: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_deployment_data: Option<Vec<Felt>>,
    #[serde(flatten)]
    pub v3: V3TransactionFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastedDeployAccountTxn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Felt>,
    pub version: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
    pub class_hash: Felt,
    #[serde(flatten)]
    pub v3: V3TransactionFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BroadcastedTxn {
    #[serde(rename = "INVOKE")]
    Invoke(BroadcastedInvokeTxn),
    #[serde(rename = "DECLARE")]
    Declare(BroadcastedDeclareTxn),
    #[serde(rename = "DEPLOY_ACCOUNT")]
    DeployAccount(BroadcastedDeployAccountTxn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    #[serde(rename = "WEI")]
    Wei,
    #[serde(rename = "FRI")]
    Fri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub gas_consumed: Felt,
    pub gas_price: Felt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_gas_consumed: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_gas_price: Option<Felt>,
    pub overall_fee: Felt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<PriceUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedTransaction {
    pub transaction_trace: TransactionTrace,
    pub fee_estimation: FeeEstimate,
}

/// Parameters of one `starknet_simulateTransactions` call as stored in fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateTransactionInput {
    pub block_id: BlockId,
    #[serde(alias = "transactions")]
    pub txns: Vec<BroadcastedTxn>,
    #[serde(default)]
    pub simulation_flags: Vec<SimulationFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateTransactionOutput {
    #[serde(rename = "result")]
    pub txns: Vec<SimulatedTransaction>,
}
