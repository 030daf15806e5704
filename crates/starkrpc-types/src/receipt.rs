//! Receipt and status wire types.
//!
//! Unlike transactions these are decoded directly, with no tag dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transaction::TransactionType;
use crate::Felt;

// ─── Status enums ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxnExecutionStatus {
    Succeeded,
    Reverted,
}

/// Finality of an executed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxnFinalityStatus {
    #[serde(rename = "ACCEPTED_ON_L2")]
    AcceptedOnL2,
    #[serde(rename = "ACCEPTED_ON_L1")]
    AcceptedOnL1,
}

/// Lifecycle status, including states before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxnStatus {
    #[serde(rename = "RECEIVED")]
    Received,
    #[serde(rename = "REJECTED")]
    Rejected,
    #[serde(rename = "ACCEPTED_ON_L2")]
    AcceptedOnL2,
    #[serde(rename = "ACCEPTED_ON_L1")]
    AcceptedOnL1,
}

// ─── Receipt ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeUnit {
    Wei,
    Fri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePayment {
    pub amount: Felt,
    pub unit: FeeUnit,
}

/// A message sent from L2 to L1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgToL1 {
    pub from_address: Felt,
    pub to_address: Felt,
    pub payload: Vec<Felt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub from_address: Felt,
    pub keys: Vec<Felt>,
    pub data: Vec<Felt>,
}

/// Gas consumed for publishing state diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataAvailabilityResources {
    pub l1_gas: u64,
    pub l1_data_gas: u64,
}

/// Cairo VM resources used while executing the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecutionResources {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_availability: Option<DataAvailabilityResources>,
}

/// The common receipt body shared by every transaction kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub actual_fee: FeePayment,
    pub execution_status: TxnExecutionStatus,
    pub finality_status: TxnFinalityStatus,
    #[serde(default)]
    pub messages_sent: Vec<MsgToL1>,
    #[serde(default)]
    pub events: Vec<Event>,
    pub execution_resources: ExecutionResources,
    /// Set when `execution_status` is `REVERTED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert_reason: Option<String>,
    /// Deploy and deploy-account receipts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Felt>,
    /// L1 handler receipts only. An L1 hash, not necessarily a valid felt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_hash: Option<String>,
}

impl TransactionReceipt {
    pub fn is_reverted(&self) -> bool {
        self.execution_status == TxnExecutionStatus::Reverted
    }
}

/// A receipt plus the block it was included in.
///
/// Both block members are absent while the block is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceiptWithBlockInfo {
    #[serde(flatten)]
    pub receipt: TransactionReceipt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl TransactionReceiptWithBlockInfo {
    pub fn is_pending(&self) -> bool {
        self.block_hash.is_none()
    }
}

// ─── Detailed receipt ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedFee {
    pub amount: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedEvent {
    pub data: Vec<String>,
    pub from_address: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedDataAvailability {
    pub l1_data_gas: u64,
    pub l1_gas: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedExecutionResources {
    pub data_availability: DetailedDataAvailability,
    #[serde(default)]
    pub ec_op_builtin_applications: u64,
    #[serde(default)]
    pub pedersen_builtin_applications: u64,
    #[serde(default)]
    pub range_check_builtin_applications: u64,
    pub steps: u64,
}

/// A flat, untyped rendering of the same `starknet_getTransactionReceipt`
/// result: hashes and statuses as plain strings, block info required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedTransactionReceipt {
    pub actual_fee: DetailedFee,
    pub block_hash: String,
    pub block_number: u64,
    pub events: Vec<DetailedEvent>,
    pub execution_resources: DetailedExecutionResources,
    pub execution_status: String,
    pub finality_status: String,
    pub messages_sent: Vec<Value>,
    pub transaction_hash: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// Result of `starknet_getTransactionStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnStatusResp {
    pub finality_status: TxnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_status: Option<TxnExecutionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}
