//! starkrpc-types — wire types for the Starknet JSON-RPC API.
//!
//! This crate defines:
//! - [`Felt`] — the field element every hash, address and amount is encoded as
//! - [`BlockId`] — how a block is referenced in request parameters
//! - [`TransactionEnvelope`] — the generic, type/version-tagged transaction
//!   shape every wire transaction is first decoded into
//! - the concrete transaction variants and the [`Transaction`] sum type
//! - receipt and status shapes ([`TransactionReceiptWithBlockInfo`],
//!   [`DetailedTransactionReceipt`], [`TxnStatusResp`])

pub mod block;
pub mod receipt;
pub mod transaction;

pub use starknet_types_core::felt::Felt;

pub use block::{BlockId, BlockTag};
pub use receipt::{
    DetailedTransactionReceipt, Event, ExecutionResources, FeePayment, FeeUnit, MsgToL1,
    TransactionReceipt, TransactionReceiptWithBlockInfo, TxnExecutionStatus, TxnFinalityStatus,
    TxnStatus, TxnStatusResp,
};
pub use transaction::{
    DataAvailabilityMode, DeclareTxnV0, DeclareTxnV1, DeclareTxnV2, DeployAccountTxn, DeployTxn,
    InvokeTxnV0, InvokeTxnV1, InvokeTxnV3, L1HandlerTxn, ResourceBound, ResourceBounds,
    Transaction, TransactionEnvelope, TransactionInfo, TransactionTag, TransactionType,
};
