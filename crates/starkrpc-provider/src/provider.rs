//! Typed transaction queries over an [`RpcTransport`].
//!
//! Each query is one round trip: call the method, decode (or adapt) the
//! result, and on failure normalize the error against the kinds that
//! method may legitimately report. Nothing is retried or cached here; wrap
//! the provider if you need either. Timeouts and cancellation belong to the
//! caller (`tokio::time::timeout`, or dropping the future).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use starkrpc_core::{call_dyn, RpcTransport};
use starkrpc_types::{
    BlockId, DetailedTransactionReceipt, Felt, Transaction, TransactionEnvelope,
    TransactionReceiptWithBlockInfo, TxnStatusResp,
};

use crate::adapt::adapt_transaction;
use crate::errors::{try_unwrap_rpc_error, ErrorKind, RpcError};

/// Wire method names used by the provider.
pub mod methods {
    pub const GET_TRANSACTION_BY_HASH: &str = "starknet_getTransactionByHash";
    pub const GET_TRANSACTION_BY_BLOCK_ID_AND_INDEX: &str =
        "starknet_getTransactionByBlockIdAndIndex";
    pub const GET_TRANSACTION_RECEIPT: &str = "starknet_getTransactionReceipt";
    pub const GET_TRANSACTION_STATUS: &str = "starknet_getTransactionStatus";
}

/// Client for the transaction-related Starknet JSON-RPC methods.
///
/// Cheap to share behind an `Arc`; the only state is the request-id counter.
pub struct Provider {
    transport: Arc<dyn RpcTransport>,
    next_id: AtomicU64,
}

impl Provider {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn transport(&self) -> &Arc<dyn RpcTransport> {
        &self.transport
    }

    /// Retrieves a transaction by its hash.
    pub async fn transaction_by_hash(&self, hash: Felt) -> Result<Transaction, RpcError> {
        let envelope: TransactionEnvelope = self
            .request(
                methods::GET_TRANSACTION_BY_HASH,
                vec![param(hash)?],
                &[ErrorKind::HashNotFound],
            )
            .await?;
        adapt_transaction(&envelope)
    }

    /// Retrieves the `index`-th transaction of a block.
    pub async fn transaction_by_block_id_and_index(
        &self,
        block_id: BlockId,
        index: u64,
    ) -> Result<Transaction, RpcError> {
        let envelope: TransactionEnvelope = self
            .request(
                methods::GET_TRANSACTION_BY_BLOCK_ID_AND_INDEX,
                vec![param(block_id)?, param(index)?],
                &[ErrorKind::InvalidTxnIndex, ErrorKind::BlockNotFound],
            )
            .await?;
        adapt_transaction(&envelope)
    }

    /// Fetches the receipt of a transaction, with the block it landed in.
    pub async fn transaction_receipt(
        &self,
        hash: Felt,
    ) -> Result<TransactionReceiptWithBlockInfo, RpcError> {
        self.request(
            methods::GET_TRANSACTION_RECEIPT,
            vec![param(hash)?],
            &[ErrorKind::HashNotFound],
        )
        .await
    }

    /// Fetches the same receipt as [`Provider::transaction_receipt`], decoded
    /// into the flat [`DetailedTransactionReceipt`] shape.
    ///
    /// Fails for pending receipts, which carry no block hash or number.
    pub async fn transaction_receipt_detailed(
        &self,
        hash: Felt,
    ) -> Result<DetailedTransactionReceipt, RpcError> {
        self.request(
            methods::GET_TRANSACTION_RECEIPT,
            vec![param(hash)?],
            &[ErrorKind::HashNotFound],
        )
        .await
    }

    /// Gets the status of a transaction, which may still be in the mempool
    /// or may have been dropped from it.
    pub async fn transaction_status(&self, hash: Felt) -> Result<TxnStatusResp, RpcError> {
        self.request(
            methods::GET_TRANSACTION_STATUS,
            vec![param(hash)?],
            &[ErrorKind::HashNotFound],
        )
        .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
        expected: &[ErrorKind],
    ) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id, method, url = self.transport.url(), "starknet rpc call");
        call_dyn(self.transport.as_ref(), id, method, params)
            .await
            .map_err(|e| try_unwrap_rpc_error(e, expected))
    }
}

fn param(value: impl Serialize) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::internal_with("failed to encode parameter", e))
}
