//! starkrpc-provider — typed Starknet transaction queries.
//!
//! # Overview
//!
//! - [`adapt_transaction`] — turns a [`TransactionEnvelope`] into the one
//!   concrete [`Transaction`] variant its `(type, version)` pair selects
//! - [`try_unwrap_rpc_error`] — maps a [`TransportError`] onto the closed
//!   [`ErrorKind`] taxonomy, given the kinds a method may legitimately report
//! - [`Provider`] — by-hash, by-block-position, receipt and status queries
//!   composing the two over any [`RpcTransport`]
//!
//! # Quick start
//! ```rust,no_run
//! use std::sync::Arc;
//! use starkrpc_core::RpcTransport;
//! use starkrpc_provider::{Provider, RpcError};
//! use starkrpc_types::{Felt, TransactionInfo};
//!
//! async fn show(transport: Arc<dyn RpcTransport>, hash: Felt) -> Result<(), RpcError> {
//!     let provider = Provider::new(transport);
//!     let tx = provider.transaction_by_hash(hash).await?;
//!     println!("{} v{:#x}", tx.tx_type(), tx.version());
//!     Ok(())
//! }
//! ```
//!
//! [`TransactionEnvelope`]: starkrpc_types::TransactionEnvelope
//! [`Transaction`]: starkrpc_types::Transaction
//! [`TransportError`]: starkrpc_core::TransportError
//! [`RpcTransport`]: starkrpc_core::RpcTransport

pub mod adapt;
pub mod errors;
pub mod provider;

pub use adapt::adapt_transaction;
pub use errors::{try_unwrap_rpc_error, ErrorKind, RpcError, INTERNAL_ERROR_CODE};
pub use provider::{methods, Provider};
