//! starkrpc-core — the invoker contract consumed by starkrpc.
//!
//! # Overview
//!
//! The query layer never talks to the network itself. It goes through an
//! implementation of [`RpcTransport`], which performs one JSON-RPC round
//! trip and decodes the `result` member into a caller-chosen type. This
//! crate defines:
//!
//! - [`RpcTransport`] — the async trait every transport implements
//! - [`call_dyn`] — `call` for `Arc<dyn RpcTransport>`
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] / [`JsonRpcError`] — wire types
//! - [`TransportError`] — structured transport error type

pub mod error;
pub mod request;
pub mod transport;

pub use error::TransportError;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};
pub use transport::{call_dyn, RpcTransport};
