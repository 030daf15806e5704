//! Transport-level error types.

use thiserror::Error;

use crate::request::JsonRpcError;

/// Errors a transport can report while invoking a remote method.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, bad status, etc.).
    #[error("HTTP error: {0}")]
    Http(String),

    /// WebSocket connection/send/receive error.
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// JSON-RPC protocol-level error returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// Request timed out after the configured duration.
    #[error("Request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Result could not be deserialized into the requested shape.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns the node's error object if this is a protocol-level error.
    pub fn rpc_error(&self) -> Option<&JsonRpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the node understood the request and answered with
    /// a JSON-RPC error object.
    pub fn is_rpc_error(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }
}
