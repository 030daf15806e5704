//! The `RpcTransport` trait — the invoker every query goes through.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// The async trait an RPC transport must implement.
///
/// HTTP/WebSocket framing, retries and connection management are the
/// implementor's business; callers only see [`RpcTransport::call`].
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the response.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// Return the transport's identifier (URL or name).
    fn url(&self) -> &str;

    /// Call a method and deserialize the result into `T`.
    ///
    /// A JSON-RPC error object in the response surfaces as
    /// [`TransportError::Rpc`]; a result that does not fit `T` as
    /// [`TransportError::Deserialization`].
    async fn call<T: DeserializeOwned>(
        &self,
        id: u64,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, TransportError>
    where
        Self: Sized,
    {
        call_dyn(self, id, method, params).await
    }
}

/// [`RpcTransport::call`] for trait objects.
pub async fn call_dyn<T: DeserializeOwned>(
    transport: &(impl RpcTransport + ?Sized),
    id: u64,
    method: &str,
    params: Vec<Value>,
) -> Result<T, TransportError> {
    tracing::trace!(id, method, url = transport.url(), "sending request");
    let req = JsonRpcRequest::new(id, method, params);
    let resp = transport.send(req).await?;
    let result = resp.into_result().map_err(TransportError::Rpc)?;
    serde_json::from_value(result).map_err(TransportError::Deserialization)
}
