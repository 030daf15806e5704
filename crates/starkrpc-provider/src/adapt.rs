//! Tagged-union decoding of wire transactions.
//!
//! The envelope is re-encoded to its canonical JSON form and that value is
//! decoded again into the one variant its `(type, version)` pair selects.
//! Variant structs reject missing and foreign fields, so a node that sends
//! a body inconsistent with its own tag fails here instead of producing a
//! half-populated transaction.

use serde::de::DeserializeOwned;
use serde_json::Value;
use starkrpc_types::{Felt, Transaction, TransactionEnvelope, TransactionTag, TransactionType};

use crate::errors::RpcError;

/// Decodes `envelope` into the concrete variant its tags select.
///
/// Supported pairs: `INVOKE` v0/v1/v3, `DECLARE` v0/v1/v2, and `DEPLOY`,
/// `DEPLOY_ACCOUNT`, `L1_HANDLER` at any version. Anything else is an
/// [`RpcError::Internal`] naming the offending tag.
pub fn adapt_transaction(envelope: &TransactionEnvelope) -> Result<Transaction, RpcError> {
    let canonical = serde_json::to_value(envelope)
        .map_err(|e| RpcError::internal_with("failed to re-encode transaction", e))?;

    let ty = match &envelope.tag {
        TransactionTag::Known(ty) => *ty,
        TransactionTag::Unknown(raw) => {
            tracing::warn!(tag = %raw, "unknown transaction type");
            return Err(RpcError::internal(format!("unknown transaction type {raw}")));
        }
    };

    let version = envelope.version;
    match ty {
        TransactionType::Invoke => match version {
            Some(v) if v == Felt::ZERO => decode(canonical, Transaction::InvokeV0),
            Some(v) if v == Felt::ONE => decode(canonical, Transaction::InvokeV1),
            Some(v) if v == Felt::THREE => decode(canonical, Transaction::InvokeV3),
            _ => Err(unsupported_version(ty, version)),
        },
        TransactionType::Declare => match version {
            Some(v) if v == Felt::ZERO => decode(canonical, Transaction::DeclareV0),
            Some(v) if v == Felt::ONE => decode(canonical, Transaction::DeclareV1),
            Some(v) if v == Felt::TWO => decode(canonical, Transaction::DeclareV2),
            _ => Err(unsupported_version(ty, version)),
        },
        TransactionType::Deploy => decode(canonical, Transaction::Deploy),
        TransactionType::DeployAccount => decode(canonical, Transaction::DeployAccount),
        TransactionType::L1Handler => decode(canonical, Transaction::L1Handler),
    }
}

fn decode<T: DeserializeOwned>(
    canonical: Value,
    wrap: fn(T) -> Transaction,
) -> Result<Transaction, RpcError> {
    serde_json::from_value(canonical)
        .map(wrap)
        .map_err(|e| RpcError::internal_with(e.to_string(), e))
}

fn unsupported_version(ty: TransactionType, version: Option<Felt>) -> RpcError {
    let version = match version {
        Some(v) => format!("{v:#x}"),
        None => "<missing>".to_string(),
    };
    tracing::warn!(%ty, %version, "unsupported transaction version");
    RpcError::internal(format!("unsupported {ty} transaction version {version}"))
}
