//! Domain errors and the normalizer that maps transport errors onto them.
//!
//! Every query declares which [`ErrorKind`]s it considers legitimate for its
//! method. A node error whose code is in that list becomes the matching
//! domain error; anything else, including transport failures, becomes
//! [`RpcError::Internal`] with the original error chained as its source.

use std::error::Error as StdError;
use std::fmt;

use starkrpc_core::TransportError;
use thiserror::Error;

/// Node error code for "internal error" (JSON-RPC reserved range).
pub const INTERNAL_ERROR_CODE: i64 = -32603;

// ─── ErrorKind ────────────────────────────────────────────────────────────────

/// The closed set of failure categories reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    HashNotFound,
    InvalidTxnIndex,
    BlockNotFound,
    Internal,
}

impl ErrorKind {
    /// The Starknet JSON-RPC error code for this kind.
    pub const fn code(self) -> i64 {
        match self {
            Self::BlockNotFound => 24,
            Self::InvalidTxnIndex => 27,
            Self::HashNotFound => 29,
            Self::Internal => INTERNAL_ERROR_CODE,
        }
    }

    /// Canonical message for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::HashNotFound => "Transaction hash not found",
            Self::InvalidTxnIndex => "Invalid transaction index in a block",
            Self::BlockNotFound => "Block not found",
            Self::Internal => "Internal error",
        }
    }

    /// Looks up the kind a node error code stands for.
    pub fn from_code(code: i64) -> Option<Self> {
        [
            Self::HashNotFound,
            Self::InvalidTxnIndex,
            Self::BlockNotFound,
            Self::Internal,
        ]
        .into_iter()
        .find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ─── RpcError ─────────────────────────────────────────────────────────────────

/// The error every query returns.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Transaction hash not found")]
    HashNotFound,

    #[error("Invalid transaction index in a block")]
    InvalidTxnIndex,

    #[error("Block not found")]
    BlockNotFound,

    /// Transport failure, unrecognized transaction tag, malformed result, or
    /// a node error the calling query did not expect.
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl RpcError {
    /// An internal error with no underlying cause.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// An internal error chaining `source` for diagnostics.
    pub fn internal_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The domain error for `kind`, carrying its canonical message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::HashNotFound => Self::HashNotFound,
            ErrorKind::InvalidTxnIndex => Self::InvalidTxnIndex,
            ErrorKind::BlockNotFound => Self::BlockNotFound,
            ErrorKind::Internal => Self::internal(kind.message()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HashNotFound => ErrorKind::HashNotFound,
            Self::InvalidTxnIndex => ErrorKind::InvalidTxnIndex,
            Self::BlockNotFound => ErrorKind::BlockNotFound,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> i64 {
        self.kind().code()
    }

    /// The underlying transport error, if this error wraps one.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Internal {
                source: Some(source),
                ..
            } => source.downcast_ref::<TransportError>(),
            _ => None,
        }
    }
}

// ─── Normalization ────────────────────────────────────────────────────────────

/// Maps a transport error onto the domain taxonomy.
///
/// `expected` lists the kinds the calling method may legitimately report.
/// Only node errors whose code matches one of them are translated; every
/// other error is wrapped as [`RpcError::Internal`].
pub fn try_unwrap_rpc_error(err: TransportError, expected: &[ErrorKind]) -> RpcError {
    let rpc = match err {
        TransportError::Rpc(rpc) => rpc,
        other => {
            tracing::debug!(error = %other, "transport failure");
            let message = other.to_string();
            return RpcError::internal_with(message, other);
        }
    };

    let matched = expected
        .iter()
        .copied()
        .filter(|kind| *kind != ErrorKind::Internal)
        .find(|kind| kind.code() == rpc.code);

    match matched {
        Some(kind) => {
            tracing::debug!(code = rpc.code, kind = ?kind, "node reported expected error");
            RpcError::from_kind(kind)
        }
        None => {
            tracing::debug!(
                code = rpc.code,
                message = %rpc.message,
                "node reported unexpected error"
            );
            let message = rpc.message.clone();
            RpcError::internal_with(message, TransportError::Rpc(rpc))
        }
    }
}
