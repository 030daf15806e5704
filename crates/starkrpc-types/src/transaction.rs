//! Transaction wire types.
//!
//! A transaction arrives as a loosely-shaped object whose `type` and
//! `version` members decide which concrete variant it really is. It is
//! first decoded into a [`TransactionEnvelope`] (every field optional),
//! then re-decoded into exactly one variant struct. The variant structs are
//! strict: every field is required and unlisted fields are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Felt;

// ─── Tags ─────────────────────────────────────────────────────────────────────

/// The five transaction kinds of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "INVOKE")]
    Invoke,
    #[serde(rename = "DECLARE")]
    Declare,
    #[serde(rename = "DEPLOY")]
    Deploy,
    #[serde(rename = "DEPLOY_ACCOUNT")]
    DeployAccount,
    #[serde(rename = "L1_HANDLER")]
    L1Handler,
}

impl TransactionType {
    /// The wire string of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoke => "INVOKE",
            Self::Declare => "DECLARE",
            Self::Deploy => "DEPLOY",
            Self::DeployAccount => "DEPLOY_ACCOUNT",
            Self::L1Handler => "L1_HANDLER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` member of an envelope as received.
///
/// Unrecognized tags are kept verbatim so they can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionTag {
    Known(TransactionType),
    Unknown(String),
}

impl fmt::Display for TransactionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(ty) => write!(f, "{ty}"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl From<TransactionType> for TransactionTag {
    fn from(ty: TransactionType) -> Self {
        Self::Known(ty)
    }
}

// ─── Fee market (v3) ──────────────────────────────────────────────────────────

/// Where nonce or fee state is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataAvailabilityMode {
    L1,
    L2,
}

/// Upper bound a v3 transaction is willing to pay for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceBound {
    pub max_amount: Felt,
    pub max_price_per_unit: Felt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceBounds {
    pub l1_gas: ResourceBound,
    pub l2_gas: ResourceBound,
}

// ─── Envelope ─────────────────────────────────────────────────────────────────

/// The generic wire shape every transaction is first decoded into.
///
/// Holds the union of all variant fields. Absent fields are skipped when the
/// envelope is re-encoded, so the canonical form only carries what the node
/// actually sent; members outside the union are dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Felt>,
    #[serde(rename = "type")]
    pub tag: TransactionTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address_salt: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_hash: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiled_class_hash: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor_calldata: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calldata: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point_selector: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_bounds: Option<ResourceBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<Felt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_data: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_deployment_data: Option<Vec<Felt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce_data_availability_mode: Option<DataAvailabilityMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_data_availability_mode: Option<DataAvailabilityMode>,
}

// ─── Variants ─────────────────────────────────────────────────────────────────

/// Version 0 invoke: calls an entry point directly, no nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokeTxnV0 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub calldata: Vec<Felt>,
}

/// Version 1 invoke: account `__execute__` with nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokeTxnV1 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub sender_address: Felt,
    pub calldata: Vec<Felt>,
}

/// Version 3 invoke: resource bounds instead of `max_fee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokeTxnV3 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub sender_address: Felt,
    pub calldata: Vec<Felt>,
    pub resource_bounds: ResourceBounds,
    pub tip: Felt,
    pub paymaster_data: Vec<Felt>,
    pub account_deployment_data: Vec<Felt>,
    pub nonce_data_availability_mode: DataAvailabilityMode,
    pub fee_data_availability_mode: DataAvailabilityMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclareTxnV0 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub sender_address: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub class_hash: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclareTxnV1 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub sender_address: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub class_hash: Felt,
}

/// Version 2 declare: Sierra class plus its compiled class hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclareTxnV2 {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub sender_address: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub class_hash: Felt,
    pub compiled_class_hash: Felt,
}

/// Legacy deploy (pre-0.11 blocks only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployTxn {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub class_hash: Felt,
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployAccountTxn {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub max_fee: Felt,
    pub signature: Vec<Felt>,
    pub nonce: Felt,
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
    pub class_hash: Felt,
}

/// A message consumed from L1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct L1HandlerTxn {
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub version: Felt,
    pub nonce: Felt,
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub calldata: Vec<Felt>,
}

// ─── Transaction ──────────────────────────────────────────────────────────────

/// What every transaction can report about itself, whatever its shape.
pub trait TransactionInfo {
    fn transaction_hash(&self) -> Felt;
    fn tx_type(&self) -> TransactionType;
    fn version(&self) -> Felt;
}

/// A decoded transaction: exactly one concrete variant.
///
/// Serializes back to the variant's wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Transaction {
    InvokeV0(InvokeTxnV0),
    InvokeV1(InvokeTxnV1),
    InvokeV3(InvokeTxnV3),
    DeclareV0(DeclareTxnV0),
    DeclareV1(DeclareTxnV1),
    DeclareV2(DeclareTxnV2),
    Deploy(DeployTxn),
    DeployAccount(DeployAccountTxn),
    L1Handler(L1HandlerTxn),
}

macro_rules! impl_variants {
    ($($variant:ident => $ty:ident),+ $(,)?) => {
        $(
            impl TransactionInfo for $ty {
                fn transaction_hash(&self) -> Felt {
                    self.transaction_hash
                }

                fn tx_type(&self) -> TransactionType {
                    self.r#type
                }

                fn version(&self) -> Felt {
                    self.version
                }
            }

            impl From<$ty> for Transaction {
                fn from(tx: $ty) -> Self {
                    Self::$variant(tx)
                }
            }
        )+

        impl Transaction {
            fn info(&self) -> &dyn TransactionInfo {
                match self {
                    $(Self::$variant(tx) => tx,)+
                }
            }
        }
    };
}

impl_variants! {
    InvokeV0 => InvokeTxnV0,
    InvokeV1 => InvokeTxnV1,
    InvokeV3 => InvokeTxnV3,
    DeclareV0 => DeclareTxnV0,
    DeclareV1 => DeclareTxnV1,
    DeclareV2 => DeclareTxnV2,
    Deploy => DeployTxn,
    DeployAccount => DeployAccountTxn,
    L1Handler => L1HandlerTxn,
}

impl TransactionInfo for Transaction {
    fn transaction_hash(&self) -> Felt {
        self.info().transaction_hash()
    }

    fn tx_type(&self) -> TransactionType {
        self.info().tx_type()
    }

    fn version(&self) -> Felt {
        self.info().version()
    }
}
