//! Golden fixture integration tests for starkrpc-provider.
//!
//! Each fixture under `fixtures/` holds a raw JSON-RPC response as a node
//! would send it. A transport replays that response and the test asserts
//! what the provider turns it into.

use std::sync::Arc;

use async_trait::async_trait;
use starkrpc_core::{JsonRpcRequest, JsonRpcResponse, RpcTransport, TransportError};
use starkrpc_provider::{ErrorKind, Provider, RpcError};
use starkrpc_types::{
    Felt, FeeUnit, Transaction, TransactionInfo, TransactionType, TxnExecutionStatus,
    TxnFinalityStatus, TxnStatus,
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures");
    p.push(name);
    p
}

fn load_fixture(name: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(fixture_path(name)).expect("fixture not found");
    serde_json::from_str(&content).expect("invalid fixture JSON")
}

/// Replays a recorded response for every request.
struct ReplayTransport {
    response: JsonRpcResponse,
}

#[async_trait]
impl RpcTransport for ReplayTransport {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let mut resp = self.response.clone();
        resp.id = req.id;
        Ok(resp)
    }

    fn url(&self) -> &str {
        "replay"
    }
}

fn provider_for(fixture: &serde_json::Value) -> Provider {
    let response: JsonRpcResponse =
        serde_json::from_value(fixture["response"].clone()).expect("invalid response");
    Provider::new(Arc::new(ReplayTransport { response }))
}

fn variant_name(tx: &Transaction) -> &'static str {
    match tx {
        Transaction::InvokeV0(_) => "InvokeV0",
        Transaction::InvokeV1(_) => "InvokeV1",
        Transaction::InvokeV3(_) => "InvokeV3",
        Transaction::DeclareV0(_) => "DeclareV0",
        Transaction::DeclareV1(_) => "DeclareV1",
        Transaction::DeclareV2(_) => "DeclareV2",
        Transaction::Deploy(_) => "Deploy",
        Transaction::DeployAccount(_) => "DeployAccount",
        Transaction::L1Handler(_) => "L1Handler",
    }
}

fn felt(hex: &str) -> Felt {
    Felt::from_hex(hex).expect("invalid felt")
}

async fn assert_adapts(name: &str) -> Transaction {
    let f = load_fixture(name);
    let provider = provider_for(&f);
    let expected_hash = felt(f["expectedHash"].as_str().unwrap());

    let tx = provider
        .transaction_by_hash(expected_hash)
        .await
        .unwrap_or_else(|e| panic!("{name}: {e}"));

    assert_eq!(variant_name(&tx), f["expectedVariant"].as_str().unwrap(), "{name}");
    assert_eq!(tx.transaction_hash(), expected_hash, "{name}");

    // Serializing the variant gives back exactly what the node sent.
    let reencoded = serde_json::to_value(&tx).unwrap();
    let original = &f["response"]["result"];
    for (key, value) in original.as_object().unwrap() {
        if key == "transaction_hash" || key == "version" || value.is_array() {
            continue;
        }
        assert_eq!(
            felt_or_raw(&reencoded[key]),
            felt_or_raw(value),
            "{name}: field {key}"
        );
    }
    tx
}

/// Compares hex values numerically so `0x0a` and `0xa` are equal.
fn felt_or_raw(value: &serde_json::Value) -> serde_json::Value {
    match value.as_str().and_then(|s| Felt::from_hex(s).ok()) {
        Some(f) => serde_json::json!(format!("{f:#x}")),
        None => value.clone(),
    }
}

async fn assert_fails(name: &str) -> RpcError {
    let f = load_fixture(name);
    let provider = provider_for(&f);
    let err = provider
        .transaction_by_hash(Felt::ONE)
        .await
        .expect_err("fixture should fail");

    let expected_kind = match f["expectedErrorKind"].as_str().unwrap() {
        "HashNotFound" => ErrorKind::HashNotFound,
        "InvalidTxnIndex" => ErrorKind::InvalidTxnIndex,
        "BlockNotFound" => ErrorKind::BlockNotFound,
        "Internal" => ErrorKind::Internal,
        other => panic!("unknown kind {other}"),
    };
    assert_eq!(err.kind(), expected_kind, "{name}");
    let message = f["expectedMessage"].as_str().unwrap();
    assert!(err.to_string().contains(message), "{name}: {err}");
    err
}

// ─── Transactions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn golden_invoke_versions() {
    let v0 = assert_adapts("transactions/invoke-v0.json").await;
    assert_eq!(v0.version(), Felt::ZERO);

    let v1 = assert_adapts("transactions/invoke-v1.json").await;
    match &v1 {
        Transaction::InvokeV1(tx) => {
            assert_eq!(tx.nonce, felt("0x2a"));
            assert_eq!(tx.calldata.len(), 7);
            assert_eq!(tx.signature.len(), 2);
        }
        other => panic!("expected InvokeV1, got {other:?}"),
    }

    let v3 = assert_adapts("transactions/invoke-v3.json").await;
    match &v3 {
        Transaction::InvokeV3(tx) => {
            assert_eq!(tx.resource_bounds.l1_gas.max_amount, felt("0x186a0"));
            assert!(tx.paymaster_data.is_empty());
        }
        other => panic!("expected InvokeV3, got {other:?}"),
    }
}

#[tokio::test]
async fn golden_declare_versions() {
    for name in [
        "transactions/declare-v0.json",
        "transactions/declare-v1.json",
        "transactions/declare-v2.json",
    ] {
        let tx = assert_adapts(name).await;
        assert_eq!(tx.tx_type(), TransactionType::Declare);
    }
}

#[tokio::test]
async fn golden_version_independent_kinds() {
    let deploy = assert_adapts("transactions/deploy.json").await;
    assert_eq!(deploy.tx_type(), TransactionType::Deploy);

    let deploy_account = assert_adapts("transactions/deploy-account.json").await;
    assert_eq!(deploy_account.tx_type(), TransactionType::DeployAccount);

    let l1 = assert_adapts("transactions/l1-handler.json").await;
    match &l1 {
        Transaction::L1Handler(tx) => assert_eq!(tx.nonce, felt("0x1a4f2")),
        other => panic!("expected L1Handler, got {other:?}"),
    }
}

#[tokio::test]
async fn golden_unknown_type() {
    let err = assert_fails("transactions/unknown-type.json").await;
    assert!(err.transport_error().is_none());
}

#[tokio::test]
async fn golden_unsupported_declare_version() {
    assert_fails("transactions/declare-v3-unsupported.json").await;
}

#[tokio::test]
async fn golden_hash_not_found() {
    let err = assert_fails("transactions/hash-not-found.json").await;
    assert!(matches!(err, RpcError::HashNotFound));
}

// ─── Receipts & status ────────────────────────────────────────────────────────

#[tokio::test]
async fn golden_receipt_both_shapes() {
    let f = load_fixture("receipts/invoke-accepted-on-l1.json");
    let provider = provider_for(&f);
    let hash = felt(f["response"]["result"]["transaction_hash"].as_str().unwrap());

    let receipt = provider.transaction_receipt(hash).await.unwrap();
    assert_eq!(receipt.block_number, Some(643211));
    assert_eq!(receipt.receipt.transaction_hash, hash);
    assert_eq!(receipt.receipt.actual_fee.unit, FeeUnit::Wei);
    assert_eq!(receipt.receipt.execution_status, TxnExecutionStatus::Succeeded);
    assert_eq!(receipt.receipt.finality_status, TxnFinalityStatus::AcceptedOnL1);
    assert_eq!(receipt.receipt.events.len(), 1);
    assert_eq!(receipt.receipt.events[0].data.len(), 4);

    let detailed = provider.transaction_receipt_detailed(hash).await.unwrap();
    assert_eq!(detailed.block_number, 643211);
    assert_eq!(detailed.execution_status, "SUCCEEDED");
    assert_eq!(detailed.execution_resources.steps, 5722);
    assert_eq!(detailed.execution_resources.range_check_builtin_applications, 182);
    assert_eq!(detailed.execution_resources.data_availability.l1_data_gas, 192);
}

#[tokio::test]
async fn golden_rejected_status() {
    let f = load_fixture("status/rejected.json");
    let provider = provider_for(&f);
    let status = provider.transaction_status(Felt::ONE).await.unwrap();
    assert_eq!(status.finality_status, TxnStatus::Rejected);
    assert!(status.execution_status.is_none());
    assert!(status
        .failure_reason
        .as_deref()
        .unwrap()
        .starts_with("Invalid transaction nonce"));
}
