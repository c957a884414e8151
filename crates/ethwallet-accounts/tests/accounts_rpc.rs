use ethwallet_accounts::{
    fetch_account_balance, fetch_balance_wei, send_transaction, wait_for_confirmation, wallet_from_private_key,
};
use ethwallet_core::{Error, H256, U256};
use ethwallet_rpc::{EthRpcClient, RpcConfig};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

async fn mount_result(server: &MockServer, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": result,
        })))
        .mount(server)
        .await;
}

async fn client_for(server: &MockServer) -> EthRpcClient {
    mount_result(server, "eth_blockNumber", json!("0x10")).await;
    let config = RpcConfig {
        endpoint: server.uri(),
        timeout: Duration::from_secs(5),
        poll_interval: Duration::from_millis(10),
    };
    EthRpcClient::new(config).await.unwrap()
}

#[tokio::test]
async fn balance_is_formatted_in_ether() {
    let server = MockServer::start().await;
    mount_result(&server, "eth_getBalance", json!("0x14d1120d7b160000")).await;
    let client = client_for(&server).await;

    assert_eq!(fetch_account_balance(&client, RECIPIENT).await.unwrap(), "1.5");
    assert_eq!(
        fetch_balance_wei(&client, RECIPIENT).await.unwrap(),
        U256::from(1_500_000_000_000_000_000u128)
    );
}

#[tokio::test]
async fn zero_balance() {
    let server = MockServer::start().await;
    mount_result(&server, "eth_getBalance", json!("0x0")).await;
    let client = client_for(&server).await;

    assert_eq!(fetch_account_balance(&client, RECIPIENT).await.unwrap(), "0.0");
}

#[tokio::test]
async fn balance_rejects_malformed_address() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let res = fetch_account_balance(&client, "0xRecipientAddressHere").await;
    assert!(matches!(res, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn transfer_signs_and_broadcasts() {
    let server = MockServer::start().await;
    let hash = H256::repeat_byte(0x5a);
    mount_result(&server, "eth_chainId", json!("0x7a69")).await;
    mount_result(&server, "eth_getTransactionCount", json!("0x3")).await;
    mount_result(&server, "eth_gasPrice", json!("0x3b9aca00")).await;
    mount_result(&server, "eth_estimateGas", json!("0x5208")).await;
    mount_result(&server, "eth_sendRawTransaction", json!(format!("{:?}", hash))).await;
    let client = client_for(&server).await;

    let sent = send_transaction(&client, DEV_KEY, RECIPIENT, "0.001").await.unwrap();

    assert_eq!(sent.hash, hash);
    assert_eq!(sent.from, wallet_from_private_key(DEV_KEY).unwrap().address);
    assert_eq!(sent.value, U256::exp10(15));
}

#[tokio::test]
async fn transfer_validates_before_touching_the_node() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let bad_amount = send_transaction(&client, DEV_KEY, RECIPIENT, "lots").await;
    assert!(matches!(bad_amount, Err(Error::ValidationError(_))));

    let bad_recipient = send_transaction(&client, DEV_KEY, "0xRecipientAddressHere", "0.001").await;
    assert!(matches!(bad_recipient, Err(Error::ValidationError(_))));

    let bad_key = send_transaction(&client, "0xdeadbeef", RECIPIENT, "0.001").await;
    assert!(matches!(bad_key, Err(Error::WalletError(_))));
}

#[tokio::test]
async fn dropped_transaction_is_not_found() {
    let server = MockServer::start().await;
    mount_result(&server, "eth_getTransactionByHash", Value::Null).await;
    let client = client_for(&server).await;

    let res = wait_for_confirmation(&client, H256::repeat_byte(0x01), 1).await;
    assert!(matches!(res, Err(Error::NotFound(_))));
}
