use ethwallet_core::{
    error::Result,
    utils::{format_ether, parse_address},
    U256,
};
use ethwallet_rpc::EthRpcClient;

/// Saldo de `address` em wei
pub async fn fetch_balance_wei(client: &EthRpcClient, address: &str) -> Result<U256> {
    let address = parse_address(address)?;
    client.get_balance(address).await
}

/// Saldo de `address` formatado em ether ("0.0", "1.25")
pub async fn fetch_account_balance(client: &EthRpcClient, address: &str) -> Result<String> {
    Ok(format_ether(fetch_balance_wei(client, address).await?))
}
