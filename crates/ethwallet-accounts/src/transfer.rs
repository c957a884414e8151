use ethers::types::{TransactionReceipt, TransactionRequest, TxHash};
use ethwallet_core::{
    error::Result,
    utils::{format_address, format_ether, parse_address, parse_ether},
    Address, Error, U256,
};
use ethwallet_rpc::EthRpcClient;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::wallet::wallet_from_private_key;

/// Transferência aceita pelo node, ainda não confirmada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentTransaction {
    pub hash: TxHash,
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// Resultado de uma transferência minerada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub hash: TxHash,
    pub block_number: Option<u64>,
    pub status: Option<u64>,
    pub gas_used: Option<U256>,
}

impl TransferReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == Some(1)
    }
}

impl From<TransactionReceipt> for TransferReceipt {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            hash: receipt.transaction_hash,
            block_number: receipt.block_number.map(|n| n.as_u64()),
            status: receipt.status.map(|s| s.as_u64()),
            gas_used: receipt.gas_used,
        }
    }
}

/// Envia `amount_eth` ether da conta de `private_key` para `to`
pub async fn send_transaction(
    client: &EthRpcClient,
    private_key: &str,
    to: &str,
    amount_eth: &str,
) -> Result<SentTransaction> {
    let wallet = wallet_from_private_key(private_key)?;
    let to = parse_address(to)?;
    let value = parse_ether(amount_eth)?;

    let tx = TransactionRequest::new().from(wallet.address).to(to).value(value);
    let hash = client.send_signed(wallet.signer.clone(), tx).await?;

    info!(
        ?hash,
        from = %format_address(&wallet.address),
        to = %format_address(&to),
        value = %format_ether(value),
        "transferência enviada"
    );

    Ok(SentTransaction {
        hash,
        from: wallet.address,
        to,
        value,
    })
}

/// Aguarda `confirmations` blocos sobre a transação `hash`
pub async fn wait_for_confirmation(client: &EthRpcClient, hash: TxHash, confirmations: usize) -> Result<TransferReceipt> {
    let receipt = client
        .wait_for_receipt(hash, confirmations)
        .await?
        .ok_or_else(|| Error::NotFound(format!("transação {:?} descartada pelo node", hash)))?;
    Ok(receipt.into())
}
