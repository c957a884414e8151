/*!
 * ethwallet Scanner
 *
 * Busca de transações de um endereço por varredura sequencial de blocos
 */

pub mod request;
pub mod scanner;

pub use request::ScanRequest;
pub use scanner::{ScanResult, TransactionScanner};

use ethwallet_core::{error::Result, BlockDataProvider, BlockRef, ScannedTransaction};
use ethwallet_rpc::{EthRpcClient, RpcConfig};

/// Varre `[start_block, end_block]` em `provider` e retorna as transações de `address`
pub async fn scan_account_transactions<P: BlockDataProvider>(
    provider: P,
    address: &str,
    start_block: impl Into<BlockRef>,
    end_block: impl Into<BlockRef>,
) -> Result<Vec<ScannedTransaction>> {
    let request = ScanRequest::parse(address, start_block, end_block)?;
    let result = TransactionScanner::new(provider).scan(&request).await?;
    Ok(result.into_transactions())
}

/// Conecta ao node descrito em `config` e varre as transações de `address`
pub async fn fetch_account_transactions(
    config: RpcConfig,
    address: &str,
    start_block: impl Into<BlockRef>,
    end_block: impl Into<BlockRef>,
) -> Result<Vec<ScannedTransaction>> {
    let request = ScanRequest::parse(address, start_block, end_block)?;
    let client = EthRpcClient::new(config).await?;
    let result = TransactionScanner::new(client).scan(&request).await?;
    Ok(result.into_transactions())
}
