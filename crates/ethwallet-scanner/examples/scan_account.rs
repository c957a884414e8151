use std::env;

use anyhow::{Context, Result};
use ethwallet_core::{utils::format_address, utils::format_ether, BlockRef};
use ethwallet_rpc::{EthRpcClient, RpcConfig};
use ethwallet_scanner::{ScanRequest, TransactionScanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Uso: {} <RPC_ENDPOINT> <ENDERECO> [BLOCO_INICIAL] [BLOCO_FINAL|latest]", args[0]);
        std::process::exit(1);
    }
    let start: BlockRef = match args.get(3) {
        Some(s) => s.parse().context("bloco inicial invalido")?,
        None => BlockRef::Height(0),
    };
    let end: BlockRef = match args.get(4) {
        Some(s) => s.parse().context("bloco final invalido")?,
        None => BlockRef::Latest,
    };

    let request = ScanRequest::parse(&args[2], start, end).context("endereco invalido")?;
    let client = EthRpcClient::new(RpcConfig::with_endpoint(&args[1]))
        .await
        .context("falha ao conectar ao node")?;

    let result = TransactionScanner::new(client)
        .scan(&request)
        .await
        .context("falha na varredura")?;
    info!(
        "Blocos {}..={} varridos ({} buscas)",
        result.start_block, result.end_block, result.blocks_fetched
    );

    println!("Transacoes: {}", result.len());
    for tx in &result.transactions {
        println!(
            "bloco {:>8} idx {:>4}  {:?}  {} -> {}  {} ETH",
            tx.block_number.unwrap_or_default(),
            tx.transaction_index.unwrap_or_default(),
            tx.hash,
            tx.from.as_ref().map(format_address).unwrap_or_else(|| "-".into()),
            tx.to.as_ref().map(format_address).unwrap_or_else(|| "(criacao)".into()),
            format_ether(tx.value),
        );
    }

    Ok(())
}
