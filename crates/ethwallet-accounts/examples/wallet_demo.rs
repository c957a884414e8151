use std::env;

use anyhow::{Context, Result};
use ethwallet_accounts::{
    create_wallet, fetch_balance_wei, send_transaction, wait_for_confirmation, wallet_from_private_key,
};
use ethwallet_core::{utils::format_ether, BlockRef};
use ethwallet_rpc::{EthRpcClient, RpcConfig, DEFAULT_PUBLIC_ENDPOINT};
use ethwallet_scanner::fetch_account_transactions;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Configuração da demo, lida do ambiente (ou de `.env`) uma única vez
#[derive(Debug, Clone)]
struct DemoConfig {
    rpc_url: String,
    funded_pk: Option<String>,
    recipient: String,
    amount: String,
    scan_from: Option<String>,
}

impl DemoConfig {
    fn from_env() -> Self {
        let non_empty = |key: &str| env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            rpc_url: non_empty("RPC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_ENDPOINT.to_string()),
            funded_pk: non_empty("FUNDED_PK"),
            recipient: non_empty("RECIPIENT").unwrap_or_else(|| "0xRecipientAddressHere".to_string()),
            amount: non_empty("AMOUNT").unwrap_or_else(|| "0.001".to_string()),
            scan_from: non_empty("SCAN_FROM"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if dotenv.is_err() {
        info!("arquivo .env nao encontrado, usando apenas o ambiente");
    }
    let config = DemoConfig::from_env();

    let wallet = match &config.funded_pk {
        Some(pk) => {
            println!("Usando chave privada financiada de FUNDED_PK");
            wallet_from_private_key(pk).context("FUNDED_PK invalida")?
        }
        None => {
            let wallet = create_wallet();
            println!("Nova carteira criada (sem fundos). Guarde a chave privada para reutiliza-la:");
            println!("Address: {}", wallet.checksum_address());
            println!("PrivateKey: {}", wallet.private_key);
            wallet
        }
    };
    let address = wallet.checksum_address();

    let rpc = RpcConfig::with_endpoint(config.rpc_url.clone());
    let client = EthRpcClient::new(rpc.clone())
        .await
        .with_context(|| format!("falha ao conectar em {}", config.rpc_url))?;

    let balance = fetch_balance_wei(&client, &address).await?;
    println!("Balance: {} ETH", format_ether(balance));

    if let Some(from) = &config.scan_from {
        let start: BlockRef = from.parse().context("SCAN_FROM invalido")?;
        let txs = fetch_account_transactions(rpc, &address, start, BlockRef::Latest).await?;
        println!("Transactions: {}", txs.len());
    }

    if balance.is_zero() {
        println!();
        println!("Carteira com saldo zero. FINANCIE ESTE ENDERECO antes de enviar uma transacao.");
        println!("Opcoes:");
        println!(" - Se a carteira foi criada acima, copie a chave privada e o endereco impressos,");
        println!("   financie o endereco pelo faucet da rede ou por uma conta com fundos, defina FUNDED_PK no .env e execute de novo.");
        println!(" - Ou defina FUNDED_PK no .env com uma chave privada que ja tenha ETH de teste.");
        return Ok(());
    }

    println!(
        "Enviando {} ETH -> {} via {} ...",
        config.amount, config.recipient, config.rpc_url
    );

    let sent = match send_transaction(&client, &wallet.private_key, &config.recipient, &config.amount).await {
        Ok(sent) => sent,
        Err(e) => {
            eprintln!("send_transaction falhou: {}", e);
            return Ok(());
        }
    };
    println!("TX enviada. Hash: {:?}", sent.hash);
    println!("Aguardando confirmacao...");

    match wait_for_confirmation(&client, sent.hash, 1).await {
        Ok(receipt) => println!(
            "Tx confirmada. Bloco: {} Status: {}",
            receipt.block_number.map(|n| n.to_string()).unwrap_or_else(|| "?".into()),
            receipt.status.map(|s| s.to_string()).unwrap_or_else(|| "?".into()),
        ),
        Err(e) => eprintln!("falha ao aguardar confirmacao: {}", e),
    }

    Ok(())
}
