/*!
 * ethwallet RPC
 *
 * Cliente JSON-RPC para interação com nodes Ethereum
 */

use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, JsonRpcClient, Middleware, PendingTransaction, Provider, ProviderError, RpcError, Ws},
    signers::{LocalWallet, Signer},
    types::{Block, Transaction, TransactionReceipt, TransactionRequest, TxHash},
};
use ethereum_types::{Address, U256};
use ethwallet_core::{error::Result, BlockDataProvider, BlockWithTransactions, Error};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Endpoint público usado pelas demos quando nenhum é configurado
pub const DEFAULT_PUBLIC_ENDPOINT: &str = "https://testnet.monsoon.rainfall.one";

/// Configuração do cliente RPC
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl RpcConfig {
    /// Configuração padrão apontando para `endpoint`
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    fn is_websocket(&self) -> bool {
        let endpoint = self.endpoint.trim().to_ascii_lowercase();
        endpoint.starts_with("ws://") || endpoint.starts_with("wss://")
    }
}

/// Enum para diferentes tipos de transporte
#[derive(Debug, Clone)]
pub enum TransportType {
    Http(Provider<Http>),
    WebSocket(Provider<Ws>),
}

/// Cliente RPC para Ethereum
#[derive(Debug, Clone)]
pub struct EthRpcClient {
    transport: TransportType,
    config: RpcConfig,
}

fn rpc_error(context: &str, e: ProviderError) -> Error {
    if let Some(serde_err) = e.as_serde_error() {
        Error::DecodeError(format!("{}: {}", context, serde_err))
    } else {
        Error::RpcError(format!("{}: {}", context, e))
    }
}

impl EthRpcClient {
    /// Cria um novo cliente RPC HTTP
    pub async fn new_http(config: RpcConfig) -> Result<Self> {
        let url = Url::parse(&config.endpoint)
            .map_err(|e| Error::ValidationError(format!("URL de RPC inválida {}: {}", config.endpoint, e)))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::RpcError(format!("Falha ao criar cliente HTTP: {}", e)))?;
        let provider = Provider::new(Http::new_with_client(url, client)).interval(config.poll_interval);

        let client = Self {
            transport: TransportType::Http(provider),
            config,
        };
        client.check_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente RPC WebSocket
    pub async fn new_websocket(config: RpcConfig) -> Result<Self> {
        let ws = Ws::connect(config.endpoint.as_str())
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via WebSocket: {}", e)))?;
        let provider = Provider::new(ws).interval(config.poll_interval);

        let client = Self {
            transport: TransportType::WebSocket(provider),
            config,
        };
        client.check_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente baseado na URL
    pub async fn new(config: RpcConfig) -> Result<Self> {
        if config.is_websocket() {
            Self::new_websocket(config).await
        } else {
            Self::new_http(config).await
        }
    }

    async fn check_connection(&self) -> Result<()> {
        let head = self
            .get_block_number()
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar ao node Ethereum {}: {}", self.config.endpoint, e)))?;
        debug!(endpoint = %self.config.endpoint, head, "conectado ao node");
        Ok(())
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    pub fn transport(&self) -> &TransportType {
        &self.transport
    }

    /// Obtém o número do bloco atual
    pub async fn get_block_number(&self) -> Result<u64> {
        let number = match &self.transport {
            TransportType::Http(p) => p.get_block_number().await,
            TransportType::WebSocket(p) => p.get_block_number().await,
        }
        .map_err(|e| rpc_error("Falha ao obter número do bloco", e))?;

        Ok(number.as_u64())
    }

    /// Obtém um bloco com as transações completas; `None` se o bloco não existir
    pub async fn get_block_with_transactions(&self, block_number: u64) -> Result<Option<BlockWithTransactions>> {
        let block: Option<Block<Transaction>> = match &self.transport {
            TransportType::Http(p) => p.get_block_with_txs(block_number).await,
            TransportType::WebSocket(p) => p.get_block_with_txs(block_number).await,
        }
        .map_err(|e| rpc_error(&format!("Falha ao obter bloco {}", block_number), e))?;

        debug!(block_number, found = block.is_some(), "bloco obtido");
        Ok(block.map(|b| BlockWithTransactions::from_ethers(&b, block_number)))
    }

    /// Obtém o saldo de uma conta em wei
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        match &self.transport {
            TransportType::Http(p) => p.get_balance(address, None).await,
            TransportType::WebSocket(p) => p.get_balance(address, None).await,
        }
        .map_err(|e| rpc_error("Falha ao obter saldo", e))
    }

    /// Obtém o nonce atual de uma conta
    pub async fn get_transaction_count(&self, address: Address) -> Result<U256> {
        match &self.transport {
            TransportType::Http(p) => p.get_transaction_count(address, None).await,
            TransportType::WebSocket(p) => p.get_transaction_count(address, None).await,
        }
        .map_err(|e| rpc_error("Falha ao obter nonce", e))
    }

    /// Obtém o chain id informado pelo node
    pub async fn chain_id(&self) -> Result<u64> {
        let id = match &self.transport {
            TransportType::Http(p) => p.get_chainid().await,
            TransportType::WebSocket(p) => p.get_chainid().await,
        }
        .map_err(|e| rpc_error("Falha ao obter chain id", e))?;

        if id > U256::from(u64::MAX) {
            return Err(Error::DecodeError(format!("chain id fora do intervalo: {}", id)));
        }
        Ok(id.as_u64())
    }

    /// Assina `tx` com `wallet` e a transmite, retornando o hash
    pub async fn send_signed(&self, wallet: LocalWallet, tx: TransactionRequest) -> Result<TxHash> {
        let chain_id = self.chain_id().await?;
        let wallet = wallet.with_chain_id(chain_id);
        let hash = match &self.transport {
            TransportType::Http(p) => sign_and_send(p.clone(), wallet, tx).await?,
            TransportType::WebSocket(p) => sign_and_send(p.clone(), wallet, tx).await?,
        };
        debug!(?hash, chain_id, "transação transmitida");
        Ok(hash)
    }

    /// Aguarda `confirmations` confirmações de `hash`; `None` se o node descartar a transação
    pub async fn wait_for_receipt(&self, hash: TxHash, confirmations: usize) -> Result<Option<TransactionReceipt>> {
        match &self.transport {
            TransportType::Http(p) => wait_pending(p, hash, confirmations).await,
            TransportType::WebSocket(p) => wait_pending(p, hash, confirmations).await,
        }
    }
}

async fn sign_and_send<P>(provider: Provider<P>, wallet: LocalWallet, tx: TransactionRequest) -> Result<TxHash>
where
    P: JsonRpcClient + 'static,
{
    let signer = SignerMiddleware::new(provider, wallet);
    let pending = signer
        .send_transaction(tx, None)
        .await
        .map_err(|e| Error::RpcError(format!("Falha ao enviar transação: {}", e)))?;
    Ok(pending.tx_hash())
}

async fn wait_pending<P>(provider: &Provider<P>, hash: TxHash, confirmations: usize) -> Result<Option<TransactionReceipt>>
where
    P: JsonRpcClient,
{
    PendingTransaction::new(hash, provider)
        .confirmations(confirmations)
        .await
        .map_err(|e| rpc_error("Falha ao aguardar transação", e))
}

/// Implementação da trait BlockDataProvider do ethwallet-core
#[async_trait]
impl BlockDataProvider for EthRpcClient {
    async fn get_chain_head(&self) -> Result<u64> {
        self.get_block_number().await
    }

    async fn get_block_with_transactions(&self, height: u64) -> Result<Option<BlockWithTransactions>> {
        EthRpcClient::get_block_with_transactions(self, height).await
    }
}
